pub mod dialogs;
pub mod dock;
pub mod markdown;
pub mod menu_bar;
pub mod panels;
pub mod theme;
pub mod theme_manager;
pub mod timeline_chart;
pub mod window_chrome;
