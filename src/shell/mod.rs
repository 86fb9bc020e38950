//! Desktop shell state, independent of rendering.

pub mod apps;
pub mod windows;

pub use apps::AppId;
pub use windows::{Presentation, WindowManager, WindowMode};
