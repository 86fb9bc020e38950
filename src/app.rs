use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use tracing::{info, warn};

use crate::io::assets::AssetResolver;
use crate::io::settings::settings_path;
use crate::io::story_export::export_story;
use crate::io::ContentLoader;
use crate::model::period::CalendarMonth;
use crate::model::{Portfolio, TimelineViewport};
use crate::shell::{AppId, WindowManager};
use crate::ui;
use crate::ui::panels::PanelContext;
use crate::ui::theme::{self, ThemeMode};
use crate::ui::theme_manager::ThemeManager;
use crate::ui::window_chrome::ChromeAction;

/// Main application state.
pub struct PortfolioApp {
    pub portfolio: Portfolio,
    pub loader: ContentLoader,
    pub assets: AssetResolver,
    pub windows: WindowManager,
    pub timeline_viewport: TimelineViewport,

    // Dialog state
    pub show_about: bool,
    pub selected_entry: Option<String>,

    /// Transient note shown in the menu bar.
    pub status_message: Option<String>,

    // Theme engine
    pub theme_manager: ThemeManager,
    theme_changes: Receiver<ThemeMode>,

    dock_hover: Option<usize>,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, content_dir: PathBuf, assets_dir: PathBuf) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let system = if cc.egui_ctx.style().visuals.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        let mut theme_manager = ThemeManager::load(settings_path(), system);
        let theme_changes = theme_manager.subscribe();
        theme::apply_theme(&cc.egui_ctx, theme_manager.get());

        let loader = ContentLoader::new(content_dir);
        let portfolio = loader.load_all();
        info!("Loaded content from {}", loader.root().display());
        let status_message = empty_content_notice(&portfolio, loader.root());
        if let Some(notice) = &status_message {
            warn!("{notice}");
        }

        Self {
            portfolio,
            loader,
            assets: AssetResolver::new(assets_dir),
            windows: WindowManager::new(theme::MENU_BAR_HEIGHT, theme::DOCK_RESERVED),
            timeline_viewport: TimelineViewport::default(),
            show_about: false,
            selected_entry: None,
            status_message,
            theme_manager,
            theme_changes,
            dock_hover: None,
        }
    }

    pub fn now(&self) -> CalendarMonth {
        CalendarMonth::current()
    }

    // --- Content ---

    pub fn reload_content(&mut self) {
        self.portfolio = self.loader.load_all();
        self.selected_entry = None;
        info!("Reloaded content from {}", self.loader.root().display());
        self.status_message = match empty_content_notice(&self.portfolio, self.loader.root()) {
            Some(notice) => {
                warn!("{notice}");
                Some(notice)
            }
            None => Some("Content reloaded".to_string()),
        };
    }

    pub fn export_story(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Export Story")
            .add_filter("HTML", &["html"])
            .set_file_name("story.html")
            .save_file()
        else {
            return;
        };
        let author = &self.portfolio.settings.author_name;
        self.status_message = Some(match export_story(author, &self.portfolio.story, &path) {
            Ok(count) => {
                info!("Exported {} story sections to {}", count, path.display());
                format!("Exported {count} sections")
            }
            Err(e) => {
                warn!("Story export failed: {e}");
                "Export failed".to_string()
            }
        });
    }

    pub fn open_content_folder(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_title("Open Content Folder")
            .set_directory(self.loader.root())
            .pick_folder()
        {
            self.loader = ContentLoader::new(dir);
            self.reload_content();
        }
    }

    pub fn open_app(&mut self, app: AppId) {
        self.windows.open(app);
        self.status_message = None;
    }

    fn drain_theme_changes(&mut self, ctx: &egui::Context) {
        let mut latest = None;
        while let Ok(mode) = self.theme_changes.try_recv() {
            latest = Some(mode);
        }
        if let Some(mode) = latest {
            theme::apply_theme(ctx, mode);
        }
    }

    fn paint_desktop(&self, ctx: &egui::Context) {
        let palette = self.theme_manager.get().palette();
        let painter = ctx.layer_painter(egui::LayerId::background());
        let screen = ctx.screen_rect();
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(screen.left_top(), palette.desktop_top);
        mesh.colored_vertex(screen.right_top(), palette.desktop_top);
        mesh.colored_vertex(screen.right_bottom(), palette.desktop_bottom);
        mesh.colored_vertex(screen.left_bottom(), palette.desktop_bottom);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(egui::Shape::mesh(mesh));

        if self.windows.open_app().is_none() {
            painter.text(
                screen.center(),
                egui::Align2::CENTER_CENTER,
                &self.portfolio.settings.site_title,
                egui::FontId::proportional(36.0),
                palette.text_primary.gamma_multiply(0.5),
            );
        }
    }

    fn show_open_window(&mut self, ctx: &egui::Context) {
        let presentation = self.windows.presentation();
        let Some(app_id) = presentation.app() else {
            return;
        };

        let now = self.now();
        let cx = PanelContext {
            palette: self.theme_manager.get().palette(),
            assets: &self.assets,
        };
        let portfolio = &self.portfolio;
        let viewport = &mut self.timeline_viewport;
        let mut clicked_entry = None;

        let action = ui::window_chrome::show_window(ctx, presentation, &cx.palette, |ui| match app_id {
            AppId::Resume => ui::panels::resume::show(ui, &portfolio.resume, &cx),
            AppId::Projects => ui::panels::projects::show(ui, portfolio.settings.projects.as_ref(), &cx),
            AppId::Professional => ui::panels::professional::show(ui, &portfolio.professional, &cx),
            AppId::Hobbies => ui::panels::hobbies::show(ui, &portfolio.hobbies, &cx),
            AppId::Personal => ui::panels::personal::show(ui, &portfolio.story, &portfolio.fun_facts, &cx),
            AppId::Timeline => {
                let interaction = ui::panels::timeline::show(ui, &portfolio.timeline, viewport, now, &cx);
                clicked_entry = interaction.clicked;
            }
        });

        if clicked_entry.is_some() {
            self.selected_entry = clicked_entry;
        }
        match action {
            ChromeAction::None => {}
            ChromeAction::Close => {
                self.windows.close();
                self.selected_entry = None;
            }
            ChromeAction::ToggleMaximize => self.windows.toggle_maximize(),
            ChromeAction::Drag(delta) => self.windows.drag_by(delta),
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_theme_changes(ctx);
        self.windows.set_viewport(ctx.screen_rect());

        if ctx.input(|i| i.key_pressed(egui::Key::Escape))
            && !self.show_about
            && self.selected_entry.is_none()
        {
            self.windows.close();
        }

        self.paint_desktop(ctx);

        let palette = self.theme_manager.get().palette();
        let compact_modal = self.windows.is_compact() && self.windows.open_app().is_some();

        // Top panel: menu bar
        if !compact_modal {
            egui::TopBottomPanel::top("menu_bar")
                .exact_height(theme::MENU_BAR_HEIGHT)
                .frame(
                    egui::Frame::default()
                        .fill(palette.glass)
                        .inner_margin(egui::Margin::symmetric(12.0, 0.0)),
                )
                .show(ctx, |ui| {
                    ui::menu_bar::show_menu_bar(self, ui);
                });
        }

        self.show_open_window(ctx);

        if !compact_modal {
            let open = self.windows.open_app();
            if let Some(app) = ui::dock::show_dock(ctx, &palette, open, &mut self.dock_hover) {
                self.open_app(app);
            }
        }

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
        if self.selected_entry.is_some() {
            ui::dialogs::show_entry_dialog(self, ctx);
        }

        // The menu bar clock ticks once a second.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

fn empty_content_notice(portfolio: &Portfolio, root: &Path) -> Option<String> {
    portfolio
        .is_empty()
        .then(|| format!("No content found in {}", root.display()))
}
