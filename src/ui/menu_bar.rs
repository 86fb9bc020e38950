use chrono::{DateTime, TimeZone};
use egui::{menu, Button, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::app::PortfolioApp;
use crate::ui::theme;

const FILE_JOKES: &[&str] = &[
    "Save? Relax, this is just a portfolio, not a thesis. 📄😅",
    "Open… maybe a coffee, not a file. ☕️😌",
    "Exit? No no, in Finland we finish what we start. 🇫🇮💪",
];

const EDIT_JOKES: &[&str] = &[
    "Undo? In Oulu we don't regret, we just continue. ❄️🙂",
    "Copy… but please don't copy my personality, ok? 😉📋",
    "Paste? Sure, paste your rye bread here. 🍞😂",
];

const VIEW_JOKES: &[&str] = &[
    "Zoom in, but not too close, personal space is Finnish culture. 😳↔️",
    "Zoom out. Good, take some air like a true Northerner. 🌬️❄️",
    "Reload… take a sip of coffee first, then maybe reload. ☕️🔄",
];

/// `Tue Oct 14 3:05 PM`
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%a %b %-d %-I:%M %p").to_string()
}

fn jokes(ui: &mut Ui, items: &[&str], app: &PortfolioApp) {
    let color = app.theme_manager.get().palette().text_secondary;
    for item in items {
        ui.label(RichText::new(*item).size(11.5).color(color));
    }
}

/// Render the top menu bar.
pub fn show_menu_bar(app: &mut PortfolioApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.label(RichText::new(icons::APPLE_LOGO).font(theme::font_menu()));

        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            ui.set_min_width(320.0);
            if ui.button("  Open Content Folder…").clicked() {
                app.open_content_folder();
                ui.close_menu();
            }
            if ui.button("  Reload Content").clicked() {
                app.reload_content();
                ui.close_menu();
            }
            if ui
                .add_enabled(!app.portfolio.story.is_empty(), Button::new("  Export Story as HTML…"))
                .clicked()
            {
                app.export_story();
                ui.close_menu();
            }
            ui.separator();
            jokes(ui, FILE_JOKES, app);
        });

        ui.menu_button(RichText::new("  Edit  ").font(theme::font_menu()), |ui| {
            ui.set_min_width(320.0);
            jokes(ui, EDIT_JOKES, app);
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            ui.set_min_width(320.0);
            ui.label(RichText::new("Timeline").small().weak());
            if ui.button("  Zoom In         Ctrl+Scroll ↑").clicked() {
                app.timeline_viewport.zoom_in();
                ui.close_menu();
            }
            if ui.button("  Zoom Out       Ctrl+Scroll ↓").clicked() {
                app.timeline_viewport.zoom_out();
                ui.close_menu();
            }
            if ui.button("  Actual Size").clicked() {
                app.timeline_viewport.reset_zoom();
                ui.close_menu();
            }
            ui.separator();
            let next = app.theme_manager.get().toggled();
            if ui.button(format!("  Switch to {} Theme", next.label())).clicked() {
                app.theme_manager.set(next);
                ui.close_menu();
            }
            ui.separator();
            jokes(ui, VIEW_JOKES, app);
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned clock and theme toggle
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format_clock(&chrono::Local::now()))
                    .font(theme::font_menu())
                    .strong(),
            );
            let icon = if app.theme_manager.get().is_dark() {
                icons::SUN
            } else {
                icons::MOON
            };
            if ui
                .add(Button::new(RichText::new(icon).size(14.0)).frame(false))
                .on_hover_text("Toggle theme")
                .clicked()
            {
                app.theme_manager.toggle();
            }
            if let Some(status) = &app.status_message {
                ui.label(RichText::new(status).size(11.0).weak());
            }
        });
    });
}
