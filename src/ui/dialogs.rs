use crate::app::PortfolioApp;
use crate::model::{Category, TimelineEntry};
use egui::{Color32, Context, RichText, Rounding, Window};

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut PortfolioApp, ctx: &Context) {
    let mut should_close = false;
    let palette = app.theme_manager.get().palette();
    let settings = &app.portfolio.settings;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 200.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new(&settings.site_title).strong());
                ui.add_space(2.0);
                ui.label(RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION"))).color(palette.text_secondary));
                ui.add_space(10.0);
                ui.label(&settings.site_description);
                ui.label(RichText::new(format!("by {}", settings.author_name)).color(palette.text_secondary));
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}

/// Detail dialog for the timeline entry the user clicked.
pub fn show_entry_dialog(app: &mut PortfolioApp, ctx: &Context) {
    let Some(id) = app.selected_entry.clone() else {
        return;
    };
    let Some(entry) = app.portfolio.timeline.iter().find(|e| e.id == id) else {
        app.selected_entry = None;
        return;
    };

    let palette = app.theme_manager.get().palette();
    let now = app.now();
    let mut open = true;
    let mut should_close = false;
    Window::new(RichText::new(&entry.title).strong().size(14.0))
        .id(egui::Id::new("timeline_entry_dialog"))
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(560.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            category_badge(ui, entry);
            ui.add_space(10.0);

            ui.label(RichText::new(&entry.title).size(24.0).strong());
            if let Some(org) = &entry.organization {
                ui.label(RichText::new(org).size(16.0).color(palette.text_secondary));
            }
            ui.add_space(6.0);
            ui.label(
                RichText::new(duration_line(entry, now))
                    .monospace()
                    .color(palette.text_dim),
            );
            ui.add_space(12.0);
            if !entry.description.is_empty() {
                crate::ui::markdown::show_markdown(ui, &entry.description);
            }
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });

    if !open || should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.selected_entry = None;
    }
}

/// "Mar 2021 - Present • 14 months"
pub fn duration_line(entry: &TimelineEntry, now: crate::model::CalendarMonth) -> String {
    format!("{} • {} months", entry.display_range(), entry.duration_months(now))
}

fn category_badge(ui: &mut egui::Ui, entry: &TimelineEntry) {
    let text = match entry.category {
        Category::Work => "💼 Work",
        Category::Education => "🎓 Education",
    };
    egui::Frame::none()
        .fill(entry.display_color())
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::Margin::symmetric(12.0, 5.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).strong().size(12.0));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::period::Period;
    use crate::model::CalendarMonth;

    #[test]
    fn duration_line_counts_months() {
        let start = CalendarMonth::new(2021, 3).unwrap();
        let entry = TimelineEntry::new("x", "X", Category::Work, start, Period::Open);
        let now = CalendarMonth::new(2022, 5).unwrap();
        assert_eq!(duration_line(&entry, now), "Mar 2021 - Present • 14 months");
    }
}
