use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use super::{empty_state, PanelContext};
use crate::model::ProjectsSettings;

pub fn show(ui: &mut Ui, projects: Option<&ProjectsSettings>, cx: &PanelContext<'_>) {
    let Some(projects) = projects else {
        empty_state(ui, &cx.palette, "No projects to display");
        return;
    };

    if let Some(description) = &projects.description {
        ui.label(RichText::new(description).color(cx.palette.text_secondary));
        ui.add_space(12.0);
    }

    if projects.slides_url.trim().is_empty() {
        empty_state(ui, &cx.palette, "No projects to display");
        return;
    }

    cx.card(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(icons::PRESENTATION).size(48.0).color(cx.palette.accent));
            ui.add_space(8.0);
            ui.label(RichText::new("Projects Portfolio").size(18.0).strong());
            ui.add_space(8.0);
            if ui.button(format!("{}  Open slides", icons::ARROW_SQUARE_OUT)).clicked() {
                cx.open_external(&projects.slides_url);
            }
        });
    });
}
