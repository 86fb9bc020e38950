use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use super::PanelContext;
use crate::model::ResumeData;

pub fn show(ui: &mut Ui, resume: &ResumeData, cx: &PanelContext<'_>) {
    if !resume.description.is_empty() {
        crate::ui::markdown::show_markdown(ui, &resume.description);
        ui.add_space(12.0);
    }

    let available = cx.assets.resolve(&resume.pdf_url).is_some_and(|a| a.exists());
    ui.horizontal(|ui| {
        let button = egui::Button::new(
            RichText::new(format!("{}  Open Resume", icons::DOWNLOAD_SIMPLE)).color(egui::Color32::WHITE),
        )
        .fill(cx.palette.accent);
        if ui.add_enabled(available, button).clicked() {
            cx.open_external(&resume.pdf_url);
        }
        if !available {
            ui.label(RichText::new(format!("{} is not available", resume.pdf_url)).color(cx.palette.text_dim));
        }
    });
}
