use egui::{Layout, RichText, Ui, Vec2};

use super::{empty_state, panel_heading, PanelContext};
use crate::model::ContentRecord;

pub const EMPTY_MESSAGE: &str = "No professional experiences to display";
const MAX_THUMBNAILS: usize = 4;

pub fn show(ui: &mut Ui, records: &[ContentRecord], cx: &PanelContext<'_>) {
    if records.is_empty() {
        empty_state(ui, &cx.palette, EMPTY_MESSAGE);
        return;
    }

    panel_heading(ui, &cx.palette, "💼 Professional Life");
    for (index, record) in records.iter().enumerate() {
        cx.card(ui, |ui| section_card(ui, record, index % 2 == 0, cx));
        ui.add_space(24.0);
    }
}

/// The main image, falling back to the first extra image.
fn display_image(record: &ContentRecord) -> Option<&str> {
    Some(record.image.as_str())
        .filter(|s| !s.is_empty())
        .or_else(|| record.additional_images.first().map(String::as_str))
}

fn section_card(ui: &mut Ui, record: &ContentRecord, image_on_left: bool, cx: &PanelContext<'_>) {
    let width = ui.available_width();
    let Some(image) = display_image(record) else {
        text_column(ui, record, cx);
        return;
    };

    // Stack image above text when the window is narrow.
    if width < 640.0 {
        cx.image(ui, image, Vec2::new(width, width * 0.6));
        ui.add_space(12.0);
        text_column(ui, record, cx);
        return;
    }

    let half = (width - 24.0) / 2.0;
    let layout = if image_on_left {
        Layout::left_to_right(egui::Align::Center)
    } else {
        Layout::right_to_left(egui::Align::Center)
    };
    ui.with_layout(layout, |ui| {
        cx.image(ui, image, Vec2::new(half, half * 0.66));
        ui.add_space(24.0);
        ui.allocate_ui_with_layout(Vec2::new(half, 0.0), Layout::top_down(egui::Align::Min), |ui| {
            text_column(ui, record, cx);
        });
    });
}

fn text_column(ui: &mut Ui, record: &ContentRecord, cx: &PanelContext<'_>) {
    ui.label(RichText::new(&record.title).size(20.0).strong().color(cx.palette.text_primary));
    ui.add_space(8.0);
    ui.label(RichText::new(&record.description).color(cx.palette.text_secondary));

    if !record.additional_images.is_empty() {
        ui.add_space(12.0);
        ui.label(RichText::new("More photos:").small().color(cx.palette.text_dim));
        ui.horizontal_wrapped(|ui| {
            for image in record.additional_images.iter().take(MAX_THUMBNAILS) {
                cx.image(ui, image, Vec2::splat(64.0));
            }
        });
    }
}
