use egui::{Id, RichText, Rounding, Sense, Stroke, Ui, Vec2};

use super::{empty_state, PanelContext};
use crate::model::ContentRecord;

const THUMBS_PER_ROW: usize = 4;

/// Gallery: a large image of the selected hobby, a thumbnail grid to pick
/// from, and the description beside it.
pub fn show(ui: &mut Ui, hobbies: &[ContentRecord], cx: &PanelContext<'_>) {
    if hobbies.is_empty() {
        empty_state(ui, &cx.palette, "No items to display");
        return;
    }

    let state_id = Id::new("hobby_gallery_selected");
    let mut selected: usize = ui.ctx().data_mut(|d| d.get_temp(state_id)).unwrap_or(0);
    if selected >= hobbies.len() {
        selected = 0;
    }

    let width = ui.available_width();
    let columns = if width < 640.0 { 1 } else { 2 };
    let column_width = (width - 24.0 * (columns - 1) as f32) / columns as f32;

    ui.columns(columns, |cols| {
        let (first, rest) = cols.split_at_mut(1);
        let gallery = &mut first[0];
        let current = &hobbies[selected];
        cx.image(gallery, &current.image, Vec2::new(column_width, column_width * 9.0 / 16.0));
        gallery.add_space(12.0);

        let thumb_w = (column_width - 8.0 * (THUMBS_PER_ROW - 1) as f32) / THUMBS_PER_ROW as f32;
        for (row_index, items) in hobbies.chunks(THUMBS_PER_ROW).enumerate() {
            gallery.horizontal(|ui| {
                for (i, item) in items.iter().enumerate() {
                    let index = row_index * THUMBS_PER_ROW + i;
                    let size = Vec2::new(thumb_w, thumb_w * 9.0 / 16.0);
                    let response = ui
                        .scope(|ui| {
                            if index != selected {
                                ui.set_opacity(0.7);
                            }
                            cx.image(ui, &item.image, size);
                        })
                        .response
                        .interact(Sense::click())
                        .on_hover_text(&item.title);
                    if index == selected {
                        ui.painter().rect_stroke(
                            response.rect.expand(2.0),
                            Rounding::same(8.0),
                            Stroke::new(2.0, cx.palette.accent),
                        );
                    }
                    if response.clicked() {
                        selected = index;
                    }
                }
            });
            gallery.add_space(8.0);
        }

        let text = match rest.first_mut() {
            Some(ui) => ui,
            None => gallery,
        };
        text.label(RichText::new(&current.title).size(22.0).strong());
        text.add_space(8.0);
        text.label(RichText::new(&current.description).color(cx.palette.text_secondary));
    });

    ui.ctx().data_mut(|d| d.insert_temp(state_id, selected));
}
