use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use super::PanelContext;
use crate::model::period::CalendarMonth;
use crate::model::{TimelineEntry, TimelineViewport};
use crate::ui::timeline_chart::{show_timeline_chart, ChartInteraction};

/// Zoom controls above the chart. Returns the chart's interaction.
pub fn show(
    ui: &mut Ui,
    entries: &[TimelineEntry],
    viewport: &mut TimelineViewport,
    now: CalendarMonth,
    cx: &PanelContext<'_>,
) -> ChartInteraction {
    if !entries.is_empty() {
        ui.horizontal(|ui| {
            if ui.small_button(icons::MAGNIFYING_GLASS_MINUS).on_hover_text("Zoom out").clicked() {
                viewport.zoom_out();
            }
            if ui.small_button(icons::MAGNIFYING_GLASS_PLUS).on_hover_text("Zoom in").clicked() {
                viewport.zoom_in();
            }
            if ui.small_button("Reset").clicked() {
                viewport.reset_zoom();
            }
            ui.label(
                RichText::new(format!("Zoom: {:.0}%", viewport.zoom_percent()))
                    .size(10.5)
                    .color(cx.palette.text_dim),
            );
        });
        ui.add_space(4.0);
    }
    show_timeline_chart(entries, viewport, now, &cx.palette, ui)
}
