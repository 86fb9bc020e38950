use egui::{Align2, Color32, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

use crate::layout::{compute_layout, CategoryLayout, TimelineLayout};
use crate::model::period::CalendarMonth;
use crate::model::{Category, TimelineEntry, TimelineViewport};
use crate::ui::theme::{self, Palette};

const LANE_FRACTION: f32 = 0.45;
const AXIS_FRACTION: f32 = 0.10;
const LANE_INSET: f32 = 16.0;
const HEADER_HEIGHT: f32 = 48.0;
const CARD_PADDING: f32 = 10.0;
const ACCENT_BAR: f32 = 4.0;

pub const EMPTY_MESSAGE: &str = "No timeline entries to display";

/// Result details from interactions in the timeline chart.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    /// Entry whose card was clicked this frame.
    pub clicked: Option<String>,
}

/// Render the two-lane timeline chart.
pub fn show_timeline_chart(
    entries: &[TimelineEntry],
    viewport: &mut TimelineViewport,
    now: CalendarMonth,
    palette: &Palette,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();

    let Some(layout) = compute_layout(entries, viewport, now) else {
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(EMPTY_MESSAGE).color(palette.text_dim));
        });
        return interaction;
    };

    // Handle zoom with ctrl + scroll wheel
    if ui.rect_contains_pointer(ui.max_rect()) && ui.input(|i| i.modifiers.ctrl) {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll > 0.0 {
            viewport.zoom_in();
        } else if scroll < 0.0 {
            viewport.zoom_out();
        }
    }

    let width = ui.available_width().max(320.0);
    let (response, painter) = ui.allocate_painter(
        Vec2::new(width, HEADER_HEIGHT + layout.total_height),
        Sense::hover(),
    );
    let origin = response.rect.min;
    let lane_width = width * LANE_FRACTION;
    let axis_width = width * AXIS_FRACTION;

    let work_rect = Rect::from_min_size(
        Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
        Vec2::new(lane_width - LANE_INSET, layout.total_height),
    );
    let axis_x = origin.x + lane_width + axis_width / 2.0;
    let education_rect = Rect::from_min_size(
        Pos2::new(origin.x + lane_width + axis_width + LANE_INSET, origin.y + HEADER_HEIGHT),
        Vec2::new(lane_width - LANE_INSET, layout.total_height),
    );

    draw_headers(&painter, origin, lane_width, axis_width);
    draw_axis(&painter, &layout, axis_x, origin.y + HEADER_HEIGHT, palette);

    for (category, lane_rect) in [(Category::Work, work_rect), (Category::Education, education_rect)] {
        let lane = layout.lane(category);
        for id in &lane.order {
            let Some(entry) = entries.iter().find(|e| &e.id == id) else {
                continue;
            };
            let Some(card) = card_rect(lane, entry, category, lane_rect) else {
                continue;
            };
            let card_response = ui.interact(
                card,
                ui.make_persistent_id(("timeline_card", &entry.id)),
                Sense::click(),
            );
            let hovered = card_response.hovered();
            draw_card(&painter, card, entry, category, hovered, palette);

            if hovered {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                egui::show_tooltip_at_pointer(
                    ui.ctx(),
                    ui.layer_id(),
                    egui::Id::new(("timeline_tip", &entry.id)),
                    |ui| {
                        ui.label(egui::RichText::new(&entry.title).strong());
                        ui.label(entry.display_range());
                    },
                );
            }
            if card_response.clicked() {
                interaction.clicked = Some(entry.id.clone());
            }
        }
    }

    interaction
}

fn card_rect(lane: &CategoryLayout, entry: &TimelineEntry, category: Category, lane_rect: Rect) -> Option<Rect> {
    let metrics = lane.get(&entry.id)?;
    let (offset, card_width) = lane.column_span(metrics.column, lane_rect.width());
    // Work cards hang from the axis side of their lane.
    let left = match category {
        Category::Work => lane_rect.right() - offset - card_width,
        Category::Education => lane_rect.left() + offset,
    };
    Some(Rect::from_min_size(
        Pos2::new(left, lane_rect.top() + metrics.top),
        Vec2::new(card_width, metrics.height),
    ))
}

fn draw_headers(painter: &egui::Painter, origin: Pos2, lane_width: f32, axis_width: f32) {
    let y = origin.y + HEADER_HEIGHT / 2.0;
    painter.text(
        Pos2::new(origin.x + lane_width - LANE_INSET, y),
        Align2::RIGHT_CENTER,
        "💼 Work Experience",
        egui::FontId::proportional(18.0),
        Category::Work.default_color(),
    );
    painter.text(
        Pos2::new(origin.x + lane_width + axis_width + LANE_INSET, y),
        Align2::LEFT_CENTER,
        "🎓 Education",
        egui::FontId::proportional(18.0),
        Category::Education.default_color(),
    );
}

fn draw_axis(painter: &egui::Painter, layout: &TimelineLayout, x: f32, top: f32, palette: &Palette) {
    let bottom = top + layout.total_height;
    painter.line_segment(
        [Pos2::new(x, top), Pos2::new(x, bottom)],
        Stroke::new(4.0, palette.axis_line),
    );

    let marker = Color32::from_rgb(168, 85, 247);
    for year in &layout.years {
        let y = top + year.offset;
        painter.circle(Pos2::new(x, y), 8.0, palette.window_bg, Stroke::new(3.0, marker));

        let label_center = Pos2::new(x, y + 24.0);
        let galley = painter.layout_no_wrap(year.year.to_string(), theme::font_year(), palette.text_primary);
        let pill = Rect::from_center_size(label_center, galley.size() + Vec2::new(18.0, 8.0));
        painter.rect(pill, Rounding::same(pill.height() / 2.0), palette.card_bg, Stroke::new(2.0, marker));
        painter.galley(pill.center() - galley.size() / 2.0, galley, palette.text_primary);
    }
}

fn draw_card(
    painter: &egui::Painter,
    rect: Rect,
    entry: &TimelineEntry,
    category: Category,
    hovered: bool,
    palette: &Palette,
) {
    let color = entry.display_color();
    let [r, g, b, _] = color.to_array();
    let tint = if hovered { 60 } else { 36 };
    let rounding = Rounding::same(theme::CARD_ROUNDING);

    if hovered {
        painter.rect_filled(rect.translate(Vec2::new(0.0, 3.0)), rounding, Color32::from_black_alpha(40));
    }
    painter.rect_filled(rect, rounding, palette.card_bg);
    painter.rect_filled(rect, rounding, Color32::from_rgba_unmultiplied(r, g, b, tint));

    // Colour bar on the axis side.
    let bar = match category {
        Category::Work => Rect::from_min_max(Pos2::new(rect.right() - ACCENT_BAR, rect.top()), rect.max),
        Category::Education => Rect::from_min_max(rect.min, Pos2::new(rect.left() + ACCENT_BAR, rect.bottom())),
    };
    painter.rect_filled(bar, Rounding::same(2.0), color);

    let clip = painter.with_clip_rect(rect.shrink(2.0));
    let text_width = (rect.width() - CARD_PADDING * 2.0 - ACCENT_BAR).max(10.0);
    let mut y = rect.top() + CARD_PADDING;
    let x = match category {
        Category::Work => rect.left() + CARD_PADDING,
        Category::Education => rect.left() + CARD_PADDING + ACCENT_BAR,
    };

    let badge = if category == Category::Work { "💼" } else { "🎓" };
    let title = clip.layout(
        format!("{}  {}", badge, entry.title),
        theme::font_card_title(),
        palette.text_primary,
        text_width,
    );
    let title_height = title.size().y;
    clip.galley(Pos2::new(x, y), title, palette.text_primary);
    y += title_height + 2.0;

    if let Some(org) = &entry.organization {
        clip.text(Pos2::new(x, y), Align2::LEFT_TOP, org, theme::font_small(), palette.text_secondary);
    }

    clip.text(
        Pos2::new(x, rect.bottom() - CARD_PADDING),
        Align2::LEFT_BOTTOM,
        entry.display_range(),
        egui::FontId::monospace(10.5),
        palette.text_dim,
    );
}
