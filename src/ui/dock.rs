use egui::{Align2, Area, Color32, Id, Order, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use crate::shell::AppId;
use crate::ui::theme::{self, Palette};

const ICON_GAP: f32 = 12.0;
const DOCK_PADDING: f32 = 10.0;

/// Hover magnification by distance from the hovered icon.
pub fn dock_scale(index: usize, hovered: Option<usize>) -> f32 {
    let Some(hovered) = hovered else {
        return 1.0;
    };
    match index.abs_diff(hovered) {
        0 => 1.5,
        1 => 1.25,
        2 => 1.1,
        _ => 1.0,
    }
}

/// Draw the dock along the bottom edge. Returns the app whose icon was
/// clicked. `hovered` carries the hovered index between frames.
pub fn show_dock(
    ctx: &egui::Context,
    palette: &Palette,
    open_app: Option<AppId>,
    hovered: &mut Option<usize>,
) -> Option<AppId> {
    let screen = ctx.screen_rect();
    let count = AppId::ALL.len() as f32;
    let base = theme::DOCK_ICON_SIZE;
    let width = count * base + (count - 1.0) * ICON_GAP + DOCK_PADDING * 2.0;
    let height = base + DOCK_PADDING * 2.0;
    let dock_rect = Rect::from_center_size(
        Pos2::new(screen.center().x, screen.bottom() - 8.0 - height / 2.0),
        Vec2::new(width, height),
    );

    let mut clicked = None;
    let mut now_hovered = None;

    Area::new(Id::new("dock"))
        .order(Order::Foreground)
        .fixed_pos(dock_rect.min)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(dock_rect.size(), Sense::hover());
            let painter = ui.painter();
            painter.rect(
                rect,
                Rounding::same(16.0),
                palette.glass,
                Stroke::new(1.0, palette.glass_stroke),
            );

            for (index, app) in AppId::ALL.into_iter().enumerate() {
                let scale = dock_scale(index, *hovered);
                let size = base * scale;
                let slot_x = rect.left() + DOCK_PADDING + index as f32 * (base + ICON_GAP);
                let center_x = slot_x + base / 2.0;
                let lift = (scale - 1.0) * 20.0;
                let icon_rect = Rect::from_center_size(
                    Pos2::new(center_x, rect.bottom() - DOCK_PADDING - base / 2.0 - lift),
                    Vec2::splat(size),
                );
                let slot_rect = Rect::from_min_size(
                    Pos2::new(slot_x, rect.top()),
                    Vec2::new(base, rect.height()),
                );

                let response = ui.interact(slot_rect, ui.make_persistent_id(("dock", app.key())), Sense::click());
                if response.hovered() {
                    now_hovered = Some(index);
                }
                if response.clicked() {
                    clicked = Some(app);
                }

                let painter = ui.painter();
                painter.rect_filled(icon_rect, Rounding::same(12.0 * scale), palette.accent);
                painter.text(
                    icon_rect.center(),
                    Align2::CENTER_CENTER,
                    app.icon(),
                    egui::FontId::proportional(26.0 * scale),
                    Color32::WHITE,
                );

                if open_app == Some(app) {
                    painter.circle_filled(
                        Pos2::new(center_x, rect.bottom() - 4.0),
                        2.5,
                        palette.text_secondary,
                    );
                }

                if response.hovered() {
                    let label_pos = Pos2::new(center_x, icon_rect.top() - 14.0);
                    let galley = painter.layout_no_wrap(
                        app.dock_label().to_string(),
                        theme::font_small(),
                        Color32::WHITE,
                    );
                    let bg = Rect::from_center_size(label_pos, galley.size() + Vec2::new(12.0, 6.0));
                    painter.rect_filled(bg, Rounding::same(4.0), Color32::from_black_alpha(220));
                    painter.galley(bg.center() - galley.size() / 2.0, galley, Color32::WHITE);
                }
            }
        });

    if *hovered != now_hovered {
        *hovered = now_hovered;
        ctx.request_repaint();
    }
    clicked
}
