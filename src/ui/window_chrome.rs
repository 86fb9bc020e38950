//! Traffic-light window frame around an app panel.

use egui::{
    Align2, Area, Color32, Frame, Id, Margin, Order, Pos2, Rect, Rounding, ScrollArea, Sense,
    Stroke, Ui, UiBuilder, Vec2,
};
use egui_phosphor::regular as icons;

use crate::shell::Presentation;
use crate::ui::theme::{self, Palette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChromeAction {
    None,
    Close,
    ToggleMaximize,
    Drag(Vec2),
}

const LIGHT_RADIUS: f32 = 6.0;
const LIGHT_SPACING: f32 = 20.0;

/// Draw the open window, if any, and report what the user did to its frame.
pub fn show_window(
    ctx: &egui::Context,
    presentation: Presentation,
    palette: &Palette,
    add_contents: impl FnOnce(&mut Ui),
) -> ChromeAction {
    let mut action = ChromeAction::None;
    let (app, rect, rounding, compact) = match presentation {
        Presentation::Closed => return action,
        Presentation::Windowed { app, rect } => (app, rect, theme::WINDOW_ROUNDING, false),
        Presentation::Maximized { app, rect } => (app, rect, 0.0, false),
        Presentation::FullscreenModal { app, rect } => (app, rect, 0.0, true),
    };

    let order = if compact { Order::Foreground } else { Order::Middle };
    Area::new(Id::new("app_window"))
        .order(order)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            Frame::none()
                .fill(palette.window_bg)
                .rounding(Rounding::same(rounding))
                .stroke(Stroke::new(1.0, palette.border_subtle))
                .shadow(ctx.style().visuals.window_shadow)
                .show(ui, |ui| {
                    ui.set_min_size(rect.size());
                    ui.set_max_size(rect.size());

                    let header = Rect::from_min_size(
                        rect.min,
                        Vec2::new(rect.width(), theme::WINDOW_HEADER_HEIGHT),
                    );
                    action = if compact {
                        modal_header(ui, header, app.title(), palette)
                    } else {
                        window_header(ui, header, app.title(), palette)
                    };

                    let body = Rect::from_min_max(
                        Pos2::new(rect.left(), header.bottom()),
                        rect.max,
                    );
                    ui.allocate_new_ui(UiBuilder::new().max_rect(body), |ui| {
                        ScrollArea::vertical()
                            .id_salt(("window_body", app.key()))
                            .auto_shrink([false, false])
                            .max_height(body.height())
                            .show(ui, |ui| {
                                Frame::none().inner_margin(Margin::same(16.0)).show(ui, add_contents);
                            });
                    });
                });
        });
    action
}

fn window_header(ui: &mut Ui, header: Rect, title: &str, palette: &Palette) -> ChromeAction {
    let mut action = ChromeAction::None;

    let drag = ui.interact(header, ui.make_persistent_id("window_header"), Sense::click_and_drag());
    if drag.dragged() {
        action = ChromeAction::Drag(drag.drag_delta());
    }
    if drag.double_clicked() {
        action = ChromeAction::ToggleMaximize;
    }

    let painter = ui.painter();
    painter.rect_filled(header, Rounding::ZERO, palette.window_header);
    painter.line_segment(
        [header.left_bottom(), header.right_bottom()],
        Stroke::new(1.0, palette.border_subtle),
    );
    painter.text(
        header.center(),
        Align2::CENTER_CENTER,
        title,
        theme::font_title(),
        palette.text_primary,
    );

    let lights = [
        (theme::TRAFFIC_CLOSE, icons::X, ChromeAction::Close, "close"),
        (theme::TRAFFIC_MINIMIZE, icons::MINUS, ChromeAction::Close, "minimize"),
        (theme::TRAFFIC_MAXIMIZE, icons::ARROWS_OUT_SIMPLE, ChromeAction::ToggleMaximize, "maximize"),
    ];
    let mut any_hovered = false;
    let mut responses = Vec::with_capacity(lights.len());
    for (i, (_, _, _, name)) in lights.iter().enumerate() {
        let center = Pos2::new(header.left() + 18.0 + i as f32 * LIGHT_SPACING, header.center().y);
        let hit = Rect::from_center_size(center, Vec2::splat(LIGHT_RADIUS * 2.0 + 2.0));
        let response = ui.interact(hit, ui.make_persistent_id(("traffic", *name)), Sense::click());
        any_hovered |= response.hovered();
        responses.push((center, response));
    }

    let painter = ui.painter();
    for ((color, glyph, on_click, _), (center, response)) in lights.iter().zip(responses) {
        painter.circle_filled(center, LIGHT_RADIUS, *color);
        if any_hovered {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                *glyph,
                egui::FontId::proportional(9.0),
                Color32::from_black_alpha(160),
            );
        }
        if response.clicked() {
            action = *on_click;
        }
    }
    action
}

fn modal_header(ui: &mut Ui, header: Rect, title: &str, palette: &Palette) -> ChromeAction {
    let painter = ui.painter();
    painter.rect_filled(header, Rounding::ZERO, palette.glass);
    painter.line_segment(
        [header.left_bottom(), header.right_bottom()],
        Stroke::new(1.0, palette.border_subtle),
    );
    painter.text(
        Pos2::new(header.left() + 16.0, header.center().y),
        Align2::LEFT_CENTER,
        title,
        egui::FontId::proportional(17.0),
        palette.text_primary,
    );

    let close_center = Pos2::new(header.right() - 24.0, header.center().y);
    let close_rect = Rect::from_center_size(close_center, Vec2::splat(28.0));
    let response = ui.interact(close_rect, ui.make_persistent_id("modal_close"), Sense::click());
    let painter = ui.painter();
    if response.hovered() {
        painter.circle_filled(close_center, 14.0, palette.hover);
    }
    painter.text(
        close_center,
        Align2::CENTER_CENTER,
        icons::X,
        egui::FontId::proportional(18.0),
        palette.text_primary,
    );
    if response.clicked() {
        ChromeAction::Close
    } else {
        ChromeAction::None
    }
}
