use egui::{Color32, Frame, Layout, Margin, RichText, Rounding, Ui, Vec2};

use super::{empty_state, PanelContext};
use crate::model::{FunFact, ImagePosition, StorySection};
use crate::ui::markdown::show_markdown;
use crate::ui::theme::{palette_pick, parse_hex_color};

pub fn show(ui: &mut Ui, story: &[StorySection], fun_facts: &[FunFact], cx: &PanelContext<'_>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Story").strong().color(cx.palette.accent));
    });
    ui.separator();
    ui.add_space(12.0);

    if story.is_empty() && fun_facts.is_empty() {
        empty_state(ui, &cx.palette, "Nothing here yet");
        return;
    }

    for section in story {
        cx.card(ui, |ui| story_card(ui, section, cx));
        ui.add_space(20.0);
    }

    if !fun_facts.is_empty() {
        ui.label(RichText::new("Fun facts").size(18.0).strong());
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for fact in fun_facts {
                fun_fact_bubble(ui, fact);
            }
        });
    }
}

fn story_card(ui: &mut Ui, section: &StorySection, cx: &PanelContext<'_>) {
    let width = ui.available_width();
    let Some(image) = section.image.as_deref() else {
        show_markdown(ui, &section.markdown);
        return;
    };
    if width < 640.0 {
        cx.image(ui, image, Vec2::new(width, 256.0));
        ui.add_space(12.0);
        show_markdown(ui, &section.markdown);
        return;
    }

    let half = (width - 24.0) / 2.0;
    let layout = match section.image_position {
        ImagePosition::Left => Layout::left_to_right(egui::Align::Center),
        ImagePosition::Right => Layout::right_to_left(egui::Align::Center),
    };
    ui.with_layout(layout, |ui| {
        cx.image(ui, image, Vec2::new(half, 320.0));
        ui.add_space(24.0);
        ui.allocate_ui_with_layout(Vec2::new(half, 0.0), Layout::top_down(egui::Align::Min), |ui| {
            show_markdown(ui, &section.markdown);
        });
    });
}

/// Bubble colour: the fact's own hex colour, else a stable palette pick.
pub fn bubble_color(fact: &FunFact) -> Color32 {
    fact.color
        .as_deref()
        .and_then(|c| parse_hex_color(c).ok())
        .unwrap_or_else(|| palette_pick(&fact.id))
}

fn fun_fact_bubble(ui: &mut Ui, fact: &FunFact) {
    let color = bubble_color(fact);
    let [r, g, b, _] = color.to_array();
    Frame::none()
        .fill(Color32::from_rgba_unmultiplied(r, g, b, 40))
        .rounding(Rounding::same(20.0))
        .inner_margin(Margin::symmetric(14.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&fact.emoji).size(20.0));
                ui.label(RichText::new(&fact.text).strong().color(color));
            });
        });
}
