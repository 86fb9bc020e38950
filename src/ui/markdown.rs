//! Render story markdown directly into egui widgets.

use egui::{RichText, Ui};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::io::markup::{is_safe_url, markdown_options};

#[derive(Default)]
struct InlineState {
    strong: bool,
    emphasis: bool,
    strikethrough: bool,
    heading: Option<HeadingLevel>,
    link: Option<String>,
}

impl InlineState {
    fn styled(&self, text: &str) -> RichText {
        let mut rich = RichText::new(text);
        if let Some(level) = self.heading {
            rich = rich.size(heading_size(level)).strong();
        }
        if self.strong {
            rich = rich.strong();
        }
        if self.emphasis {
            rich = rich.italics();
        }
        if self.strikethrough {
            rich = rich.strikethrough();
        }
        rich
    }
}

fn heading_size(level: HeadingLevel) -> f32 {
    match level {
        HeadingLevel::H1 => 22.0,
        HeadingLevel::H2 => 19.0,
        HeadingLevel::H3 => 16.0,
        _ => 14.0,
    }
}

/// One rendered line of inline pieces.
enum Piece {
    Text(RichText),
    Link { text: RichText, url: String },
    Code(String),
}

fn flush(ui: &mut Ui, pieces: &mut Vec<Piece>, indent: f32) {
    if pieces.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.add_space(indent);
        ui.spacing_mut().item_spacing.x = 0.0;
        for piece in pieces.drain(..) {
            match piece {
                Piece::Text(text) => {
                    ui.label(text);
                }
                Piece::Link { text, url } => {
                    ui.hyperlink_to(text, url);
                }
                Piece::Code(code) => {
                    ui.code(code);
                }
            }
        }
    });
}

pub fn show_markdown(ui: &mut Ui, markdown: &str) {
    let mut state = InlineState::default();
    let mut pieces: Vec<Piece> = Vec::new();
    // One entry per open list: the next ordered number, if ordered.
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut in_code_block = false;
    let mut code_block = String::new();

    for event in Parser::new_ext(markdown, markdown_options()) {
        let indent = lists.len().saturating_sub(1) as f32 * 16.0;
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush(ui, &mut pieces, indent);
                state.heading = Some(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                flush(ui, &mut pieces, indent);
                state.heading = None;
                ui.add_space(4.0);
            }
            Event::End(TagEnd::Paragraph) => {
                flush(ui, &mut pieces, indent);
                if lists.is_empty() {
                    ui.add_space(6.0);
                }
            }
            Event::Start(Tag::Strong) => state.strong = true,
            Event::End(TagEnd::Strong) => state.strong = false,
            Event::Start(Tag::Emphasis) => state.emphasis = true,
            Event::End(TagEnd::Emphasis) => state.emphasis = false,
            Event::Start(Tag::Strikethrough) => state.strikethrough = true,
            Event::End(TagEnd::Strikethrough) => state.strikethrough = false,
            Event::Start(Tag::Link { dest_url, .. }) => {
                state.link = is_safe_url(&dest_url).then(|| dest_url.to_string());
            }
            Event::End(TagEnd::Link) => state.link = None,
            Event::Start(Tag::List(first)) => {
                flush(ui, &mut pieces, indent);
                lists.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                flush(ui, &mut pieces, indent);
                lists.pop();
                if lists.is_empty() {
                    ui.add_space(6.0);
                }
            }
            Event::Start(Tag::Item) => {
                flush(ui, &mut pieces, indent);
                let bullet = match lists.last_mut() {
                    Some(Some(n)) => {
                        let label = format!("{}. ", n);
                        *n += 1;
                        label
                    }
                    _ => "• ".to_string(),
                };
                pieces.push(Piece::Text(RichText::new(bullet)));
            }
            Event::End(TagEnd::Item) => flush(ui, &mut pieces, indent),
            Event::Start(Tag::CodeBlock(_)) => {
                flush(ui, &mut pieces, indent);
                in_code_block = true;
                code_block.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                ui.code(code_block.trim_end());
                ui.add_space(6.0);
            }
            Event::Text(text) if in_code_block => code_block.push_str(&text),
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                let rich = state.styled(&text);
                match &state.link {
                    Some(url) => pieces.push(Piece::Link {
                        text: rich,
                        url: url.clone(),
                    }),
                    None => pieces.push(Piece::Text(rich)),
                }
            }
            Event::Code(code) => pieces.push(Piece::Code(code.to_string())),
            Event::SoftBreak => pieces.push(Piece::Text(RichText::new(" "))),
            Event::HardBreak => flush(ui, &mut pieces, indent),
            Event::Rule => {
                flush(ui, &mut pieces, indent);
                ui.separator();
            }
            _ => {}
        }
    }
    flush(ui, &mut pieces, 0.0);
}
