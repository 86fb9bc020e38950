//! Content panels hosted inside the app window.

pub mod hobbies;
pub mod personal;
pub mod professional;
pub mod projects;
pub mod resume;
pub mod timeline;

use egui::{Frame, Margin, RichText, Rounding, Sense, Ui, Vec2};
use tracing::warn;

use crate::io::assets::{AssetRef, AssetResolver};
use crate::ui::theme::{self, Palette};

/// What every panel needs besides its own data.
pub struct PanelContext<'a> {
    pub palette: Palette,
    pub assets: &'a AssetResolver,
}

impl PanelContext<'_> {
    /// Draw an image from a content reference, or a placeholder block when
    /// it cannot be resolved.
    pub fn image(&self, ui: &mut Ui, reference: &str, size: Vec2) {
        match self.assets.resolve(reference).filter(AssetRef::exists) {
            Some(asset) => {
                ui.add(
                    egui::Image::new(asset.uri())
                        .fit_to_exact_size(size)
                        .rounding(Rounding::same(theme::CARD_ROUNDING)),
                );
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
                ui.painter().rect_filled(rect, Rounding::same(theme::CARD_ROUNDING), self.palette.border_subtle);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::IMAGE,
                    egui::FontId::proportional(28.0),
                    self.palette.text_dim,
                );
            }
        }
    }

    /// Hand a document or URL to the system viewer.
    pub fn open_external(&self, reference: &str) {
        let Some(asset) = self.assets.resolve(reference) else {
            warn!("Refusing to open '{}'", reference);
            return;
        };
        let target = match &asset {
            AssetRef::Local(path) => path.display().to_string(),
            AssetRef::Remote(url) => url.clone(),
        };
        if let Err(e) = open::that(&target) {
            warn!("Could not open {}: {}", target, e);
        }
    }

    pub fn card<R>(&self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
        Frame::none()
            .fill(self.palette.card_bg)
            .stroke(egui::Stroke::new(1.0, self.palette.border_subtle))
            .rounding(Rounding::same(16.0))
            .inner_margin(Margin::same(20.0))
            .show(ui, add_contents)
            .inner
    }
}

pub fn empty_state(ui: &mut Ui, palette: &Palette, message: &str) {
    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(message).color(palette.text_dim));
    });
}

pub fn panel_heading(ui: &mut Ui, palette: &Palette, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).size(26.0).strong().color(palette.text_primary));
    });
    ui.add_space(16.0);
}
