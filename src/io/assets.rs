//! Resolve image and document references from content files.
//!
//! Content refers to assets the way a website does (`/photos/me.jpg`), so
//! rooted paths are looked up under the assets directory.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    Local(PathBuf),
    Remote(String),
}

impl AssetRef {
    /// URI usable with `egui::Image::new`.
    pub fn uri(&self) -> String {
        match self {
            AssetRef::Local(path) => format!("file://{}", path.display()),
            AssetRef::Remote(url) => url.clone(),
        }
    }

    pub fn exists(&self) -> bool {
        match self {
            AssetRef::Local(path) => path.is_file(),
            AssetRef::Remote(_) => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, reference: &str) -> Option<AssetRef> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Some(AssetRef::Remote(reference.to_string()));
        }
        if lower.contains("://") || lower.starts_with("data:") || lower.starts_with("javascript:") {
            return None;
        }

        let relative = reference.trim_start_matches('/');
        if relative.split(['/', '\\']).any(|part| part == "..") {
            return None;
        }
        Some(AssetRef::Local(self.root.join(relative)))
    }
}
