//! Content directory loader.
//!
//! Layout, relative to the content root:
//!
//! ```text
//! settings.json
//! resume/resume.md
//! hobbies/*.md
//! professional/*.md
//! timeline/*.md
//! personal/story/*.md
//! personal/funfacts/*.md
//! ```
//!
//! A missing directory or file is not an error: the section comes back empty
//! (or at its defaults). Files that fail to parse are skipped with a warning.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::frontmatter::{parse_document, Document};
use super::markup;
use super::ContentError;
use crate::model::content::{DEFAULT_FUN_FACT_EMOJI, DEFAULT_RESUME_PDF, PLACEHOLDER_IMAGE};
use crate::model::period::{parse_period, Period};
use crate::model::timeline::sort_by_start_desc;
use crate::model::{
    Category, ContentRecord, FunFact, ImagePosition, Portfolio, ResumeData, SiteSettings,
    StorySection, TimelineEntry,
};
use crate::ui::theme::parse_hex_color;

const CONTENT_EXTENSION: &str = "md";

#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
}

impl ContentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every section.
    pub fn load_all(&self) -> Portfolio {
        let portfolio = Portfolio {
            settings: self.settings(),
            resume: self.resume(),
            hobbies: self.hobbies(),
            professional: self.professional(),
            timeline: self.timeline(),
            story: self.story(),
            fun_facts: self.fun_facts(),
        };
        debug!(
            root = %self.root.display(),
            hobbies = portfolio.hobbies.len(),
            professional = portfolio.professional.len(),
            timeline = portfolio.timeline.len(),
            story = portfolio.story.len(),
            fun_facts = portfolio.fun_facts.len(),
            "content loaded"
        );
        portfolio
    }

    pub fn settings(&self) -> SiteSettings {
        let path = self.root.join("settings.json");
        if !path.exists() {
            return SiteSettings::default();
        }
        let parsed = read_file(&path)
            .and_then(|text| serde_json::from_str::<SiteSettings>(&text).map_err(ContentError::from));
        match parsed {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring site settings {}: {}", path.display(), e);
                SiteSettings::default()
            }
        }
    }

    pub fn resume(&self) -> ResumeData {
        let path = self.root.join("resume").join("resume.md");
        if !path.exists() {
            return ResumeData::default();
        }
        match load_document(&path) {
            Ok(doc) => ResumeData {
                description: doc
                    .str("description")
                    .or_else(|| doc.body_text().map(str::to_string))
                    .unwrap_or_default(),
                pdf_url: doc
                    .str_any(&["pdfUrl", "pdf_url"])
                    .unwrap_or_else(|| DEFAULT_RESUME_PDF.to_string()),
            },
            Err(e) => {
                warn!("Ignoring resume {}: {}", path.display(), e);
                ResumeData::default()
            }
        }
    }

    pub fn hobbies(&self) -> Vec<ContentRecord> {
        self.records(&["hobbies"])
    }

    pub fn professional(&self) -> Vec<ContentRecord> {
        self.records(&["professional"])
    }

    fn records(&self, section: &[&str]) -> Vec<ContentRecord> {
        let mut records: Vec<ContentRecord> = self
            .section(section)
            .into_iter()
            .map(|(id, doc)| ContentRecord {
                title: doc.str("title").unwrap_or_default(),
                image: doc
                    .str("image")
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                description: doc
                    .str("description")
                    .or_else(|| doc.body_text().map(str::to_string))
                    .unwrap_or_default(),
                order: doc.int("order").unwrap_or(0),
                additional_images: {
                    let mut images = doc.list("additionalImages");
                    images.extend(doc.list("additional_images"));
                    images
                },
                id,
            })
            .collect();
        records.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        records
    }

    pub fn timeline(&self) -> Vec<TimelineEntry> {
        let mut entries: Vec<TimelineEntry> = self
            .section(&["timeline"])
            .into_iter()
            .filter_map(|(id, doc)| timeline_entry(id, &doc))
            .collect();
        sort_by_start_desc(&mut entries);
        entries
    }

    pub fn story(&self) -> Vec<StorySection> {
        let mut sections: Vec<StorySection> = self
            .section(&["personal", "story"])
            .into_iter()
            .map(|(id, doc)| {
                let markdown = doc
                    .str("content")
                    .or_else(|| doc.body_text().map(str::to_string))
                    .unwrap_or_default();
                StorySection {
                    html: markup::render_html(&markdown),
                    markdown,
                    image: doc.str("image"),
                    image_position: doc
                        .str("imagePosition")
                        .or_else(|| doc.str("image_position"))
                        .map(|s| ImagePosition::parse(&s))
                        .unwrap_or_default(),
                    order: doc.int("order").unwrap_or(0),
                    id,
                }
            })
            .collect();
        sections.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        sections
    }

    pub fn fun_facts(&self) -> Vec<FunFact> {
        self.section(&["personal", "funfacts"])
            .into_iter()
            .map(|(id, doc)| FunFact {
                emoji: doc
                    .str("emoji")
                    .unwrap_or_else(|| DEFAULT_FUN_FACT_EMOJI.to_string()),
                text: doc
                    .str("text")
                    .or_else(|| doc.body_text().map(str::to_string))
                    .unwrap_or_default(),
                color: doc.str("color"),
                id,
            })
            .collect()
    }

    /// Parsed documents of one section directory as `(file stem, document)`,
    /// in file-name order.
    fn section(&self, section: &[&str]) -> Vec<(String, Document)> {
        let dir = section.iter().fold(self.root.clone(), |p, s| p.join(s));
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Content section {} not present", dir.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Cannot read content section {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(CONTENT_EXTENSION)
            })
            .collect();
        paths.sort();

        paths
            .into_iter()
            .filter_map(|path| {
                let id = path.file_stem()?.to_str()?.to_string();
                match load_document(&path) {
                    Ok(doc) => Some((id, doc)),
                    Err(e) => {
                        warn!("Skipping {}: {}", path.display(), e);
                        None
                    }
                }
            })
            .collect()
    }
}

fn read_file(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_document(path: &Path) -> Result<Document, ContentError> {
    parse_document(&read_file(path)?)
}

fn timeline_entry(id: String, doc: &Document) -> Option<TimelineEntry> {
    let raw_start = doc.str_any(&["start_date", "date"]).unwrap_or_default();
    let start = match parse_period(&raw_start) {
        Some(Period::At(month)) => month,
        _ => {
            warn!("Skipping timeline entry '{}': invalid start date '{}'", id, raw_start);
            return None;
        }
    };

    let end = match doc.str("end_date") {
        None => Period::Open,
        Some(raw) => match parse_period(&raw) {
            Some(Period::At(month)) if month < start => {
                warn!(
                    "Timeline entry '{}' ends ({}) before it starts ({}); clamping",
                    id, month, start
                );
                Period::At(start)
            }
            Some(period) => period,
            None => {
                warn!("Timeline entry '{}': invalid end date '{}', treating as ongoing", id, raw);
                Period::Open
            }
        },
    };

    let category = doc
        .str("category")
        .map(|s| Category::parse(&s))
        .unwrap_or(Category::Work);

    let color = doc.str("color").and_then(|raw| match parse_hex_color(&raw) {
        Ok(color) => Some(color),
        Err(e) => {
            warn!("Timeline entry '{}': {}", id, e);
            None
        }
    });

    let mut entry = TimelineEntry::new(id, doc.str("title").unwrap_or_default(), category, start, end);
    entry.description = doc
        .str("description")
        .or_else(|| doc.body_text().map(str::to_string))
        .unwrap_or_default();
    entry.organization = doc.str_any(&["company_or_school", "organization"]);
    entry.color = color;
    entry.order = doc.int("order").unwrap_or(0);
    Some(entry)
}
