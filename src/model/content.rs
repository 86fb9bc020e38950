use serde::{Deserialize, Serialize};

use super::timeline::TimelineEntry;

pub const PLACEHOLDER_IMAGE: &str = "/photos/placeholder.jpg";
pub const DEFAULT_RESUME_PDF: &str = "/resume/resume.pdf";
pub const DEFAULT_FUN_FACT_EMOJI: &str = "✨";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub description: String,
    pub pdf_url: String,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            description: "Resume not found".to_string(),
            pdf_url: DEFAULT_RESUME_PDF.to_string(),
        }
    }
}

/// A hobby or professional-life card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    pub order: i64,
    pub additional_images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

impl ImagePosition {
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("right") {
            ImagePosition::Right
        } else {
            ImagePosition::Left
        }
    }
}

/// One section of the personal story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySection {
    pub id: String,
    /// Markup source as written in the content file.
    pub markdown: String,
    /// `markdown` rendered to safe inline HTML. The panels draw `markdown`
    /// natively; this copy feeds the HTML story export.
    pub html: String,
    pub image: Option<String>,
    pub image_position: ImagePosition,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunFact {
    pub id: String,
    pub emoji: String,
    pub text: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSettings {
    #[serde(alias = "googleSlidesEmbedUrl")]
    pub slides_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_title: String,
    pub site_description: String,
    pub author_name: String,
    pub projects: Option<ProjectsSettings>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "My Portfolio".to_string(),
            site_description: "Welcome to my portfolio".to_string(),
            author_name: "Your Name".to_string(),
            projects: None,
        }
    }
}

/// Everything the desktop shell displays, loaded in one pass.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub settings: SiteSettings,
    pub resume: ResumeData,
    pub hobbies: Vec<ContentRecord>,
    pub professional: Vec<ContentRecord>,
    pub timeline: Vec<TimelineEntry>,
    pub story: Vec<StorySection>,
    pub fun_facts: Vec<FunFact>,
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.hobbies.is_empty()
            && self.professional.is_empty()
            && self.timeline.is_empty()
            && self.story.is_empty()
            && self.fun_facts.is_empty()
    }
}
