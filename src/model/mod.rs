pub mod content;
pub mod period;
pub mod timeline;

pub use content::{
    ContentRecord, FunFact, ImagePosition, Portfolio, ProjectsSettings, ResumeData, SiteSettings,
    StorySection,
};
pub use period::{CalendarMonth, Period};
pub use timeline::{Category, TimelineEntry, TimelineViewport};
