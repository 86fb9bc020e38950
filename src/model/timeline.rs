use egui::Color32;
use serde::{Deserialize, Serialize};

use super::period::{months_between, CalendarMonth, Period};

/// Which side of the year axis an entry is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Education,
}

impl Category {
    /// Unknown or missing categories fall back to `Work`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "education" | "school" | "study" => Category::Education,
            _ => Category::Work,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Education => "Education",
        }
    }

    /// Card colour used when an entry does not declare its own.
    pub fn default_color(&self) -> Color32 {
        match self {
            Category::Work => Color32::from_rgb(0x10, 0xB9, 0x81),
            Category::Education => Color32::from_rgb(0x3B, 0x82, 0xF6),
        }
    }
}

/// A single engagement on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub id: String,
    pub start: CalendarMonth,
    /// `Period::Open` for ongoing entries.
    pub end: Period,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub organization: Option<String>,
    pub color: Option<Color32>,
    pub order: i64,
}

impl TimelineEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        start: CalendarMonth,
        end: Period,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            title: title.into(),
            description: String::new(),
            category,
            organization: None,
            color: None,
            order: 0,
        }
    }

    /// End month used for layout; ongoing entries end at `now`.
    pub fn resolved_end(&self, now: CalendarMonth) -> CalendarMonth {
        self.end.resolve(now)
    }

    pub fn duration_months(&self, now: CalendarMonth) -> u32 {
        months_between(self.start, self.resolved_end(now))
    }

    /// `Mar 2021 - Present`.
    pub fn display_range(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    pub fn display_color(&self) -> Color32 {
        self.color.unwrap_or_else(|| self.category.default_color())
    }

    /// True when the resolved month ranges of both entries share a month.
    pub fn overlaps(&self, other: &TimelineEntry, now: CalendarMonth) -> bool {
        self.start <= other.resolved_end(now) && self.resolved_end(now) >= other.start
    }
}

/// Sort newest start first; equal starts fall back to id.
pub fn sort_by_start_desc(entries: &mut [TimelineEntry]) {
    entries.sort_by(|a, b| b.start.cmp(&a.start).then_with(|| a.id.cmp(&b.id)));
}

/// Every calendar year touched by the entries, ascending.
pub fn year_range(entries: &[TimelineEntry], now: CalendarMonth) -> Vec<i32> {
    let years = entries
        .iter()
        .flat_map(|e| [e.start.year(), e.resolved_end(now).year()]);
    let (min, max) = years.fold((i32::MAX, i32::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
    if min > max {
        return Vec::new();
    }
    (min..=max).collect()
}

/// Vertical scale of the timeline chart.
#[derive(Debug, Clone)]
pub struct TimelineViewport {
    /// Pixels per month (controls zoom level).
    pub pixels_per_month: f32,
    /// Cards never render shorter than this.
    pub min_card_height: f32,
}

impl Default for TimelineViewport {
    fn default() -> Self {
        Self {
            pixels_per_month: Self::DEFAULT_PIXELS_PER_MONTH,
            min_card_height: 80.0,
        }
    }
}

impl TimelineViewport {
    pub const DEFAULT_PIXELS_PER_MONTH: f32 = 12.0;

    /// Convert a month count into a vertical pixel distance.
    pub fn months_to_y(&self, months: i64) -> f32 {
        months as f32 * self.pixels_per_month
    }

    /// Zoom in (increase pixels per month).
    pub fn zoom_in(&mut self) {
        self.pixels_per_month = (self.pixels_per_month * 1.2).min(48.0);
    }

    /// Zoom out (decrease pixels per month).
    pub fn zoom_out(&mut self) {
        self.pixels_per_month = (self.pixels_per_month / 1.2).max(4.0);
    }

    pub fn reset_zoom(&mut self) {
        self.pixels_per_month = Self::DEFAULT_PIXELS_PER_MONTH;
    }

    pub fn zoom_percent(&self) -> f32 {
        self.pixels_per_month / Self::DEFAULT_PIXELS_PER_MONTH * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> CalendarMonth {
        CalendarMonth::new(year, month).unwrap()
    }

    #[test]
    fn category_parsing_defaults_to_work() {
        assert_eq!(Category::parse("Education"), Category::Education);
        assert_eq!(Category::parse("work"), Category::Work);
        assert_eq!(Category::parse("achievement"), Category::Work);
        assert_eq!(Category::parse(""), Category::Work);
    }

    #[test]
    fn ongoing_entry_resolves_to_now() {
        let now = ym(2026, 10);
        let e = TimelineEntry::new("a", "A", Category::Work, ym(2025, 10), Period::Open);
        assert_eq!(e.resolved_end(now), now);
        assert_eq!(e.duration_months(now), 12);
        assert_eq!(e.display_range(), "Oct 2025 - Present");
    }

    #[test]
    fn year_range_spans_all_entries() {
        let now = ym(2026, 10);
        let entries = vec![
            TimelineEntry::new("a", "A", Category::Work, ym(2019, 5), Period::At(ym(2020, 1))),
            TimelineEntry::new("b", "B", Category::Education, ym(2023, 9), Period::Open),
        ];
        assert_eq!(year_range(&entries, now), (2019..=2026).collect::<Vec<_>>());
        assert!(year_range(&[], now).is_empty());
    }

    #[test]
    fn zoom_is_clamped() {
        let mut vp = TimelineViewport::default();
        for _ in 0..50 {
            vp.zoom_in();
        }
        assert_eq!(vp.pixels_per_month, 48.0);
        for _ in 0..50 {
            vp.zoom_out();
        }
        assert_eq!(vp.pixels_per_month, 4.0);
        vp.reset_zoom();
        assert_eq!(vp.zoom_percent(), 100.0);
    }
}
