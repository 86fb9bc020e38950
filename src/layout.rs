//! Timeline layout engine.
//!
//! Turns timeline entries into card geometry for a vertical, newest-at-top
//! chart with two independent lanes (work and education) around a shared
//! year axis.
//!
//! Column assignment is a greedy interval colouring: entries are visited in
//! paint order (latest end first) and each takes the lowest column whose
//! already-placed cards neither share a month with it nor overlap its
//! rendered card. The second test matters for short engagements, whose cards
//! are floored to the minimum height and reach past their last month.
//! Earlier placements are never revisited, so the result is deterministic
//! for a given paint order but not always the minimum possible number of
//! columns.

use std::collections::HashMap;

use crate::model::period::{months_between, CalendarMonth};
use crate::model::timeline::{year_range, Category, TimelineEntry, TimelineViewport};

/// Gap between columns, as a fraction of the lane width.
pub const COLUMN_GAP_FRACTION: f32 = 0.02;
/// Extra space below the earliest month.
pub const BOTTOM_PADDING: f32 = 150.0;

/// Geometry of one card, relative to the top of its lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub top: f32,
    pub height: f32,
    pub column: usize,
}

impl LayoutMetrics {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Earliest start and latest resolved end over a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineBounds {
    pub earliest: CalendarMonth,
    pub latest: CalendarMonth,
}

impl TimelineBounds {
    /// Months from the top of the chart (the latest month) down to `month`.
    /// Months after the latest clamp to the top.
    pub fn offset_months(&self, month: CalendarMonth) -> i64 {
        month.months_until(self.latest).max(0)
    }
}

pub fn timeline_bounds(entries: &[TimelineEntry], now: CalendarMonth) -> Option<TimelineBounds> {
    let mut months = entries
        .iter()
        .flat_map(|e| [e.start, e.resolved_end(now)]);
    let first = months.next()?;
    let (earliest, latest) = months.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
    Some(TimelineBounds { earliest, latest })
}

/// Layout of one lane.
#[derive(Debug, Clone, Default)]
pub struct CategoryLayout {
    /// Entry ids in paint order.
    pub order: Vec<String>,
    pub metrics: HashMap<String, LayoutMetrics>,
    /// Number of columns the lane needs (at least 1).
    pub columns: usize,
}

impl CategoryLayout {
    pub fn get(&self, id: &str) -> Option<&LayoutMetrics> {
        self.metrics.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Horizontal offset and width of a column inside a lane of
    /// `lane_width`. A single-column lane gets the full width.
    pub fn column_span(&self, column: usize, lane_width: f32) -> (f32, f32) {
        let columns = self.columns.max(1);
        if columns == 1 {
            return (0.0, lane_width);
        }
        let gap = lane_width * COLUMN_GAP_FRACTION;
        let width = (lane_width - gap * (columns - 1) as f32) / columns as f32;
        (column as f32 * (width + gap), width)
    }

    pub fn content_bottom(&self) -> f32 {
        self.metrics
            .values()
            .map(LayoutMetrics::bottom)
            .fold(0.0, f32::max)
    }
}

/// Paint order: latest resolved end first, then latest start, then id.
pub fn paint_order<'a>(entries: &[&'a TimelineEntry], now: CalendarMonth) -> Vec<&'a TimelineEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        b.resolved_end(now)
            .cmp(&a.resolved_end(now))
            .then_with(|| b.start.cmp(&a.start))
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// What a placed card occupies in its column.
#[derive(Debug, Clone, Copy)]
struct Slot {
    /// Offsets from the latest month. Both ends are inclusive.
    months: (i64, i64),
    /// Rendered `[top, bottom)` in pixels.
    pixels: (f32, f32),
}

impl Slot {
    fn collides(&self, other: &Slot) -> bool {
        let months = self.months.0 <= other.months.1 && other.months.0 <= self.months.1;
        let pixels = self.pixels.0 < other.pixels.1 && other.pixels.0 < self.pixels.1;
        months || pixels
    }
}

/// Lay out the entries of a single lane against shared bounds.
pub fn layout_lane(
    entries: &[&TimelineEntry],
    bounds: &TimelineBounds,
    viewport: &TimelineViewport,
    now: CalendarMonth,
) -> CategoryLayout {
    let mut occupied: Vec<Vec<Slot>> = Vec::new();
    let mut layout = CategoryLayout::default();

    for entry in paint_order(entries, now) {
        let end = entry.resolved_end(now);
        let span_top = bounds.offset_months(end);
        let span_bottom = bounds.offset_months(entry.start).max(span_top);

        let duration = months_between(entry.start, end);
        let top = viewport.months_to_y(span_top);
        let height = viewport
            .months_to_y(duration as i64)
            .max(viewport.min_card_height);
        let slot = Slot {
            months: (span_top, span_bottom),
            pixels: (top, top + height),
        };

        let column = (0..)
            .find(|&c| {
                occupied
                    .get(c)
                    .map_or(true, |slots: &Vec<Slot>| slots.iter().all(|placed| !placed.collides(&slot)))
            })
            .unwrap_or(0);
        if occupied.len() <= column {
            occupied.resize_with(column + 1, Vec::new);
        }
        occupied[column].push(slot);

        let metrics = LayoutMetrics { top, height, column };
        layout.order.push(entry.id.clone());
        layout.metrics.insert(entry.id.clone(), metrics);
    }

    layout.columns = occupied.len().max(1);
    layout
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearMarker {
    pub year: i32,
    pub offset: f32,
}

/// Full chart layout.
#[derive(Debug, Clone)]
pub struct TimelineLayout {
    pub bounds: TimelineBounds,
    pub work: CategoryLayout,
    pub education: CategoryLayout,
    /// Newest year first.
    pub years: Vec<YearMarker>,
    pub total_height: f32,
}

impl TimelineLayout {
    pub fn lane(&self, category: Category) -> &CategoryLayout {
        match category {
            Category::Work => &self.work,
            Category::Education => &self.education,
        }
    }
}

/// Lay out the whole timeline. Returns `None` for an empty entry set so the
/// caller can show its empty state.
pub fn compute_layout(
    entries: &[TimelineEntry],
    viewport: &TimelineViewport,
    now: CalendarMonth,
) -> Option<TimelineLayout> {
    let bounds = timeline_bounds(entries, now)?;

    let lane_entries = |category: Category| -> Vec<&TimelineEntry> {
        entries.iter().filter(|e| e.category == category).collect()
    };
    let work = layout_lane(&lane_entries(Category::Work), &bounds, viewport, now);
    let education = layout_lane(&lane_entries(Category::Education), &bounds, viewport, now);

    let years = year_range(entries, now)
        .into_iter()
        .rev()
        .map(|year| YearMarker {
            year,
            offset: viewport.months_to_y(bounds.offset_months(CalendarMonth::end_of_year(year))),
        })
        .collect();

    let span_height = viewport.months_to_y(months_between(bounds.earliest, bounds.latest) as i64);
    let total_height = (span_height + BOTTOM_PADDING)
        .max(work.content_bottom() + BOTTOM_PADDING)
        .max(education.content_bottom() + BOTTOM_PADDING);

    Some(TimelineLayout {
        bounds,
        work,
        education,
        years,
        total_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::period::Period;

    fn ym(year: i32, month: u32) -> CalendarMonth {
        CalendarMonth::new(year, month).unwrap()
    }

    fn entry(id: &str, category: Category, start: (i32, u32), end: Option<(i32, u32)>) -> TimelineEntry {
        let end = match end {
            Some((y, m)) => Period::At(ym(y, m)),
            None => Period::Open,
        };
        TimelineEntry::new(id, id.to_uppercase(), category, ym(start.0, start.1), end)
    }

    const NOW: (i32, u32) = (2026, 10);

    fn now() -> CalendarMonth {
        ym(NOW.0, NOW.1)
    }

    #[test]
    fn empty_input_has_no_layout() {
        assert!(compute_layout(&[], &TimelineViewport::default(), now()).is_none());
    }

    #[test]
    fn single_entry_gets_column_zero_and_full_width() {
        let entries = vec![entry("a", Category::Work, (2020, 1), Some((2021, 6)))];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        let m = layout.work.get("a").unwrap();
        assert_eq!(m.column, 0);
        assert_eq!(m.top, 0.0);
        assert_eq!(m.height, 17.0 * 12.0);
        assert_eq!(layout.work.columns, 1);
        assert_eq!(layout.work.column_span(0, 400.0), (0.0, 400.0));
        assert!(layout.education.is_empty());
    }

    fn assert_no_card_overlap(lane: &CategoryLayout) {
        for (x_id, x) in &lane.metrics {
            for (y_id, y) in &lane.metrics {
                if x_id != y_id && x.column == y.column {
                    assert!(
                        x.bottom() <= y.top || y.bottom() <= x.top,
                        "{x_id} {x:?} / {y_id} {y:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn overlapping_entries_split_columns() {
        // A and B share Jan-Jun 2021. C shares no month with B but its
        // floored card reaches into B's.
        let entries = vec![
            entry("a", Category::Work, (2020, 1), Some((2021, 6))),
            entry("b", Category::Work, (2021, 1), Some((2022, 1))),
            entry("c", Category::Work, (2022, 2), Some((2022, 6))),
        ];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        let a = layout.work.get("a").unwrap();
        let b = layout.work.get("b").unwrap();
        let c = layout.work.get("c").unwrap();
        assert_eq!(c.column, 0);
        assert_eq!(b.column, 1);
        assert_eq!(a.column, 0);
        assert_eq!(layout.work.columns, 2);
        assert_eq!(layout.work.order, vec!["c", "b", "a"]);
        assert_no_card_overlap(&layout.work);
    }

    #[test]
    fn short_cards_a_few_months_apart_do_not_stack() {
        let entries = vec![
            entry("a", Category::Work, (2019, 1), Some((2019, 2))),
            entry("b", Category::Work, (2019, 4), Some((2019, 5))),
        ];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        let a = layout.work.get("a").unwrap();
        let b = layout.work.get("b").unwrap();
        assert_eq!(a.height, 80.0);
        assert_eq!(b.height, 80.0);
        assert_ne!(a.column, b.column);
    }

    #[test]
    fn min_height_cards_never_intersect_within_a_column() {
        let entries = vec![
            entry("a", Category::Education, (2019, 1), Some((2019, 2))),
            entry("b", Category::Education, (2019, 4), Some((2019, 5))),
            entry("c", Category::Education, (2019, 7), Some((2019, 8))),
            entry("d", Category::Education, (2017, 1), Some((2017, 2))),
        ];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        for id in ["a", "b", "c", "d"] {
            assert_eq!(layout.education.get(id).unwrap().height, 80.0, "{id}");
        }
        assert_no_card_overlap(&layout.education);
        // D is far enough below the others to reuse the first column.
        assert_eq!(layout.education.get("d").unwrap().column, 0);
        assert_eq!(layout.education.columns, 3);
    }

    #[test]
    fn mutually_overlapping_entries_get_one_column_each() {
        let entries: Vec<_> = (0..4)
            .map(|i| entry(&format!("e{i}"), Category::Work, (2018, 1), Some((2020 + i, 1))))
            .collect();
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        let mut columns: Vec<_> = layout.work.metrics.values().map(|m| m.column).collect();
        columns.sort();
        assert_eq!(columns, vec![0, 1, 2, 3]);
        assert_eq!(layout.work.columns, 4);
    }

    #[test]
    fn intersecting_entries_never_share_a_column() {
        let entries = vec![
            entry("a", Category::Work, (2015, 3), Some((2017, 8))),
            entry("b", Category::Work, (2016, 1), Some((2016, 9))),
            entry("c", Category::Work, (2017, 8), Some((2019, 2))),
            entry("d", Category::Work, (2018, 6), None),
            entry("e", Category::Work, (2010, 1), Some((2015, 3))),
            entry("f", Category::Work, (2021, 5), Some((2022, 5))),
        ];
        let n = now();
        let layout = compute_layout(&entries, &TimelineViewport::default(), n).unwrap();
        for x in &entries {
            for y in &entries {
                if x.id != y.id && x.overlaps(y, n) {
                    assert_ne!(
                        layout.work.get(&x.id).unwrap().column,
                        layout.work.get(&y.id).unwrap().column,
                        "{} / {}",
                        x.id,
                        y.id
                    );
                }
            }
        }
        assert_no_card_overlap(&layout.work);
    }

    #[test]
    fn lanes_are_independent() {
        let entries = vec![
            entry("job", Category::Work, (2020, 1), Some((2022, 1))),
            entry("degree", Category::Education, (2020, 1), Some((2022, 1))),
        ];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        assert_eq!(layout.work.get("job").unwrap().column, 0);
        assert_eq!(layout.education.get("degree").unwrap().column, 0);
    }

    #[test]
    fn ongoing_entry_sits_at_the_top() {
        let entries = vec![
            entry("old", Category::Work, (2018, 1), Some((2020, 1))),
            entry("current", Category::Work, (2024, 1), None),
        ];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        assert_eq!(layout.bounds.latest, now());
        assert_eq!(layout.work.get("current").unwrap().top, 0.0);
        let old = layout.work.get("old").unwrap();
        assert_eq!(old.top, (2026 - 2020) as f32 * 12.0 * 12.0 + 9.0 * 12.0);
    }

    #[test]
    fn equal_end_dates_break_ties_by_start_then_id() {
        let entries = vec![
            entry("z", Category::Work, (2020, 1), Some((2022, 1))),
            entry("long", Category::Work, (2019, 1), Some((2022, 1))),
            entry("a", Category::Work, (2020, 1), Some((2022, 1))),
        ];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        assert_eq!(layout.work.order, vec!["a", "z", "long"]);
        assert_eq!(layout.work.get("a").unwrap().column, 0);
        assert_eq!(layout.work.get("z").unwrap().column, 1);
        assert_eq!(layout.work.get("long").unwrap().column, 2);
    }

    #[test]
    fn column_span_divides_width_with_gaps() {
        let entries = vec![
            entry("a", Category::Work, (2020, 1), Some((2021, 6))),
            entry("b", Category::Work, (2021, 1), Some((2022, 1))),
        ];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        let (x0, w0) = layout.work.column_span(0, 1000.0);
        let (x1, w1) = layout.work.column_span(1, 1000.0);
        assert_eq!(x0, 0.0);
        assert_eq!(w0, w1);
        assert!((w0 - 490.0).abs() < 1e-3);
        assert!((x1 - 510.0).abs() < 1e-3);
    }

    #[test]
    fn year_markers_are_newest_first() {
        let entries = vec![entry("a", Category::Work, (2023, 3), Some((2025, 6)))];
        let layout = compute_layout(&entries, &TimelineViewport::default(), now()).unwrap();
        let years: Vec<_> = layout.years.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2025, 2024, 2023]);
        // December of the latest year is after the latest month, so it clamps.
        assert_eq!(layout.years[0].offset, 0.0);
        assert_eq!(layout.years[1].offset, 6.0 * 12.0);
        assert!(layout.total_height >= 27.0 * 12.0 + BOTTOM_PADDING);
    }
}
