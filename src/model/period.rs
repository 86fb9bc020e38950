//! Month-granularity periods used by the timeline.
//!
//! Content files write periods as `YYYY-MM`, or as one of the open-ended
//! markers `present`, `current` or `now` (any case). An open-ended period is
//! never stored as a concrete month; it resolves to "this month" whenever it
//! is evaluated.

use std::fmt;

use chrono::{Datelike, NaiveDate};

const OPEN_MARKERS: &[&str] = &["present", "current", "now"];
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar year + month. No day-of-month precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    /// 1-based month.
    month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing the local clock's current date.
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months since year 0, used for all span arithmetic.
    fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    /// Signed number of months from `self` to `later`.
    pub fn months_until(&self, later: CalendarMonth) -> i64 {
        later.ordinal() - self.ordinal()
    }

    /// December of the given year.
    pub fn end_of_year(year: i32) -> Self {
        Self { year, month: 12 }
    }
}

impl fmt::Display for CalendarMonth {
    /// Formats as `Mar 2021`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTH_ABBREV[(self.month - 1) as usize], self.year)
    }
}

/// A parsed period: a concrete month, or open-ended ("present").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    At(CalendarMonth),
    Open,
}

impl Period {
    /// Resolve against `now`; open-ended periods become `now`.
    pub fn resolve(self, now: CalendarMonth) -> CalendarMonth {
        match self {
            Period::At(month) => month,
            Period::Open => now,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Period::Open)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::At(month) => month.fmt(f),
            Period::Open => f.write_str("Present"),
        }
    }
}

fn is_open_marker(s: &str) -> bool {
    OPEN_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m))
}

/// Parse `YYYY-MM` (a trailing `-DD` is tolerated and ignored) or an
/// open-ended marker. Returns `None` for anything else, including the empty
/// string.
pub fn parse_period(s: &str) -> Option<Period> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if is_open_marker(s) {
        return Some(Period::Open);
    }

    let mut parts = s.split('-');
    let year_part = parts.next()?;
    let month_part = parts.next()?;
    if let Some(day_part) = parts.next() {
        if day_part.is_empty() || !day_part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    if parts.next().is_some() {
        return None;
    }
    if year_part.len() != 4 || !year_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if month_part.is_empty()
        || month_part.len() > 2
        || !month_part.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let year: i32 = year_part.parse().ok()?;
    let month: u32 = month_part.parse().ok()?;
    CalendarMonth::new(year, month).map(Period::At)
}

/// Parse a period and resolve it against `now`.
pub fn parse_month(s: &str, now: CalendarMonth) -> Option<CalendarMonth> {
    parse_period(s).map(|p| p.resolve(now))
}

/// Resolve an end period. Absent, empty, open-ended and malformed input all
/// resolve to `now`.
pub fn normalize_end(end: Option<&str>, now: CalendarMonth) -> CalendarMonth {
    end.and_then(|s| parse_month(s, now)).unwrap_or(now)
}

/// Month span between two months, never less than 1 so that zero-length
/// spans still render with a visible size.
pub fn months_between(start: CalendarMonth, end: CalendarMonth) -> u32 {
    start.months_until(end).max(1) as u32
}

/// `Mar 2021` for a concrete month, `Present` for empty or open-ended input.
/// Malformed input is echoed back unchanged.
pub fn format_month(s: &str) -> String {
    match parse_period(s) {
        Some(period) => period.to_string(),
        None if s.trim().is_empty() => "Present".to_string(),
        None => s.to_string(),
    }
}

/// `Mar 2021 - Dec 2024`, or `Mar 2021 - Present` when the end is absent
/// or open-ended.
pub fn format_range(start: &str, end: Option<&str>) -> String {
    let end = end.map(format_month).unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", format_month(start), end)
}

/// True when the end is absent, open-ended, or later than `now`.
pub fn is_ongoing(end: Option<&str>, now: CalendarMonth) -> bool {
    match end.map(str::trim).filter(|s| !s.is_empty()) {
        None => true,
        Some(s) => match parse_period(s) {
            Some(Period::Open) => true,
            Some(Period::At(month)) => month > now,
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> CalendarMonth {
        CalendarMonth::new(year, month).unwrap()
    }

    #[test]
    fn parses_year_month() {
        assert_eq!(parse_period("2021-03"), Some(Period::At(ym(2021, 3))));
        assert_eq!(parse_period(" 2021-3 "), Some(Period::At(ym(2021, 3))));
        assert_eq!(parse_period("2021-03-15"), Some(Period::At(ym(2021, 3))));
    }

    #[test]
    fn open_markers_are_case_insensitive() {
        for s in ["present", "Present", "CURRENT", "now"] {
            assert_eq!(parse_period(s), Some(Period::Open), "{s}");
        }
    }

    #[test]
    fn malformed_input_is_none() {
        for s in ["", "2021", "2021-13", "2021-00", "21-03", "abcd-ef", "2021-03-xx", "2021-03-01-01"] {
            assert_eq!(parse_period(s), None, "{s:?}");
        }
    }

    #[test]
    fn every_constructible_month_displays() {
        assert_eq!(CalendarMonth::new(2020, 0), None);
        assert_eq!(CalendarMonth::new(2020, 13), None);
        let labels: Vec<String> = (1..=12).map(|m| ym(2020, m).to_string()).collect();
        assert_eq!(labels[0], "Jan 2020");
        assert_eq!(labels[11], "Dec 2020");
        assert_eq!(CalendarMonth::end_of_year(1999).to_string(), "Dec 1999");
    }

    #[test]
    fn open_period_resolves_to_now() {
        let now = ym(2026, 10);
        assert_eq!(parse_month("Present", now), Some(now));
        assert_eq!(normalize_end(None, now), now);
        assert_eq!(normalize_end(Some(""), now), now);
        assert_eq!(normalize_end(Some("garbage"), now), now);
        assert_eq!(normalize_end(Some("2020-05"), now), ym(2020, 5));
    }

    #[test]
    fn months_between_has_floor_of_one() {
        assert_eq!(months_between(ym(2020, 1), ym(2020, 1)), 1);
        assert_eq!(months_between(ym(2020, 1), ym(2020, 2)), 1);
        assert_eq!(months_between(ym(2020, 1), ym(2021, 6)), 17);
        assert_eq!(months_between(ym(2020, 11), ym(2021, 2)), 3);
        // reversed input still floors
        assert_eq!(months_between(ym(2022, 1), ym(2020, 1)), 1);
    }

    #[test]
    fn formats_month_and_range() {
        assert_eq!(format_month("2021-03"), "Mar 2021");
        assert_eq!(format_month("2024-12"), "Dec 2024");
        assert_eq!(format_month(""), "Present");
        assert_eq!(format_month("now"), "Present");
        assert_eq!(format_month("soon"), "soon");
        assert_eq!(format_range("2021-03", Some("2024-12")), "Mar 2021 - Dec 2024");
        assert_eq!(format_range("2021-03", None), "Mar 2021 - Present");
        assert_eq!(format_range("2021-03", Some("")), "Mar 2021 - Present");
    }

    #[test]
    fn every_month_formats_back_to_its_year_and_name() {
        for month in 1..=12 {
            let s = format!("1999-{month:02}");
            let shown = format_month(&s);
            assert!(shown.ends_with(" 1999"), "{shown}");
            assert_eq!(&shown[..3], MONTH_ABBREV[(month - 1) as usize]);
        }
    }

    #[test]
    fn ongoing_detection() {
        let now = ym(2026, 10);
        assert!(is_ongoing(None, now));
        assert!(is_ongoing(Some("  "), now));
        assert!(is_ongoing(Some("Present"), now));
        assert!(is_ongoing(Some("2027-01"), now));
        assert!(!is_ongoing(Some("2026-10"), now));
        assert!(!is_ongoing(Some("2020-01"), now));
        assert!(!is_ongoing(Some("bogus"), now));
    }
}
