/// Months covered by the bike-share datasets.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Answers accepted at the filter-kind prompt.
pub const FILTER_KINDS: [&str; 3] = ["month", "day", "none"];

/// Row restriction applied by the loader. At most one of month/day is ever
/// active, which the enum makes unrepresentable otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TripFilter {
    #[default]
    None,
    /// Lowercase month name, e.g. "march"
    Month(String),
    /// Lowercase weekday name, e.g. "friday"
    Day(String),
}

impl TripFilter {
    pub fn describe(&self) -> String {
        match self {
            TripFilter::None => "no filter".to_string(),
            TripFilter::Month(m) => format!("month = {m}"),
            TripFilter::Day(d) => format!("day = {d}"),
        }
    }
}
