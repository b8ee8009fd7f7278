use chrono::{NaiveDateTime, Timelike};

/// One row of a city file, typed for the statistics and kept raw for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// 0-based position of the row in the source file
    pub index: usize,
    /// `None` for a blank cell
    pub start_time: Option<NaiveDateTime>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Seconds
    pub duration: Option<f64>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Derived from `start_time`, lowercase
    pub month: Option<String>,
    /// Derived from `start_time`, lowercase
    pub day: Option<String>,
    /// Cell values in source column order
    pub raw: Vec<String>,
}

impl TripRecord {
    pub fn hour(&self) -> Option<u32> {
        self.start_time.map(|t| t.hour())
    }

    /// Trip label used for the "most frequent trip" statistic. `None` when
    /// either station is missing.
    pub fn trip_label(&self, separator: &str) -> Option<String> {
        let start = self.start_station.as_deref()?;
        let end = self.end_station.as_deref()?;
        Some(format!("{start}{separator}{end}"))
    }
}

/// A loaded (and possibly filtered) city file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<TripRecord>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
