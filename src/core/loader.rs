//! Reads a city file into a [`Dataset`] and applies the month/day filter.

use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, TripFilter, TripRecord};

pub const COL_START_TIME: &str = "Start Time";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_DURATION: &str = "Trip Duration";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Column positions resolved once from the header row.
struct Columns {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[String], file: &str) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                column: name.to_string(),
                file: file.to_string(),
            })
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            duration: require(COL_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }
}

pub struct LoadLogic;

impl LoadLogic {
    /// Load the file configured for `city` and keep the rows matching `filter`.
    pub fn load_city(cfg: &Config, city: &str, filter: &TripFilter) -> AppResult<Dataset> {
        let path = cfg.city_path(city)?;
        log::info!("loading {} data from {}", city, path.display());

        let dataset = Self::load_file(&path)?;
        let total = dataset.len();
        let dataset = apply_filter(dataset, filter);

        log::info!(
            "{} of {} rows kept ({})",
            dataset.len(),
            total,
            filter.describe()
        );
        Ok(dataset)
    }

    /// Read every row of a trip CSV and derive the month/day columns.
    pub fn load_file(path: &Path) -> AppResult<Dataset> {
        let file = path.display().to_string();
        let mut reader = csv::Reader::from_path(path)?;

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let cols = Columns::resolve(&headers, &file)?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            rows.push(parse_record(&record, &cols, index)?);
        }

        Ok(Dataset {
            headers,
            rows,
            has_gender: cols.gender.is_some(),
            has_birth_year: cols.birth_year.is_some(),
        })
    }
}

/// Keep only the rows whose derived month or day matches. Order is preserved.
pub fn apply_filter(mut dataset: Dataset, filter: &TripFilter) -> Dataset {
    match filter {
        TripFilter::None => {}
        TripFilter::Month(month) => dataset.rows.retain(|r| r.month.as_ref() == Some(month)),
        TripFilter::Day(day) => dataset.rows.retain(|r| r.day.as_ref() == Some(day)),
    }
    dataset
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn parse_record(record: &StringRecord, cols: &Columns, index: usize) -> AppResult<TripRecord> {
    // header is line 1
    let line = index + 2;
    let cell = |i: usize| record.get(i).unwrap_or("").trim();
    let optional = |i: Option<usize>| {
        i.map(cell)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    // blank cells are missing values; only unreadable text is an error
    let start_time = match optional(Some(cols.start_time)) {
        Some(v) => Some(parse_timestamp(&v).ok_or_else(|| AppError::InvalidTimestamp {
            value: v.clone(),
            row: line,
        })?),
        None => None,
    };

    let duration = match optional(Some(cols.duration)) {
        Some(v) => Some(v.parse::<f64>().map_err(|_| AppError::InvalidField {
            column: COL_DURATION.to_string(),
            value: v.clone(),
            row: line,
        })?),
        None => None,
    };

    let birth_year = match optional(cols.birth_year) {
        Some(v) => Some(parse_year(&v).ok_or_else(|| AppError::InvalidField {
            column: COL_BIRTH_YEAR.to_string(),
            value: v.clone(),
            row: line,
        })?),
        None => None,
    };

    Ok(TripRecord {
        index,
        start_time,
        start_station: optional(Some(cols.start_station)),
        end_station: optional(Some(cols.end_station)),
        duration,
        user_type: optional(Some(cols.user_type)),
        gender: optional(cols.gender),
        birth_year,
        month: start_time.map(|t| t.format("%B").to_string().to_lowercase()),
        day: start_time.map(|t| t.format("%A").to_string().to_lowercase()),
        raw: record.iter().map(str::to_string).collect(),
    })
}

/// Birth years are often stored as floats ("1989.0").
fn parse_year(value: &str) -> Option<i32> {
    if let Ok(y) = value.parse::<i32>() {
        return Some(y);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|y| y.fract() == 0.0)
        .map(|y| y as i32)
}
