//! Aggregate statistics over a filtered [`Dataset`].

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::models::Dataset;

/// Most frequent value. Among values sharing the highest count the smallest
/// one (in `Ord` order) wins. `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        // ascending key order: only a strictly higher count replaces
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best.map(|(v, _)| v)
}

/// Occurrences of each distinct value, highest count first. Equal counts
/// keep the order in which the values first appeared.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut position: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for v in values {
        match position.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }

    // stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Report values. A mode is `None` when every row lacks that column.
#[derive(Debug, Clone, PartialEq)]
pub struct TripStats {
    pub common_month: Option<String>,
    pub common_day: Option<String>,
    pub common_hour: Option<u32>,
    pub common_start_station: Option<String>,
    pub common_end_station: Option<String>,
    pub common_trip: Option<String>,
    /// Sum of the durations present; 0 when none are
    pub total_duration: f64,
    /// Mean over the durations present
    pub mean_duration: Option<f64>,
    pub user_types: Vec<(String, usize)>,
    /// `None` when the dataset has no gender column
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the column is absent or holds no values
    pub birth_years: Option<BirthYearStats>,
}

pub struct StatsLogic;

impl StatsLogic {
    /// Compute every statistic of the report. `None` for an empty dataset.
    pub fn compute(dataset: &Dataset, trip_separator: &str) -> Option<TripStats> {
        let rows = &dataset.rows;
        if rows.is_empty() {
            return None;
        }

        let durations: Vec<f64> = rows.iter().filter_map(|r| r.duration).collect();
        let total_duration: f64 = durations.iter().sum();
        let mean_duration =
            (!durations.is_empty()).then(|| total_duration / durations.len() as f64);

        let genders = dataset
            .has_gender
            .then(|| value_counts(rows.iter().filter_map(|r| r.gender.clone())));

        let birth_years = if dataset.has_birth_year {
            birth_year_stats(rows.iter().filter_map(|r| r.birth_year))
        } else {
            None
        };

        Some(TripStats {
            common_month: mode(rows.iter().filter_map(|r| r.month.clone())),
            common_day: mode(rows.iter().filter_map(|r| r.day.clone())),
            common_hour: mode(rows.iter().filter_map(|r| r.hour())),
            common_start_station: mode(rows.iter().filter_map(|r| r.start_station.clone())),
            common_end_station: mode(rows.iter().filter_map(|r| r.end_station.clone())),
            common_trip: mode(rows.iter().filter_map(|r| r.trip_label(trip_separator))),
            total_duration,
            mean_duration,
            user_types: value_counts(rows.iter().filter_map(|r| r.user_type.clone())),
            genders,
            birth_years,
        })
    }
}

fn birth_year_stats<I: Iterator<Item = i32> + Clone>(years: I) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: years.clone().min()?,
        most_recent: years.clone().max()?,
        most_common: mode(years)?,
    })
}
