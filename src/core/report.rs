use std::fmt::Display;
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::core::stats::{StatsLogic, TripStats};
use crate::models::Dataset;
use crate::ui::messages::{header, info, rule, warning};
use crate::utils::{format_number, secs2readable};

pub const NO_DATA: &str = "No data available for the selected filters.";
pub const GENDER_UNAVAILABLE: &str = "Gender information not available for this city.";
pub const BIRTH_YEAR_UNAVAILABLE: &str = "Birth year information not available for this city.";
pub const BIRTH_YEAR_EMPTY: &str = "No birth year values recorded.";
/// Shown for a statistic whose column has no values in the selection.
pub const NOT_AVAILABLE: &str = "N/A";

fn or_na<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string)
}

/// Compute and print the full statistics report for `dataset`.
pub fn print_stats<W: Write>(out: &mut W, dataset: &Dataset, trip_separator: &str) -> io::Result<()> {
    let Some(stats) = StatsLogic::compute(dataset, trip_separator) else {
        warning(out, NO_DATA)?;
        return rule(out);
    };

    print_time_stats(out, &stats)?;
    print_station_stats(out, &stats)?;
    print_duration_stats(out, &stats)?;
    print_user_stats(out, dataset, &stats)
}

fn print_time_stats<W: Write>(out: &mut W, stats: &TripStats) -> io::Result<()> {
    header(out, "Calculating the most frequent times of travel...")?;
    writeln!(out, "Most Common Month: {}", or_na(stats.common_month.as_ref()))?;
    writeln!(out, "Most Common Day of Week: {}", or_na(stats.common_day.as_ref()))?;
    writeln!(out, "Most Common Start Hour: {}", or_na(stats.common_hour.as_ref()))?;
    rule(out)
}

fn print_station_stats<W: Write>(out: &mut W, stats: &TripStats) -> io::Result<()> {
    header(out, "Calculating the most popular stations and trip...")?;
    writeln!(
        out,
        "Most Commonly Used Start Station: {}",
        or_na(stats.common_start_station.as_ref())
    )?;
    writeln!(
        out,
        "Most Commonly Used End Station: {}",
        or_na(stats.common_end_station.as_ref())
    )?;
    writeln!(out, "Most Frequent Trip: {}", or_na(stats.common_trip.as_ref()))?;
    rule(out)
}

fn print_duration_stats<W: Write>(out: &mut W, stats: &TripStats) -> io::Result<()> {
    header(out, "Calculating trip duration...")?;
    writeln!(
        out,
        "Total Travel Time: {} seconds ({})",
        format_number(stats.total_duration),
        secs2readable(stats.total_duration)
    )?;
    match stats.mean_duration {
        Some(mean) => writeln!(
            out,
            "Mean Travel Time: {:.2} seconds ({})",
            mean,
            secs2readable(mean)
        )?,
        None => writeln!(out, "Mean Travel Time: {NOT_AVAILABLE}")?,
    }
    rule(out)
}

fn print_user_stats<W: Write>(out: &mut W, dataset: &Dataset, stats: &TripStats) -> io::Result<()> {
    header(out, "Calculating user stats...")?;

    writeln!(out, "Counts of User Types:")?;
    print_counts(out, &stats.user_types)?;

    match &stats.genders {
        Some(genders) => {
            writeln!(out, "\nCounts of Gender:")?;
            print_counts(out, genders)?;
        }
        None => {
            writeln!(out)?;
            info(out, GENDER_UNAVAILABLE)?;
        }
    }

    writeln!(out)?;
    match (&stats.birth_years, dataset.has_birth_year) {
        (Some(by), _) => {
            writeln!(out, "Earliest Birth Year: {}", by.earliest)?;
            writeln!(out, "Most Recent Birth Year: {}", by.most_recent)?;
            writeln!(out, "Most Common Birth Year: {}", by.most_common)?;
        }
        (None, true) => info(out, BIRTH_YEAR_EMPTY)?,
        (None, false) => info(out, BIRTH_YEAR_UNAVAILABLE)?,
    }

    rule(out)
}

fn print_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    let width = counts.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    for (value, count) in counts {
        let fill = " ".repeat(width - value.width());
        writeln!(out, "  {value}{fill}  {count}")?;
    }
    Ok(())
}
