//! The interactive loop: choose city and filter, load, page, report, repeat.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::core::loader::LoadLogic;
use crate::core::paginator::display_raw_rows;
use crate::core::report::print_stats;
use crate::errors::AppResult;
use crate::models::{DAYS, FILTER_KINDS, MONTHS, TripFilter};
use crate::ui::Prompter;

pub const CITY_INVALID: &str = "Invalid input! Please enter a valid city.";
pub const FILTER_PROMPT: &str = "Would you like to filter the data by month, day, or not at all? ";
pub const FILTER_INVALID: &str = "Invalid input! Please enter a valid filter type.";
pub const MONTH_PROMPT: &str = "Which month - January, February, March, April, May, or June? ";
pub const MONTH_INVALID: &str = "Invalid input! Please enter a valid month.";
pub const DAY_PROMPT: &str =
    "Which day - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday? ";
pub const DAY_INVALID: &str = "Invalid input! Please enter a valid day.";
pub const RESTART_PROMPT: &str = "Would you like to restart? Enter \"yes\" or \"no\": ";

/// "Would you like to see data for Chicago, New York, or Washington? "
pub fn city_prompt(cfg: &Config) -> String {
    let names: Vec<String> = cfg.city_names().into_iter().map(title_case).collect();
    let list = match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    };
    format!("Would you like to see data for {list}? ")
}

fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct Session<'a> {
    cfg: &'a Config,
}

impl<'a> Session<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Ask for the city, then for an optional month or day filter.
    pub fn ask_selection<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> AppResult<(String, TripFilter)> {
        let city = prompter.ask_choice(
            &city_prompt(self.cfg),
            &self.cfg.city_names(),
            CITY_INVALID,
        )?;

        let filter = match prompter
            .ask_choice(FILTER_PROMPT, &FILTER_KINDS, FILTER_INVALID)?
            .as_str()
        {
            "month" => TripFilter::Month(prompter.ask_choice(MONTH_PROMPT, &MONTHS, MONTH_INVALID)?),
            "day" => TripFilter::Day(prompter.ask_choice(DAY_PROMPT, &DAYS, DAY_INVALID)?),
            _ => TripFilter::None,
        };

        Ok((city, filter))
    }

    /// One full cycle; the dataset is dropped on return.
    pub fn run_once<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> AppResult<()> {
        let (city, filter) = self.ask_selection(prompter)?;
        let dataset = LoadLogic::load_city(self.cfg, &city, &filter)?;

        display_raw_rows(prompter, &dataset, self.cfg.page_size)?;
        print_stats(prompter.out(), &dataset, &self.cfg.trip_separator)?;
        Ok(())
    }

    /// Repeat [`Session::run_once`] until the restart answer is not "yes".
    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> AppResult<()> {
        loop {
            self.run_once(prompter)?;
            if !prompter.confirm(RESTART_PROMPT)? {
                return Ok(());
            }
        }
    }
}
