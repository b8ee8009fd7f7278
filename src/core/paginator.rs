use std::io::{BufRead, Write};

use crate::errors::AppResult;
use crate::models::{Dataset, TripRecord};
use crate::ui::Prompter;
use crate::ui::messages::rule;
use crate::utils::table::Table;

pub const RAW_DATA_INVALID: &str = "Invalid input! Please enter either \"yes\" or \"no\".";

pub fn raw_data_prompt(page_size: usize) -> String {
    format!("Would you like to see {page_size} rows of raw data? Enter \"yes\" or \"no\": ")
}

/// Cursor over the filtered rows, handing out fixed-size windows.
pub struct Paginator {
    cursor: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: 0,
            page_size,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return the next window and advance. Past the end the window is empty.
    pub fn next_page<'a>(&mut self, rows: &'a [TripRecord]) -> &'a [TripRecord] {
        let start = self.cursor.min(rows.len());
        let end = self.cursor.saturating_add(self.page_size).min(rows.len());
        self.cursor = self.cursor.saturating_add(self.page_size);
        &rows[start..end]
    }
}

/// Render a window with the source row index in front of every source column.
pub fn render_page(headers: &[String], page: &[TripRecord]) -> String {
    let mut columns = Vec::with_capacity(headers.len() + 1);
    columns.push(String::new());
    columns.extend(headers.iter().cloned());

    let rows = page
        .iter()
        .map(|r| {
            let mut row = Vec::with_capacity(r.raw.len() + 1);
            row.push(r.index.to_string());
            row.extend(r.raw.iter().cloned());
            row
        })
        .collect();

    Table::fitted(&columns, rows).render()
}

/// Ask repeatedly whether to show more raw rows, printing one window per "yes".
pub fn display_raw_rows<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    dataset: &Dataset,
    page_size: usize,
) -> AppResult<()> {
    let mut paginator = Paginator::new(page_size);
    let prompt = raw_data_prompt(page_size);

    while prompter.ask_yes_no(&prompt, RAW_DATA_INVALID)? {
        let page = paginator.next_page(&dataset.rows);
        if !page.is_empty() {
            write!(prompter.out(), "{}", render_page(&dataset.headers, page))?;
        }
        log::debug!("raw rows shown up to {}", paginator.cursor().min(dataset.len()));
    }

    rule(prompter.out())?;
    Ok(())
}
