//! Plain-text schedule table.
//!
//! Renders a [`Schedule`] the way it is read on the wedding morning:
//! one row per appointment with 12-hour clock times, followed by anyone
//! who could not be booked.
//!
//! ```text
//! Wedding Day Beauty Schedule
//!
//! Client           Artist  Services      Start     End
//! Mother of Bride  Sarah   makeup        07:00 AM  07:45 AM
//! ```

use std::fmt;

use crate::models::{Schedule, UnmatchedReason};

const HEADERS: [&str; 5] = ["Client", "Artist", "Services", "Start", "End"];
const TIME_FORMAT: &str = "%I:%M %p";

/// Display adapter for a schedule.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleTable<'a> {
    schedule: &'a Schedule,
    title: &'a str,
}

impl<'a> ScheduleTable<'a> {
    /// Creates a table with the default title.
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            title: "Wedding Day Beauty Schedule",
        }
    }

    /// Sets the title line.
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn rows(&self) -> Vec<[String; 5]> {
        self.schedule
            .appointments
            .iter()
            .map(|a| {
                [
                    a.client.clone(),
                    a.artist.clone(),
                    a.services.join(", "),
                    a.start.format(TIME_FORMAT).to_string(),
                    a.end.format(TIME_FORMAT).to_string(),
                ]
            })
            .collect()
    }
}

fn reason_text(reason: &UnmatchedReason) -> &'static str {
    match reason {
        UnmatchedReason::NoArtists => "no artists registered",
        UnmatchedReason::NoQualifiedArtist => "no qualified artist",
        UnmatchedReason::NoServices => "no services requested",
        UnmatchedReason::TimeOverflow => "end time out of range",
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[&str; 5], widths: &[usize; 5]) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    writeln!(f, "{}", line.join("  ").trim_end())
}

impl fmt::Display for ScheduleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;

        let rows = self.rows();
        if rows.is_empty() {
            writeln!(f, "(no appointments)")?;
        } else {
            let mut widths = HEADERS.map(str::len);
            for row in &rows {
                for (w, cell) in widths.iter_mut().zip(row) {
                    *w = (*w).max(cell.chars().count());
                }
            }
            write_row(f, &HEADERS, &widths)?;
            for row in &rows {
                let cells = [
                    row[0].as_str(),
                    row[1].as_str(),
                    row[2].as_str(),
                    row[3].as_str(),
                    row[4].as_str(),
                ];
                write_row(f, &cells, &widths)?;
            }
        }

        if !self.schedule.unscheduled.is_empty() {
            writeln!(f)?;
            writeln!(f, "Unscheduled:")?;
            for u in &self.schedule.unscheduled {
                writeln!(
                    f,
                    "  {} ({}): {}",
                    u.client,
                    u.services.join(", "),
                    reason_text(&u.reason)
                )?;
            }
        }

        if !self.schedule.violations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for v in &self.schedule.violations {
                writeln!(f, "  {}", v.message)?;
            }
        }
        Ok(())
    }
}
