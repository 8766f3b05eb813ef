//! Table view: a pure projection of the course list into text rows.

use std::fmt::Write as _;

use crate::types::Course;

pub const HEADERS: [&str; 4] = ["ID", "Name", "Description", "Price"];
pub const PLACEHOLDER: &str = "No courses available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Shown instead of data rows when there are no courses.
    Placeholder,
    Course([String; 4]),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableView;

impl TableView {
    /// One row per course in the given order, or a single placeholder.
    pub fn rows(courses: &[Course]) -> Vec<TableRow> {
        if courses.is_empty() {
            return vec![TableRow::Placeholder];
        }
        courses
            .iter()
            .map(|c| {
                TableRow::Course([
                    c.id.to_string(),
                    c.name.clone(),
                    c.description.clone(),
                    c.price.to_string(),
                ])
            })
            .collect()
    }

    pub fn render(courses: &[Course]) -> String {
        let rows = Self::rows(courses);

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            if let TableRow::Course(cells) = row {
                for (width, cell) in widths.iter_mut().zip(cells) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }
        // separators between four columns add 9 characters
        let inner = widths.iter().sum::<usize>() + 9;
        let rule = format!("+{}+", "-".repeat(inner + 2));

        let mut out = String::new();
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "| {} |", join_cells(&HEADERS.map(str::to_string), &widths));
        let _ = writeln!(out, "{rule}");
        for row in &rows {
            match row {
                TableRow::Placeholder => {
                    let _ = writeln!(out, "| {PLACEHOLDER:^inner$} |");
                }
                TableRow::Course(cells) => {
                    let _ = writeln!(out, "| {} |", join_cells(cells, &widths));
                }
            }
        }
        let _ = writeln!(out, "{rule}");
        out
    }
}

fn join_cells(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}
