//! Plain text presenter

use std::fmt::{self, Write};

use shared::ForumView;

use crate::traits::Presenter;

/// Renders the forum as an aligned text table
#[derive(Debug, Clone, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for TextPresenter {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn present(&self, view: &ForumView) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_table(&mut out, view);
        out
    }
}

fn write_table(out: &mut String, view: &ForumView) -> fmt::Result {
    let mut widths: Vec<usize> = view.columns.iter().map(|c| c.chars().count()).collect();
    for row in &view.rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", "=".repeat(view.title.chars().count()))?;
    writeln!(out, "{}", view.summary.headline)?;
    writeln!(out, "{}\n", view.summary.detail)?;
    writeln!(out, "{}", view.table_heading)?;

    let header: Vec<&str> = view.columns.iter().map(String::as_str).collect();
    write_line(out, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;

    for row in &view.rows {
        write_line(out, &row.cells(), &widths)?;
    }
    Ok(())
}

fn write_line(out: &mut String, cells: &[&str], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}
