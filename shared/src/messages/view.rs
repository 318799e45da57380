//! View model for the forum page
//!
//! A `ForumView` is a plain description of header, summary and rows. It holds
//! display strings only, so any presentation layer can turn it into elements
//! without knowing how the numbers were produced.

use serde::{Deserialize, Serialize};

pub const PAGE_TITLE: &str = "Freelancer Forum";
pub const TABLE_HEADING: &str = "Available Freelancers";
pub const COLUMNS: [&str; 3] = ["Name", "Occupation", "Hourly Rate"];

/// Whole page description
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumView {
    pub title: String,
    pub summary: SummaryView,
    pub table_heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
}

/// Average rate block shown above the table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    /// Average rate text, `"65.00"` or `"0"` for an empty forum
    pub average: String,
    pub count: usize,
    pub headline: String,
    pub detail: String,
}

impl SummaryView {
    pub fn new(average: String, count: usize) -> Self {
        let headline = format!("Average Starting Rate: ${average}/hr");
        let detail = format!("Based on {count} freelancers");
        Self {
            average,
            count,
            headline,
            detail,
        }
    }
}

/// One table row, already formatted
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    pub name: String,
    pub occupation: String,
    pub rate: String,
}

impl RowView {
    /// Cell texts in column order
    pub fn cells(&self) -> [&str; 3] {
        [&self.name, &self.occupation, &self.rate]
    }
}

impl ForumView {
    pub fn new(summary: SummaryView, rows: Vec<RowView>) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            summary,
            table_heading: TABLE_HEADING.to_string(),
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
