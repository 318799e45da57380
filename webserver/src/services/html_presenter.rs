//! HTML page presenter
//!
//! Produces the full forum page. The element ids and classes are the ones the
//! client script looks up when it applies pushed views.

use std::fmt::{self, Write};

use shared::{ForumView, RowView, SummaryView};

use crate::traits::Presenter;

pub const STYLESHEET_PATH: &str = "/static/forum.css";
pub const SCRIPT_PATH: &str = "/static/forum.js";

#[derive(Debug, Clone, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Average rate block, `div.average-rate`
    pub fn summary_html(summary: &SummaryView) -> String {
        format!(
            "<div class=\"average-rate\"><h2>{}</h2><p>{}</p></div>",
            escape_html(&summary.headline),
            escape_html(&summary.detail)
        )
    }

    /// Table body with one `tr.freelancer` per row
    pub fn rows_html(rows: &[RowView]) -> String {
        let mut html = String::from("<tbody id=\"FreelancerRows\">");
        for row in rows {
            html.push_str(&format!(
                "<tr class=\"freelancer\"><td class=\"name\">{}</td><td class=\"occupation\">{}</td><td class=\"rate\">{}</td></tr>",
                escape_html(&row.name),
                escape_html(&row.occupation),
                escape_html(&row.rate)
            ));
        }
        html.push_str("</tbody>");
        html
    }

    fn write_page(out: &mut String, view: &ForumView) -> fmt::Result {
        let title = escape_html(&view.title);

        writeln!(out, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{title}</title>")?;
        writeln!(out, "<link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">")?;
        writeln!(out, "</head>\n<body>\n<div id=\"app\">")?;

        writeln!(out, "<header><h1>{title}</h1></header>\n<main>")?;
        writeln!(out, "{}", Self::summary_html(&view.summary))?;

        writeln!(
            out,
            "<section class=\"freelancers-section\"><h2>{}</h2>",
            escape_html(&view.table_heading)
        )?;
        write!(out, "<table class=\"freelancers-table\"><thead><tr>")?;
        for column in &view.columns {
            write!(out, "<th>{}</th>", escape_html(column))?;
        }
        write!(out, "</tr></thead>{}", Self::rows_html(&view.rows))?;
        writeln!(out, "</table>\n</section>\n</main>\n</div>")?;

        writeln!(out, "<script src=\"{SCRIPT_PATH}\"></script>")?;
        writeln!(out, "</body>\n</html>")
    }
}

impl Presenter for HtmlPresenter {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn present(&self, view: &ForumView) -> String {
        let mut html = String::new();
        // Writing into a String cannot fail
        let _ = Self::write_page(&mut html, view);
        html
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
