use std::fs;
use std::path::{Path, PathBuf};
use chrono::NaiveDateTime;
use crate::enums::transaction_status::TransactionStatus;
use crate::enums::transaction_type::TransactionType;
use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::helpers::date_helper::DateHelper;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::lead::Lead;
use crate::structs::session::Session;
use crate::structs::transaction::{Transaction, TransactionFilters};

const REPORT_CSS: &str = include_str!("static/report.css");

/// One table cell; `class` is applied to the `<td>` for colouring.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    text: String,
    class: Option<&'static str>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), class: None }
    }

    /// Cell rendered with a CSS class, e.g. `income` or `failed`.
    pub fn styled(text: impl Into<String>, class: &'static str) -> Self {
        Self { text: text.into(), class: Some(class) }
    }

    fn or_na(text: Option<&str>) -> Self {
        Self::text(text.filter(|t| !t.trim().is_empty()).unwrap_or("N/A"))
    }
}

/// A printable, self-contained HTML table.
#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    info: Vec<String>,
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl Report {
    pub fn new(title: &str, headers: Vec<&'static str>) -> Self {
        Self {
            title: title.to_string(),
            info: Vec::new(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Adds a line to the summary block above the table.
    pub fn info(mut self, line: String) -> Self {
        self.info.push(line);
        self
    }

    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Standalone HTML document with the stylesheet inlined.
    pub fn render(&self, generated_at: NaiveDateTime) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str(&format!("<style>\n{REPORT_CSS}</style>\n</head>\n<body>\n"));
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(&self.title)));
        html.push_str(&format!("<div class=\"meta\">Total records: {}</div>\n", self.rows.len()));

        if !self.info.is_empty() {
            let lines: Vec<String> = self.info.iter().map(|line| escape_html(line)).collect();
            html.push_str(&format!("<div class=\"filters\">{}</div>\n", lines.join(" | ")));
        }

        html.push_str("<table>\n<thead>\n<tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &self.rows {
            html.push_str("<tr class=\"row\">");
            for cell in row {
                match cell.class {
                    Some(class) => html.push_str(&format!("<td class=\"{class}\">{}</td>", escape_html(&cell.text))),
                    None => html.push_str(&format!("<td>{}</td>", escape_html(&cell.text))),
                }
            }
            html.push_str("</tr>\n");
        }

        html.push_str("</tbody>\n</table>\n");
        html.push_str(&format!(
            "<div class=\"footer\">Generated on {} at {}</div>\n",
            generated_at.format("%b %-d, %Y"),
            generated_at.format("%H:%M:%S")
        ));
        html.push_str("</body>\n</html>\n");
        html
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn search_info(query: &str) -> Option<String> {
    let query = query.trim();
    (!query.is_empty()).then(|| format!("Search: \"{query}\""))
}

/// Report over the sessions currently shown.
pub fn sessions_report(sessions: &[Session], query: &str) -> Report {
    let mut report = Report::new("Sessions Report", vec!["Session Code", "Email", "Date", "Time", "Runtime", "Status"]);
    if let Some(info) = search_info(query) {
        report = report.info(info);
    }

    sessions.iter().fold(report, |report, session| {
        report.row(vec![
            Cell::styled(session.session_code.clone(), "code"),
            Cell::or_na(Some(session.email.as_str())),
            Cell::text(DateHelper::display_date(&session.date)),
            Cell::or_na(Some(session.time.as_str())),
            Cell::text(session.runtime_label()),
            Cell::styled(session.status.label(), session.status.as_str()),
        ])
    })
}

/// Report over the leads currently shown.
pub fn leads_report(leads: &[Lead], query: &str) -> Report {
    let mut report = Report::new("Leads Report", vec!["Name", "Email", "Message"]);
    if let Some(info) = search_info(query) {
        report = report.info(info);
    }

    leads.iter().fold(report, |report, lead| {
        report.row(vec![
            Cell::or_na(lead.full_name.as_deref()),
            Cell::or_na(lead.email.as_deref()),
            Cell::or_na(lead.additional_message.as_deref()),
        ])
    })
}

/// Report over the transactions fetched for export.
pub fn transactions_report(transactions: &[Transaction], filters: &TransactionFilters, query: &str) -> Report {
    let mut report = Report::new(
        "Transactions Report",
        vec!["Code", "Title", "Description", "Type", "Channel", "Payment Method", "Status", "Date"],
    );
    for line in filters.describe() {
        report = report.info(line);
    }
    if let Some(info) = search_info(query) {
        report = report.info(info);
    }

    transactions.iter().fold(report, |report, tx| {
        let kind = match tx.kind {
            Some(kind @ TransactionType::Income) => Cell::styled(kind.as_str(), "income"),
            Some(kind @ TransactionType::Expense) => Cell::styled(kind.as_str(), "expense"),
            Some(TransactionType::Unknown) | None => Cell::text("N/A"),
        };
        let status = match tx.status {
            Some(status @ TransactionStatus::Completed) => Cell::styled(status.label(), "completed"),
            Some(status @ TransactionStatus::Failed) => Cell::styled(status.label(), "failed"),
            Some(status @ TransactionStatus::Pending) => Cell::styled(status.label(), "pending"),
            Some(TransactionStatus::Unknown) | None => Cell::text("N/A"),
        };

        report.row(vec![
            Cell::styled(tx.transaction_code.clone().unwrap_or_else(|| "N/A".to_string()), "code"),
            Cell::or_na(tx.title.as_deref()),
            Cell::or_na(tx.description.as_deref()),
            kind,
            Cell::or_na(tx.channel.as_deref()),
            Cell::or_na(tx.payment_method.as_deref()),
            status,
            Cell::text(tx.created_at.as_deref().map_or_else(|| "N/A".to_string(), DateHelper::display_date)),
        ])
    })
}

/// Writes rendered reports to the export directory and optionally hands them to the
/// browser for printing.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    export_dir: PathBuf,
    open_exports: bool,
}

impl ReportExporter {
    pub fn new(export_dir: impl Into<PathBuf>, open_exports: bool) -> Self {
        Self {
            export_dir: export_dir.into(),
            open_exports,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.export_dir, config.open_exports)
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Returns the path of the written file, e.g. `sessions-20250110-093000.html`.
    pub fn export(&self, name: &str, report: &Report, now: NaiveDateTime) -> ArcdeskResult<PathBuf> {
        fs::create_dir_all(&self.export_dir).map_err(|e| {
            ArcdeskError::file_error(&self.export_dir.display().to_string(), "create directory", &e.to_string())
        })?;

        let path = self.export_dir.join(format!("{}-{}.html", name, now.format("%Y%m%d-%H%M%S")));
        fs::write(&path, report.render(now))
            .map_err(|e| ArcdeskError::file_error(&path.display().to_string(), "write", &e.to_string()))?;

        log::info!("📄 Exported {} row(s) to {}", report.row_count(), path.display());

        if self.open_exports {
            self.open(&path);
        }
        Ok(path)
    }

    fn open(&self, path: &Path) {
        let target = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        match webbrowser::open(&target.display().to_string()) {
            Ok(()) => log::info!("🌐 Opened report in browser, use the print dialog to save as PDF"),
            Err(e) => log::warn!("Could not open browser: {}", e),
        }
    }
}
