use chrono::NaiveDateTime;
use terminal_size::{terminal_size, Width};
use crate::helpers::date_helper::DateHelper;
use crate::services::course_catalog::CourseDetail;
use crate::services::starting_soon::StartingSoon;
use crate::structs::course::Course;
use crate::structs::lead::Lead;
use crate::structs::session::Session;
use crate::structs::slot::Slot;
use crate::structs::transaction::Transaction;

const FALLBACK_WIDTH: usize = 120;
const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub struct TableLogger;

impl TableLogger {

    fn width() -> usize {
        terminal_size().map_or(FALLBACK_WIDTH, |(Width(w), _)| usize::from(w))
    }

    /// Lays out `rows` under `headers`, shrinking the widest columns until the table
    /// fits in `max_width`. Rows in `highlight` get a leading marker.
    pub fn render(headers: &[&str], rows: &[Vec<String>], highlight: Option<usize>, max_width: usize) -> Vec<String> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        // two-char marker gutter plus " | " between columns
        let overhead = 2 + 3 * widths.len().saturating_sub(1);
        while widths.iter().sum::<usize>() + overhead > max_width {
            let Some((widest, _)) = widths.iter().enumerate().filter(|(_, w)| **w > MIN_COLUMN).max_by_key(|(_, w)| **w) else {
                break;
            };
            widths[widest] -= 1;
        }

        let line = |cells: Vec<String>, marker: &str| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", truncate(cell, *width), width = *width))
                .collect();
            format!("{marker}{}", padded.join(" | ")).trim_end().to_string()
        };

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(line(headers.iter().map(ToString::to_string).collect(), "  "));
        lines.push(format!("  {}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")));
        for (i, row) in rows.iter().enumerate() {
            let marker = if highlight == Some(i) { "▶ " } else { "  " };
            lines.push(line(row.clone(), marker));
        }
        lines
    }

    fn print(title: &str, headers: &[&str], rows: &[Vec<String>], highlight: Option<usize>) {
        println!("\n{title}");
        println!("{SEPARATOR}");
        for line in Self::render(headers, rows, highlight, Self::width()) {
            println!("{line}");
        }
        println!("{SEPARATOR}");
    }

    pub fn print_sessions(sessions: &[Session], all: &[Session], now: NaiveDateTime) {
        let next = StartingSoon::next_session(all, now).map(|s| s.session_code.clone());
        let highlight = next
            .as_deref()
            .and_then(|code| sessions.iter().position(|s| s.session_code == code));

        let rows: Vec<Vec<String>> = sessions
            .iter()
            .map(|s| {
                vec![
                    s.session_code.clone(),
                    s.email.clone(),
                    DateHelper::display_date(&s.date),
                    s.time.clone(),
                    s.runtime_label(),
                    s.status.label().to_string(),
                ]
            })
            .collect();

        Self::print("📅 Sessions", &["Code", "Email", "Date", "Time", "Runtime", "Status"], &rows, highlight);
        if let Some(i) = highlight {
            println!("⏰ Starting soon: {}", sessions[i].session_code);
        }
    }

    pub fn print_slots(date: &str, slots: &[Slot]) {
        if slots.is_empty() {
            println!("\n📭 No slots available on {date}");
            return;
        }

        let rows: Vec<Vec<String>> = slots
            .iter()
            .map(|slot| {
                vec![
                    slot.slot_code.clone(),
                    DateHelper::display_date(&slot.date),
                    slot.time.clone(),
                    slot.runtime.map_or_else(|| "N/A".to_string(), |m| format!("{m} min")),
                    if slot.is_free() { "Free".to_string() } else { "Booked".to_string() },
                ]
            })
            .collect();

        Self::print(&format!("🕒 Slots on {date}"), &["Slot", "Date", "Time", "Runtime", "Status"], &rows, None);
    }

    pub fn print_leads(leads: &[Lead]) {
        let rows: Vec<Vec<String>> = leads
            .iter()
            .map(|lead| {
                vec![
                    lead.id.clone(),
                    na(lead.full_name.as_deref()),
                    na(lead.email.as_deref()),
                    na(lead.phone.as_deref()),
                    lead.status.map_or_else(|| "N/A".to_string(), |s| s.label().to_string()),
                    lead.created_at.as_deref().map_or_else(|| "N/A".to_string(), DateHelper::display_date),
                ]
            })
            .collect();

        Self::print("👥 Leads", &["ID", "Name", "Email", "Phone", "Status", "Created"], &rows, None);
    }

    pub fn print_lead(lead: &Lead) {
        println!("\n👤 {}", na(lead.full_name.as_deref()));
        println!("{SEPARATOR}");
        println!("ID:      {}", lead.id);
        println!("Email:   {}", na(lead.email.as_deref()));
        println!("Phone:   {}", na(lead.phone.as_deref()));
        match lead.status {
            Some(status) => println!("Status:  {} ({})", status.label(), status.description()),
            None => println!("Status:  N/A"),
        }
        println!("Created: {}", lead.created_at.as_deref().map_or_else(|| "N/A".to_string(), DateHelper::display_date));
        println!("Message:\n{}", na(lead.additional_message.as_deref()));
        println!("{SEPARATOR}");
    }

    pub fn print_transactions(transactions: &[Transaction], page: u32, pages: u32, total: u64) {
        let rows: Vec<Vec<String>> = transactions
            .iter()
            .map(|tx| {
                vec![
                    na(tx.transaction_code.as_deref()),
                    na(tx.title.as_deref()),
                    tx.kind.map_or_else(|| "N/A".to_string(), |k| k.as_str().to_string()),
                    na(tx.channel.as_deref()),
                    na(tx.payment_method.as_deref()),
                    tx.status.map_or_else(|| "N/A".to_string(), |s| s.label()),
                    tx.created_at.as_deref().map_or_else(|| "N/A".to_string(), DateHelper::display_date),
                ]
            })
            .collect();

        Self::print(
            "💳 Transactions",
            &["Code", "Title", "Type", "Channel", "Payment", "Status", "Date"],
            &rows,
            None,
        );
        println!("Page {page} of {pages} ({total} total)");
    }

    pub fn print_courses(courses: &[Course]) {
        let rows: Vec<Vec<String>> = courses
            .iter()
            .map(|course| {
                vec![
                    course.id.clone(),
                    na(course.courses_code.as_deref()),
                    na(course.title.as_deref()),
                    na(course.category.as_deref()),
                    course.price.map_or_else(|| "N/A".to_string(), |p| format!("${p:.2}")),
                ]
            })
            .collect();

        Self::print("📚 Courses", &["ID", "Code", "Title", "Category", "Price"], &rows, None);
    }

    pub fn print_course(detail: &CourseDetail) {
        let course = &detail.course;
        println!("\n📘 {}", na(course.title.as_deref()));
        println!("{SEPARATOR}");
        if let Some(description) = course.description.as_deref() {
            println!("{description}\n");
        }
        println!("{} lesson(s), {} video(s)", detail.lessons.len(), detail.video_count());
        for (i, lesson) in detail.lessons.iter().enumerate() {
            println!("  {}. {} ({} video(s))", i + 1, na(lesson.title.as_deref()), lesson.videos.len());
            for video in &lesson.videos {
                println!("     ▸ {}", na(video.title.as_deref()));
            }
        }
        println!("{SEPARATOR}");
    }
}

fn na(value: Option<&str>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("N/A").to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["SES-001".to_string(), "ana@example.com".to_string()],
            vec!["SES-002".to_string(), "a.very.long.address@example.com".to_string()],
        ]
    }

    #[test]
    fn marks_highlighted_row() {
        let lines = TableLogger::render(&["Code", "Email"], &rows(), Some(1), 200);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("  SES-001"));
        assert!(lines[3].starts_with("▶ SES-002"));
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let lines = TableLogger::render(&["Code", "Email"], &rows(), None, 30);
        assert!(lines.iter().all(|line| line.chars().count() <= 30));
        assert!(lines[3].ends_with('…'));
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
