//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function returns
//! a `String` so output can be tested without capturing stdout; the `print_*`
//! wrappers just write it out.
//!
//! Layout (width, truncation, padding) is computed on plain text with
//! Unicode-aware widths and colour is applied afterwards, so ANSI codes never
//! throw the columns off.

use chrono::{DateTime, Utc};
use colored::Colorize;
use devjournal::api::{CmdMessage, JournalStats, MessageLevel};
use devjournal::model::Entry;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const TITLE_WIDTH: usize = 30;
const CONTENT_WIDTH: usize = 40;
const TAGS_WIDTH: usize = 24;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_WIDTH: usize = 19;
const RULE_WIDTH: usize = 70;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// One row per entry: Id, Title, Content, Tags, Date.
pub fn render_entry_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let header = format!(
        "{} {} {} {} {}",
        pad_left("Id", ID_WIDTH),
        pad_right("Title", TITLE_WIDTH),
        pad_right("Content", CONTENT_WIDTH),
        pad_right("Tags", TAGS_WIDTH),
        pad_right("Date", DATE_WIDTH),
    );
    out.push_str(&format!("{}\n", header.bold()));

    for entry in entries {
        let content = entry.content.replace('\n', " ");
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            pad_left(&entry.id.to_string(), ID_WIDTH).yellow(),
            pad_right(&entry.title, TITLE_WIDTH).red(),
            pad_right(&content, CONTENT_WIDTH).cyan(),
            pad_right(&entry.tags.to_string(), TAGS_WIDTH).green(),
            format_date(entry.created_at).magenta(),
        ));
    }
    out
}

pub fn print_entry_table(entries: &[Entry]) {
    print!("{}", render_entry_table(entries));
}

/// Full blocks for search hits, content untruncated.
pub fn render_search_results(entries: &[Entry]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    for entry in entries {
        out.push('\n');
        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!(
            "{}  {} - ({}, {})\n",
            format!("ID {}:", entry.id).yellow(),
            entry.title.to_uppercase().bold(),
            format_date(entry.created_at),
            format_time_ago(entry.created_at).dimmed(),
        ));
        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!("{}\n", entry.content));
        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!("tags: {}\n", entry.tags.to_string().green()));
    }
    out
}

pub fn print_search_results(entries: &[Entry]) {
    print!("{}", render_search_results(entries));
}

pub fn render_stats(stats: &JournalStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nNumber of entries: {}\n", stats.total_entries));
    out.push_str(&format!("Unique tags: {}\n", stats.unique_tags));
    out.push_str(&format!(
        "Average content length: {}\n",
        stats.average_content_length
    ));

    if !stats.tag_counts.is_empty() {
        out.push_str(&format!("\n{}\n", "Counts by tag:".bold()));
        let width = stats
            .tag_counts
            .iter()
            .map(|tc| tc.tag.width())
            .max()
            .unwrap_or(0);
        for tc in &stats.tag_counts {
            out.push_str(&format!("  {} {}\n", pad_right(&tc.tag, width), tc.count));
        }

        let plural = stats.most_used_tags.len() > 1;
        out.push_str(&format!(
            "\nMost common tag{}: {} ({} {})\n",
            if plural { "s" } else { "" },
            stats.most_used_tags.join(", ").green(),
            stats.most_used_count(),
            if stats.most_used_count() == 1 {
                "entry"
            } else {
                "entries"
            },
        ));
    }

    if !stats.entries_per_day.is_empty() {
        out.push_str(&format!("\n{}\n", "Entries per day:".bold()));
        for (day, count) in &stats.entries_per_day {
            out.push_str(&format!("  {} {}\n", day.format("%Y-%m-%d"), count));
        }
    }
    out
}

pub fn print_stats(stats: &JournalStats) {
    print!("{}", render_stats(stats));
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_right(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}
