// ABOUTME: Rendering of tasks and tags for terminal output
// ABOUTME: Tables via comfy-table with colored status badges, or pretty JSON

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime};
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use svara_tags::Tag;
use svara_tasks::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_tasks(tasks: &[Task], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return render_json(tasks);
    }

    if tasks.is_empty() {
        return Ok("No tasks found".yellow().to_string());
    }

    let mut table = new_table();
    table.set_header(vec!["ID", "Title", "Status", "Due", "Today", "Tags"]);

    for task in tasks {
        table.add_row(vec![
            task.id.to_string(),
            truncate(&task.title, 40),
            status_badge(task.status).to_string(),
            task.due_at.as_deref().map(format_timestamp).unwrap_or_else(dash),
            task.today_rank.map(|r| format!("#{}", r)).unwrap_or_else(dash),
            tag_names(&task.tags),
        ]);
    }

    Ok(format!(
        "{}\nTotal: {} tasks",
        table,
        tasks.len().to_string().cyan()
    ))
}

pub fn render_task(task: &Task, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return render_json(task);
    }

    let mut lines = vec![
        format!("{}", format!("Task #{} - {}", task.id, task.title).blue().bold()),
        String::new(),
        detail("Status", status_badge(task.status).to_string()),
        detail(
            "Due",
            task.due_at.as_deref().map(format_timestamp).unwrap_or_else(dash),
        ),
        detail(
            "Today rank",
            task.today_rank.map(|r| r.to_string()).unwrap_or_else(dash),
        ),
        detail("Tags", tag_names(&task.tags)),
        detail("Created", format_timestamp(&task.created_at)),
        detail("Updated", format_timestamp(&task.updated_at)),
    ];

    if let Some(done_at) = &task.done_at {
        lines.push(detail("Done", format_timestamp(done_at)));
    }

    if let Some(note) = &task.note {
        lines.push(String::new());
        lines.push(format!("{}", "Note:".bold()));
        lines.push(note.clone());
    }

    Ok(lines.join("\n"))
}

pub fn render_tags(tags: &[Tag], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return render_json(tags);
    }

    if tags.is_empty() {
        return Ok("No tags found".yellow().to_string());
    }

    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Key", "Created"]);

    for tag in tags {
        table.add_row(vec![
            tag.id.to_string(),
            truncate(&tag.name, 30),
            tag.key.clone(),
            format_timestamp(&tag.created_at),
        ]);
    }

    Ok(format!("{}\nTotal: {} tags", table, tags.len().to_string().cyan()))
}

pub fn render_tag(tag: &Tag, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return render_json(tag);
    }

    Ok([
        format!("{}", format!("Tag #{} - {}", tag.id, tag.name).blue().bold()),
        detail("Key", tag.key.clone()),
        detail("Created", format_timestamp(&tag.created_at)),
    ]
    .join("\n"))
}

pub fn status_badge(status: TaskStatus) -> ColoredString {
    let label = status.as_str();
    match status {
        TaskStatus::Inbox => label.cyan(),
        TaskStatus::Next => label.blue(),
        TaskStatus::Doing => label.yellow().bold(),
        TaskStatus::Waiting => label.magenta(),
        TaskStatus::Done => label.green(),
    }
}

/// Shortens the server's ISO timestamps for display, leaving anything
/// unrecognized untouched.
pub fn format_timestamp(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn detail(label: &str, value: String) -> String {
    format!("{:<12} {}", format!("{}:", label).dimmed(), value)
}

fn tag_names(tags: &[Tag]) -> String {
    if tags.is_empty() {
        dash()
    } else {
        tags.iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn dash() -> String {
    "-".to_string()
}
