use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use svara_client::TaskApi;
use svara_tasks::{Task, TaskCreate, TaskStatus, TaskUpdate, TaskView};
use tracing::debug;

use crate::output::{render_task, render_tasks, OutputFormat};
use crate::validation::{ensure_valid, parse_due_date, validate_task_create, validate_task_update};

#[derive(Debug, Subcommand)]
pub enum TasksCommands {
    /// List tasks, optionally through a curated view
    List {
        /// View to list (inbox, today, backlog, done)
        #[arg(short, long, conflicts_with = "all")]
        view: Option<TaskView>,
        /// List every task regardless of view
        #[arg(long)]
        all: bool,
    },
    /// Show task details
    Show {
        /// Task ID to show
        id: i64,
    },
    /// Add a new task
    Add(AddArgs),
    /// Edit an existing task
    Edit(EditArgs),
    /// Replace a task's note
    Note {
        /// Task ID
        id: i64,
        /// New note text
        text: String,
    },
    /// Move a task from inbox to next
    Promote {
        /// Task ID
        id: i64,
    },
    /// Mark a task as done
    Complete {
        /// Task ID
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Task ID to delete
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Free-form note
    #[arg(short, long)]
    pub note: Option<String>,
    /// Initial status (defaults to inbox on the server)
    #[arg(short, long)]
    pub status: Option<TaskStatus>,
    /// Due date (YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339)
    #[arg(short, long)]
    pub due: Option<String>,
    /// Schedule for today at this rank (1-3)
    #[arg(long)]
    pub today_rank: Option<i32>,
    /// Tag ID to attach (repeatable)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<i64>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID to edit
    pub id: i64,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New note
    #[arg(short, long, conflicts_with = "clear_note")]
    pub note: Option<String>,
    /// Remove the note
    #[arg(long)]
    pub clear_note: bool,
    /// New status
    #[arg(short, long)]
    pub status: Option<TaskStatus>,
    /// New due date
    #[arg(short, long, conflicts_with = "clear_due")]
    pub due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,
    /// New today rank (1-3)
    #[arg(long, conflicts_with = "clear_today_rank")]
    pub today_rank: Option<i32>,
    /// Unschedule from today
    #[arg(long)]
    pub clear_today_rank: bool,
    /// Replace tags with these IDs (repeatable)
    #[arg(short = 't', long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<i64>,
    /// Remove every tag
    #[arg(long)]
    pub clear_tags: bool,
}

impl AddArgs {
    fn into_create(self) -> Result<TaskCreate> {
        let due_at = self.due.as_deref().map(parse_due_date).transpose()?;

        Ok(TaskCreate {
            title: self.title,
            note: self.note,
            status: self.status,
            due_at,
            today_rank: self.today_rank,
            tag_ids: self.tags,
        })
    }
}

impl EditArgs {
    fn into_update(self) -> Result<TaskUpdate> {
        let due = self.due.as_deref().map(parse_due_date).transpose()?;

        Ok(TaskUpdate {
            title: self.title,
            note: nullable(self.note, self.clear_note),
            status: self.status,
            due_at: nullable(due, self.clear_due),
            today_rank: nullable(self.today_rank, self.clear_today_rank),
            tag_ids: if self.clear_tags {
                Some(Some(Vec::new()))
            } else if self.tags.is_empty() {
                None
            } else {
                Some(Some(self.tags))
            },
        })
    }
}

/// `--clear-*` sends an explicit null; a value sets it; neither omits the field
fn nullable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

pub async fn handle_tasks_command<A>(
    api: &A,
    command: TasksCommands,
    format: OutputFormat,
) -> Result<String>
where
    A: TaskApi + ?Sized,
{
    match command {
        TasksCommands::List { view, all } => {
            let tasks = if all {
                api.fetch_all_tasks().await?
            } else {
                api.fetch_tasks(view).await?
            };
            render_tasks(&tasks, format)
        }
        TasksCommands::Show { id } => render_task(&api.fetch_task(id).await?, format),
        TasksCommands::Add(args) => {
            let create = args.into_create()?;
            ensure_valid(validate_task_create(&create))?;
            debug!("creating task '{}'", create.title);

            let task = api.create_task(&create).await?;
            mutation_result(&task, format, "Created")
        }
        TasksCommands::Edit(args) => {
            let id = args.id;
            let update = args.into_update()?;
            ensure_valid(validate_task_update(&update))?;

            let task = api.update_task(id, &update).await?;
            mutation_result(&task, format, "Updated")
        }
        TasksCommands::Note { id, text } => {
            let task = api.update_task_note(id, &text).await?;
            mutation_result(&task, format, "Updated note on")
        }
        TasksCommands::Promote { id } => {
            let task = api.promote_task(id).await?;
            mutation_result(&task, format, "Promoted")
        }
        TasksCommands::Complete { id } => {
            let task = api.complete_task(id).await?;
            mutation_result(&task, format, "Completed")
        }
        TasksCommands::Delete { id } => {
            api.delete_task(id).await?;
            Ok(format!("{} task #{}", "Deleted".green().bold(), id))
        }
    }
}

fn mutation_result(task: &Task, format: OutputFormat, verb: &str) -> Result<String> {
    match format {
        OutputFormat::Json => render_task(task, format),
        OutputFormat::Table => Ok(format!(
            "{} task #{} ({})\n\n{}",
            verb.green().bold(),
            task.id,
            task.status,
            render_task(task, format)?
        )),
    }
}
