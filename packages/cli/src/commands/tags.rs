use anyhow::Result;
use clap::Subcommand;
use colored::*;
use svara_client::TagApi;
use svara_tags::TagCreate;

use crate::output::{render_tag, render_tags, OutputFormat};
use crate::validation::{ensure_valid, validate_tag_create};

#[derive(Debug, Subcommand)]
pub enum TagsCommands {
    /// List all tags
    List,
    /// Show tag details
    Show {
        /// Tag ID to show
        id: i64,
    },
    /// Add a new tag
    Add {
        /// Tag name
        name: String,
    },
    /// Delete a tag
    Delete {
        /// Tag ID to delete
        id: i64,
    },
}

pub async fn handle_tags_command<A>(
    api: &A,
    command: TagsCommands,
    format: OutputFormat,
) -> Result<String>
where
    A: TagApi + ?Sized,
{
    match command {
        TagsCommands::List => render_tags(&api.fetch_tags().await?, format),
        TagsCommands::Show { id } => render_tag(&api.fetch_tag(id).await?, format),
        TagsCommands::Add { name } => {
            let create = TagCreate::new(name);
            ensure_valid(validate_tag_create(&create))?;

            let tag = api.create_tag(&create).await?;
            match format {
                OutputFormat::Json => render_tag(&tag, format),
                OutputFormat::Table => Ok(format!(
                    "{} tag #{} '{}' (key: {})",
                    "Created".green().bold(),
                    tag.id,
                    tag.name,
                    tag.key
                )),
            }
        }
        TagsCommands::Delete { id } => {
            api.delete_tag(id).await?;
            Ok(format!("{} tag #{}", "Deleted".green().bold(), id))
        }
    }
}
