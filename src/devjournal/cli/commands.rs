use super::render::{print_entry_table, print_messages, print_search_results, print_stats};
use super::setup::{Cli, Commands};
use clap::Parser;
use devjournal::api::{EntryUpdate, JournalApi};
use devjournal::config::JournalConfig;
use devjournal::error::Result;
use devjournal::model::EntryId;
use devjournal::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "DEVJOURNAL_CONFIG_DIR";
const LOG_ENV: &str = "DEVJOURNAL_LOG";

struct AppContext {
    api: JournalApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add {
            title,
            content,
            tags,
        } => handle_add(&mut ctx, &title, &content, &tags),
        Commands::Display { tags } => handle_display(&ctx, &tags),
        Commands::Stats => handle_stats(&ctx),
        Commands::Search { query, titles_only } => handle_search(&ctx, &query, titles_only),
        Commands::Edit {
            id,
            title,
            content,
            tags,
        } => {
            let update = EntryUpdate {
                id,
                title,
                content,
                tags,
            };
            handle_edit(&mut ctx, &update)
        }
        Commands::Delete { id } => handle_delete(&mut ctx, id),
        Commands::Populate { count, seed } => handle_populate(&mut ctx, count, seed),
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("devjournal=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "devjournal", "devjournal")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir() {
        Some(dir) => JournalConfig::load(&dir)?,
        None => JournalConfig::default(),
    };
    let path = config.journal_path(cli.file.clone());
    debug!(path = %path.display(), "using journal file");

    let store = FileStore::new(path);
    Ok(AppContext {
        api: JournalApi::new(store, config),
    })
}

fn handle_add(ctx: &mut AppContext, title: &str, content: &str, tags: &str) -> Result<()> {
    let result = ctx.api.add_entry(title, content, tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_display(ctx: &AppContext, tags: &[String]) -> Result<()> {
    let result = ctx.api.list_entries(tags)?;
    print_entry_table(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = result.stats.as_ref().filter(|s| s.total_entries > 0) {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str, titles_only: bool) -> Result<()> {
    let result = ctx.api.search_entries(query, titles_only)?;
    print_search_results(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, update: &EntryUpdate) -> Result<()> {
    let result = ctx.api.edit_entry(update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: EntryId) -> Result<()> {
    let result = ctx.api.delete_entry(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_populate(ctx: &mut AppContext, count: Option<usize>, seed: Option<u64>) -> Result<()> {
    let result = ctx.api.populate(count, seed)?;
    print_messages(&result.messages);
    Ok(())
}
