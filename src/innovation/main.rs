use clap::Parser;
use directories::ProjectDirs;
use innovation::api::{self, ConfigAction, IdeaUpdate, InnovationApi};
use innovation::error::{InnovationError, Result};
use innovation::model::{IdeaDraft, Resource, ResourceKind, Traits, TRAIT_NAMES};
use innovation::store::fs::FsBlobStore;
use innovation::store::idea_store::StoreEvent;
use std::path::PathBuf;

mod args;
mod cli;
use args::{Cli, Commands, ResourceCommand, StepCommand};
use cli::print::{print_config, print_full_ideas, print_ideas, print_messages, print_stats};

const DATA_DIR_ENV: &str = "INNO_DATA_DIR";
const LOG_ENV: &str = "INNO_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: InnovationApi<FsBlobStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Neither reads ideas; run them without loading the collection
    let command = match cli.command {
        Some(Commands::Traits) => return handle_traits(),
        Some(Commands::Config { key, value }) => return handle_config(key, value),
        other => other,
    };

    let mut ctx = init_context()?;

    let outcome = match command {
        Some(Commands::Create {
            title,
            description,
            traits,
        }) => handle_create(&mut ctx, title, description, traits),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { selectors }) => handle_view(&ctx, selectors),
        Some(Commands::Edit {
            selector,
            title,
            description,
            traits,
        }) => handle_edit(&mut ctx, selector, title, description, traits),
        Some(Commands::Up { selectors }) => handle_rank(&mut ctx, selectors, true),
        Some(Commands::Down { selectors }) => handle_rank(&mut ctx, selectors, false),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Resource(action)) => handle_resource(&mut ctx, action),
        Some(Commands::Step(action)) => handle_step(&mut ctx, action),
        Some(Commands::Traits) | Some(Commands::Config { .. }) => Ok(()),
    };

    ctx.api.close();
    outcome
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "innovation-os", "inno")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| InnovationError::Store("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let store = FsBlobStore::new(dir.clone());
    tracing::debug!(dir = %store.root().display(), "using data directory");

    let mut api = InnovationApi::open(store, dir)?;
    tracing::debug!(key = api.store().key(), "idea collection loaded");
    api.subscribe(|event: &StoreEvent, ideas| {
        tracing::info!(id = %event.id(), event = ?event, count = ideas.len(), "ideas changed");
    });

    Ok(AppContext { api })
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    description: String,
    trait_args: Vec<(String, u8)>,
) -> Result<()> {
    let mut traits = Traits::default();
    for (name, value) in &trait_args {
        traits.set(name, *value)?;
    }

    let draft = IdeaDraft::new(title, description).with_traits(traits);
    let result = ctx.api.create_idea(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_ideas()?;
    print_ideas(&result.listed_ideas);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_ideas(&selectors)?;
    print_full_ideas(&result.listed_ideas);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: String,
    title: Option<String>,
    description: Option<String>,
    traits: Vec<(String, u8)>,
) -> Result<()> {
    if title.is_none() && description.is_none() && traits.is_empty() {
        return Err(InnovationError::Api(
            "Nothing to change: pass --title, --description or --trait".into(),
        ));
    }

    let mut update = IdeaUpdate::new(api::parse_selector(&selector)?);
    if let Some(title) = title {
        update = update.with_title(title);
    }
    if let Some(description) = description {
        update = update.with_description(description);
    }
    for (name, value) in traits {
        update = update.with_trait(name, value);
    }

    let result = ctx.api.update_ideas(&[update])?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rank(ctx: &mut AppContext, selectors: Vec<String>, up: bool) -> Result<()> {
    let result = if up {
        ctx.api.rank_up(&selectors)?
    } else {
        ctx.api.rank_down(&selectors)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_ideas(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(report) = &result.stats {
        print_stats(report);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_resource(ctx: &mut AppContext, action: ResourceCommand) -> Result<()> {
    let result = match action {
        ResourceCommand::Add {
            selector,
            name,
            url,
            kind,
            description,
        } => {
            let kind: ResourceKind = kind.parse()?;
            let mut resource = Resource::new(kind, name, url);
            if let Some(description) = description {
                resource = resource.with_description(description);
            }
            ctx.api.add_resource(&selector, resource)?
        }
        ResourceCommand::Remove { selector, position } => {
            ctx.api.remove_resource(&selector, position)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_step(ctx: &mut AppContext, action: StepCommand) -> Result<()> {
    let result = match action {
        StepCommand::Add { selector, text } => ctx.api.add_step(&selector, text)?,
        StepCommand::Remove { selector, position } => ctx.api.remove_step(&selector, position)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_traits() -> Result<()> {
    for (i, name) in TRAIT_NAMES.iter().enumerate() {
        println!("{:>3}. {}", i + 1, name);
    }
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api::configure(&data_dir()?, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
