//! # API Facade
//!
//! The single entry point for idea operations, whatever the client. It
//! parses selectors, loads config where a command needs it, and dispatches to
//! `commands/*.rs`. No business logic and no I/O beyond what the commands do.
//!
//! `InnovationApi<B: BlobStore>` is generic over the blob store:
//! - Production: `InnovationApi<FsBlobStore>`
//! - Testing: `InnovationApi<MemBlobStore>`

use crate::commands;
use crate::config::InnovationConfig;
use crate::error::{InnovationError, Result};
use crate::index::IdeaSelector;
use crate::model::{Idea, IdeaDraft, Resource};
use crate::store::idea_store::{IdeaStore, StoreEvent, SubscriptionId};
use crate::store::BlobStore;
use std::path::{Path, PathBuf};

pub struct InnovationApi<B: BlobStore> {
    store: IdeaStore<B>,
    config_dir: PathBuf,
}

impl<B: BlobStore> InnovationApi<B> {
    /// Open the store under the configured storage key.
    pub fn open(backend: B, config_dir: PathBuf) -> Result<Self> {
        let config = InnovationConfig::load(&config_dir)?;
        let store = IdeaStore::open(backend, config.storage_key)?;
        Ok(Self { store, config_dir })
    }

    pub fn create_idea(&mut self, draft: IdeaDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_ideas(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_ideas<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn update_ideas(&mut self, updates: &[commands::IdeaUpdate]) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, updates)
    }

    pub fn rank_up<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::rank::up(&mut self.store, &selectors)
    }

    pub fn rank_down<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::rank::down(&mut self.store, &selectors)
    }

    pub fn delete_ideas<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        let config = InnovationConfig::load(&self.config_dir)?;
        commands::stats::run(&self.store, config.recent_limit)
    }

    pub fn add_resource(&mut self, selector: &str, resource: Resource) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::resources::add(&mut self.store, &selector, resource)
    }

    pub fn remove_resource(
        &mut self,
        selector: &str,
        position: usize,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::resources::remove(&mut self.store, &selector, position)
    }

    pub fn add_step(&mut self, selector: &str, step: String) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::process::add_step(&mut self.store, &selector, step)
    }

    pub fn remove_step(&mut self, selector: &str, position: usize) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::process::remove_step(&mut self.store, &selector, position)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        configure(&self.config_dir, action)
    }

    /// Register a listener called after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[Idea]) + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.store.unsubscribe(subscription)
    }

    pub fn store(&self) -> &IdeaStore<B> {
        &self.store
    }

    /// Tear down, returning the blob store.
    pub fn close(self) -> B {
        self.store.close()
    }
}

/// Read or change configuration without opening the idea store, so a
/// damaged collection can still be switched away from.
pub fn configure(config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(config_dir, action)
}

pub fn parse_selector(input: &str) -> Result<IdeaSelector> {
    input.parse().map_err(InnovationError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<IdeaSelector>> {
    if inputs.is_empty() {
        return Err(InnovationError::Api("No ideas selected".to_string()));
    }
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::stats::StatsReport;
pub use commands::{CmdMessage, CmdResult, IdeaUpdate, MessageLevel};
