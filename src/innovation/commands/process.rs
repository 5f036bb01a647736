use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InnovationError, Result};
use crate::index::IdeaSelector;
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

use super::helpers::{item_index, resolve_one};

pub fn add_step<B: BlobStore>(
    store: &mut IdeaStore<B>,
    selector: &IdeaSelector,
    step: String,
) -> Result<CmdResult> {
    if step.trim().is_empty() {
        return Err(InnovationError::Validation("Process step cannot be empty".into()));
    }

    let target = resolve_one(store, selector)?;
    let mut idea = target.idea;
    idea.process.push(step);
    let count = idea.process.len();
    store.update(idea.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Step {} added ({}): {}",
        count, target.position, idea.title
    )));
    result.affected_ideas.push(idea);
    Ok(result)
}

pub fn remove_step<B: BlobStore>(
    store: &mut IdeaStore<B>,
    selector: &IdeaSelector,
    position: usize,
) -> Result<CmdResult> {
    let target = resolve_one(store, selector)?;
    let mut idea = target.idea;
    let at = item_index(position, idea.process.len(), "step")?;
    let removed = idea.process.remove(at);
    store.update(idea.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Step removed ({}): {}",
        target.position, removed
    )));
    result.affected_ideas.push(idea);
    Ok(result)
}
