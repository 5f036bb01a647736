use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InnovationError, Result};
use crate::index::IdeaSelector;
use crate::model::Resource;
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

use super::helpers::{item_index, resolve_one};

/// Attach a resource at the end of the idea's resource list.
pub fn add<B: BlobStore>(
    store: &mut IdeaStore<B>,
    selector: &IdeaSelector,
    resource: Resource,
) -> Result<CmdResult> {
    if resource.name.trim().is_empty() || resource.url.trim().is_empty() {
        return Err(InnovationError::Validation(
            "Resource needs both a name and a url".into(),
        ));
    }

    let target = resolve_one(store, selector)?;
    let mut idea = target.idea;
    let message = format!(
        "Resource added ({}): {} [{}] {}",
        target.position, resource.name, resource.kind, resource.url
    );
    idea.resources.push(resource);
    store.update(idea.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    result.affected_ideas.push(idea);
    Ok(result)
}

/// Remove the resource at 1-based `position`.
pub fn remove<B: BlobStore>(
    store: &mut IdeaStore<B>,
    selector: &IdeaSelector,
    position: usize,
) -> Result<CmdResult> {
    let target = resolve_one(store, selector)?;
    let mut idea = target.idea;
    let at = item_index(position, idea.resources.len(), "resource")?;
    let removed = idea.resources.remove(at);
    store.update(idea.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Resource removed ({}): {}",
        target.position, removed.name
    )));
    result.affected_ideas.push(idea);
    Ok(result)
}
