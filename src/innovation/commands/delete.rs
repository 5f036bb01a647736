use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IdeaSelector;
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

use super::helpers::resolve_selectors;

pub fn run<B: BlobStore>(store: &mut IdeaStore<B>, selectors: &[IdeaSelector]) -> Result<CmdResult> {
    // Resolve everything up front; positions shift as ideas are removed
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for target in resolved {
        if store.get(&target.idea.id).is_none() {
            result.add_message(CmdMessage::warning(format!(
                "Idea already deleted ({}): {}",
                target.position, target.idea.title
            )));
            continue;
        }
        store.delete(&target.idea.id)?;
        result.add_message(CmdMessage::success(format!(
            "Idea deleted ({}): {}",
            target.position, target.idea.title
        )));
        result.affected_ideas.push(target.idea);
    }

    Ok(result)
}
