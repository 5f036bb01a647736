use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InnovationError, Result};
use crate::model::IdeaDraft;
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

pub fn run<B: BlobStore>(store: &mut IdeaStore<B>, draft: IdeaDraft) -> Result<CmdResult> {
    if draft.title.trim().is_empty() {
        return Err(InnovationError::Validation("Title cannot be empty".into()));
    }

    let idea = store.create(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Idea created ({}): {}",
        store.list().len(),
        idea.title
    )));
    result.affected_ideas.push(idea);
    Ok(result)
}
