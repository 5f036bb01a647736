use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::IdeaSelector;
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

use super::helpers::resolve_selectors;

pub fn run<B: BlobStore>(store: &IdeaStore<B>, selectors: &[IdeaSelector]) -> Result<CmdResult> {
    let ideas = resolve_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_ideas(ideas))
}
