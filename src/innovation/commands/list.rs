use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

use super::helpers::indexed_ideas;

pub fn run<B: BlobStore>(store: &IdeaStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_ideas(indexed_ideas(store)))
}
