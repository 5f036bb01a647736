use crate::error::{InnovationError, Result};
use crate::index::{find, index_ideas, DisplayIdea, IdeaSelector};
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

pub fn indexed_ideas<B: BlobStore>(store: &IdeaStore<B>) -> Vec<DisplayIdea> {
    index_ideas(store.list())
}

/// Resolve every selector or fail on the first one that matches nothing.
pub fn resolve_selectors<B: BlobStore>(
    store: &IdeaStore<B>,
    selectors: &[IdeaSelector],
) -> Result<Vec<DisplayIdea>> {
    let indexed = indexed_ideas(store);

    selectors
        .iter()
        .map(|selector| {
            find(&indexed, selector).cloned().ok_or_else(|| {
                InnovationError::Api(format!("Idea {} not found", selector))
            })
        })
        .collect()
}

pub fn resolve_one<B: BlobStore>(
    store: &IdeaStore<B>,
    selector: &IdeaSelector,
) -> Result<DisplayIdea> {
    let mut resolved = resolve_selectors(store, std::slice::from_ref(selector))?;
    Ok(resolved.remove(0))
}

/// Turn a 1-based position typed by the user into a vector index.
pub fn item_index(position: usize, len: usize, what: &str) -> Result<usize> {
    if position == 0 || position > len {
        return Err(InnovationError::Api(format!(
            "No {} at position {} (there are {})",
            what, position, len
        )));
    }
    Ok(position - 1)
}
