use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IdeaSelector;
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

use super::helpers::resolve_selectors;

pub fn up<B: BlobStore>(store: &mut IdeaStore<B>, selectors: &[IdeaSelector]) -> Result<CmdResult> {
    run(store, selectors, 1)
}

pub fn down<B: BlobStore>(
    store: &mut IdeaStore<B>,
    selectors: &[IdeaSelector],
) -> Result<CmdResult> {
    run(store, selectors, -1)
}

pub fn run<B: BlobStore>(
    store: &mut IdeaStore<B>,
    selectors: &[IdeaSelector],
    delta: i64,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for target in resolved {
        store.adjust_rank(&target.idea.id, delta)?;
        if let Some(idea) = store.get(&target.idea.id) {
            result.add_message(CmdMessage::success(format!(
                "Idea rank {:+} ({}): {} is now {}",
                delta, target.position, idea.title, idea.rank
            )));
            result.affected_ideas.push(idea.clone());
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdeaDraft;
    use crate::store::idea_store::DEFAULT_KEY;
    use crate::store::memory::MemBlobStore;

    #[test]
    fn up_then_down_restores_rank() {
        let mut store = IdeaStore::open(MemBlobStore::new(), DEFAULT_KEY).unwrap();
        store.create(IdeaDraft::new("A", "")).unwrap();
        let sel = [IdeaSelector::Position(1)];

        let result = up(&mut store, &sel).unwrap();
        assert_eq!(result.affected_ideas[0].rank, 1);
        assert_eq!(result.messages[0].content, "Idea rank +1 (1): A is now 1");

        down(&mut store, &sel).unwrap();
        assert_eq!(store.list()[0].rank, 0);
    }

    #[test]
    fn same_idea_twice_counts_twice() {
        let mut store = IdeaStore::open(MemBlobStore::new(), DEFAULT_KEY).unwrap();
        store.create(IdeaDraft::new("A", "")).unwrap();
        let id = store.list()[0].id.clone();

        up(
            &mut store,
            &[IdeaSelector::Position(1), IdeaSelector::Id(id)],
        )
        .unwrap();
        assert_eq!(store.list()[0].rank, 2);
    }
}
