use crate::commands::{CmdMessage, CmdResult, IdeaUpdate};
use crate::error::{InnovationError, Result};
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

use super::helpers::resolve_one;

pub fn run<B: BlobStore>(store: &mut IdeaStore<B>, updates: &[IdeaUpdate]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for update in updates {
        let target = resolve_one(store, &update.selector)?;
        let mut idea = target.idea;

        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(InnovationError::Validation("Title cannot be empty".into()));
            }
            idea.title = title.clone();
        }
        if let Some(description) = &update.description {
            idea.description = description.clone();
        }
        for (name, value) in &update.traits {
            idea.traits.set(name, *value)?;
        }

        store.update(idea.clone())?;
        result.add_message(CmdMessage::success(format!(
            "Idea updated ({}): {}",
            target.position, idea.title
        )));
        result.affected_ideas.push(idea);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IdeaSelector;
    use crate::model::{IdeaDraft, Traits};
    use crate::store::idea_store::DEFAULT_KEY;
    use crate::store::memory::MemBlobStore;

    fn store_with(titles: &[&str]) -> IdeaStore<MemBlobStore> {
        let mut store = IdeaStore::open(MemBlobStore::new(), DEFAULT_KEY).unwrap();
        for title in titles {
            store.create(IdeaDraft::new(*title, "desc")).unwrap();
        }
        store
    }

    #[test]
    fn changing_title_keeps_everything_else() {
        let mut store = store_with(&["Old"]);
        let before = store.list()[0].clone();

        run(
            &mut store,
            &[IdeaUpdate::new(IdeaSelector::Position(1)).with_title("New")],
        )
        .unwrap();

        let after = &store.list()[0];
        assert_eq!(after.title, "New");
        assert_eq!(after.description, before.description);
        assert_eq!(after.traits, before.traits);
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn sets_traits_by_name() {
        let mut store = store_with(&["A"]);
        run(
            &mut store,
            &[IdeaUpdate::new(IdeaSelector::Position(1))
                .with_trait("time to mvp", 8)
                .with_trait("Scalability", 2)],
        )
        .unwrap();

        let mut expected = Traits::default();
        expected.set("Time to MVP", 8).unwrap();
        expected.set("Scalability", 2).unwrap();
        assert_eq!(store.list()[0].traits, expected);
    }

    #[test]
    fn out_of_range_trait_leaves_idea_untouched() {
        let mut store = store_with(&["A"]);
        let result = run(
            &mut store,
            &[IdeaUpdate::new(IdeaSelector::Position(1)).with_trait("Scalability", 11)],
        );

        assert!(matches!(result, Err(InnovationError::InvalidTraits(_))));
        assert_eq!(store.list()[0].traits, Traits::default());
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let mut store = store_with(&["A"]);
        let result = run(
            &mut store,
            &[IdeaUpdate::new(IdeaSelector::Position(4)).with_title("X")],
        );
        assert!(matches!(result, Err(InnovationError::Api(_))));
    }
}
