use super::BlobStore;
use crate::error::{InnovationError, Result};
use crate::model::{Idea, IdeaDraft, IdeaId};
use chrono::Utc;
use std::collections::HashSet;

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "ideas";

/// What changed, passed to listeners after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created(IdeaId),
    Updated(IdeaId),
    RankAdjusted { id: IdeaId, rank: i64 },
    Deleted(IdeaId),
}

impl StoreEvent {
    pub fn id(&self) -> &IdeaId {
        match self {
            StoreEvent::Created(id) | StoreEvent::Updated(id) | StoreEvent::Deleted(id) => id,
            StoreEvent::RankAdjusted { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent, &[Idea])>;

/// Owns the idea collection and keeps the blob store in step with it.
///
/// Built once at startup with [`IdeaStore::open`] and torn down with
/// [`IdeaStore::close`]. Each mutating call applies to memory, rewrites the
/// whole collection under the store key, then notifies listeners.
///
/// Missing ids are never an error: `update`, `adjust_rank` and `delete`
/// quietly do nothing, write nothing and notify no one. A failed write is
/// returned as `Err`, but the in-memory change stays; the next successful
/// write carries it.
pub struct IdeaStore<B: BlobStore> {
    backend: B,
    key: String,
    ideas: Vec<Idea>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<B: BlobStore> IdeaStore<B> {
    /// Load the collection stored under `key`, or start empty if there is none.
    pub fn open(backend: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let ideas = match backend.read(&key)? {
            Some(blob) => decode(&blob)?,
            None => Vec::new(),
        };
        tracing::debug!(key = %key, count = ideas.len(), "idea store opened");

        Ok(Self {
            backend,
            key,
            ideas,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Drop all listeners and hand back the backend.
    pub fn close(self) -> B {
        tracing::debug!(key = %self.key, "idea store closed");
        self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All ideas, in insertion order.
    pub fn list(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn get(&self, id: &IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|idea| &idea.id == id)
    }

    pub fn create(&mut self, draft: IdeaDraft) -> Result<Idea> {
        let mut id = IdeaId::generate();
        while self.get(&id).is_some() {
            id = IdeaId::generate();
        }

        let idea = Idea::from_draft(id, draft, Utc::now());
        self.ideas.push(idea.clone());
        tracing::debug!(id = %idea.id, title = %idea.title, "idea created");

        self.commit(StoreEvent::Created(idea.id.clone()))?;
        Ok(idea)
    }

    /// Replace the stored record with the same id.
    ///
    /// Every field comes from `idea` except `created_at`, which is fixed at
    /// creation and kept from the stored record.
    pub fn update(&mut self, idea: Idea) -> Result<()> {
        let Some(slot) = self.ideas.iter_mut().find(|existing| existing.id == idea.id) else {
            tracing::debug!(id = %idea.id, "update skipped, no such idea");
            return Ok(());
        };

        let created_at = slot.created_at;
        *slot = Idea { created_at, ..idea };
        let id = slot.id.clone();
        tracing::debug!(id = %id, "idea updated");

        self.commit(StoreEvent::Updated(id))
    }

    pub fn adjust_rank(&mut self, id: &IdeaId, delta: i64) -> Result<()> {
        let Some(idea) = self.ideas.iter_mut().find(|idea| &idea.id == id) else {
            tracing::debug!(id = %id, "rank change skipped, no such idea");
            return Ok(());
        };

        idea.rank = idea.rank.saturating_add(delta);
        let rank = idea.rank;
        tracing::debug!(id = %id, delta, rank, "idea rank adjusted");

        self.commit(StoreEvent::RankAdjusted {
            id: id.clone(),
            rank,
        })
    }

    pub fn delete(&mut self, id: &IdeaId) -> Result<()> {
        let before = self.ideas.len();
        self.ideas.retain(|idea| &idea.id != id);
        if self.ideas.len() == before {
            tracing::debug!(id = %id, "delete skipped, no such idea");
            return Ok(());
        }
        tracing::debug!(id = %id, "idea deleted");

        self.commit(StoreEvent::Deleted(id.clone()))
    }

    /// Register a listener, called after every successful mutation with the
    /// event and the collection as it now stands.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[Idea]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    fn commit(&mut self, event: StoreEvent) -> Result<()> {
        let blob = encode(&self.ideas)?;
        if let Err(e) = self.backend.write(&self.key, &blob) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist ideas");
            return Err(e);
        }

        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, &self.ideas);
        }
        Ok(())
    }
}

/// Serialize a collection into the blob format.
pub fn encode(ideas: &[Idea]) -> Result<String> {
    serde_json::to_string_pretty(ideas).map_err(InnovationError::Serialization)
}

/// Parse a blob, rejecting anything that would break the collection invariants.
pub fn decode(blob: &str) -> Result<Vec<Idea>> {
    let ideas: Vec<Idea> = serde_json::from_str(blob).map_err(InnovationError::Serialization)?;

    let mut seen = HashSet::with_capacity(ideas.len());
    for idea in &ideas {
        if !seen.insert(&idea.id) {
            return Err(InnovationError::Store(format!(
                "duplicate idea id in stored data: {}",
                idea.id
            )));
        }
    }
    Ok(ideas)
}
