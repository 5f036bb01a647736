use crate::error::{InnovationError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The fixed dimensions every idea is scored on, in canonical order.
pub const TRAIT_NAMES: [&str; 11] = [
    "Technical Feasibility",
    "Time to MVP",
    "Cost to Develop",
    "Market Demand and Revenue Potential",
    "Scalability",
    "Maintenance and Complexity",
    "Industry Familiarity",
    "Industry Restrictions or Regulations",
    "Ease of Prototypability",
    "Number of Large Assumptions",
    "Adjacency to Users",
];

pub const TRAIT_MIN: u8 = 1;
pub const TRAIT_MAX: u8 = 10;
pub const TRAIT_DEFAULT: u8 = 5;

/// Opaque idea identifier.
///
/// New ids are v4 UUIDs, but any string read back from storage is accepted
/// so older collections keep their ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(String);

impl IdeaId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for IdeaId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for IdeaId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaTrait {
    pub name: String,
    pub value: u8,
}

/// The complete, ordered set of trait scores for one idea.
///
/// Only constructible with every canonical trait present exactly once and
/// every value in `TRAIT_MIN..=TRAIT_MAX`. Deserialization goes through the
/// same check, re-ordering entries into canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<IdeaTrait>", into = "Vec<IdeaTrait>")]
pub struct Traits(Vec<IdeaTrait>);

impl Default for Traits {
    fn default() -> Self {
        Self(
            TRAIT_NAMES
                .iter()
                .map(|name| IdeaTrait {
                    name: name.to_string(),
                    value: TRAIT_DEFAULT,
                })
                .collect(),
        )
    }
}

impl Traits {
    /// Build from values given in canonical order.
    pub fn from_values(values: [u8; TRAIT_NAMES.len()]) -> Result<Self> {
        let mut traits = Self::default();
        for (entry, value) in traits.0.iter_mut().zip(values) {
            check_range(&entry.name, value)?;
            entry.value = value;
        }
        Ok(traits)
    }

    /// Set one trait by name. Names match case-insensitively.
    pub fn set(&mut self, name: &str, value: u8) -> Result<()> {
        let entry = self
            .0
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| InnovationError::InvalidTraits(format!("unknown trait '{}'", name)))?;
        check_range(&entry.name, value)?;
        entry.value = value;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.0
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .map(|t| t.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IdeaTrait> {
        self.0.iter()
    }

    pub fn mean(&self) -> f64 {
        let total: u32 = self.0.iter().map(|t| u32::from(t.value)).sum();
        f64::from(total) / self.0.len() as f64
    }
}

fn check_range(name: &str, value: u8) -> Result<()> {
    if !(TRAIT_MIN..=TRAIT_MAX).contains(&value) {
        return Err(InnovationError::InvalidTraits(format!(
            "'{}' must be between {} and {}, got {}",
            name, TRAIT_MIN, TRAIT_MAX, value
        )));
    }
    Ok(())
}

impl TryFrom<Vec<IdeaTrait>> for Traits {
    type Error = InnovationError;

    fn try_from(entries: Vec<IdeaTrait>) -> Result<Self> {
        let mut slots: Vec<Option<u8>> = vec![None; TRAIT_NAMES.len()];

        for entry in entries {
            let pos = TRAIT_NAMES
                .iter()
                .position(|name| *name == entry.name)
                .ok_or_else(|| {
                    InnovationError::InvalidTraits(format!("unknown trait '{}'", entry.name))
                })?;
            if slots[pos].is_some() {
                return Err(InnovationError::InvalidTraits(format!(
                    "duplicate trait '{}'",
                    entry.name
                )));
            }
            check_range(&entry.name, entry.value)?;
            slots[pos] = Some(entry.value);
        }

        let mut traits = Self::default();
        for (entry, slot) in traits.0.iter_mut().zip(slots) {
            entry.value = slot.ok_or_else(|| {
                InnovationError::InvalidTraits(format!("missing trait '{}'", entry.name))
            })?;
        }
        Ok(traits)
    }
}

impl From<Traits> for Vec<IdeaTrait> {
    fn from(traits: Traits) -> Self {
        traits.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Link,
    File,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Link => f.write_str("link"),
            ResourceKind::File => f.write_str("file"),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = InnovationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "link" => Ok(ResourceKind::Link),
            "file" => Ok(ResourceKind::File),
            other => Err(InnovationError::Validation(format!(
                "resource type must be 'link' or 'file', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource {
    pub fn new(kind: ResourceKind, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Everything needed to create an idea; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub rank: i64,
    pub traits: Traits,
    pub resources: Vec<Resource>,
    pub process: Vec<String>,
}

impl IdeaDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            rank: 0,
            traits: Traits::default(),
            resources: Vec::new(),
            process: Vec::new(),
        }
    }

    pub fn with_traits(mut self, traits: Traits) -> Self {
        self.traits = traits;
        self
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.process.push(step.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub rank: i64,
    pub traits: Traits,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub process: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    pub fn from_draft(id: IdeaId, draft: IdeaDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            rank: draft.rank,
            traits: draft.traits,
            resources: draft.resources,
            process: draft.process,
            created_at,
        }
    }

    /// Mean of this idea's trait values.
    pub fn score(&self) -> f64 {
        self.traits.mean()
    }
}
