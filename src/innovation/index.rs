//! # Display Positions
//!
//! Idea ids are opaque and long, so clients refer to ideas by their 1-based
//! position in the collection (`inno up 2`). Positions follow insertion
//! order, the same order `list` shows, so they are stable until an earlier
//! idea is deleted.
//!
//! An [`IdeaSelector`] is either a position or a raw id. Numeric input is
//! read as a position first; if no idea sits at that position it is tried as
//! an id, which keeps old time-based numeric ids addressable.

use crate::model::{Idea, IdeaId};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaSelector {
    Position(usize),
    Id(IdeaId),
}

impl fmt::Display for IdeaSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdeaSelector::Position(n) => write!(f, "{}", n),
            IdeaSelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

impl FromStr for IdeaSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty idea selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            return Ok(IdeaSelector::Position(n));
        }
        Ok(IdeaSelector::Id(IdeaId::from(s)))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayIdea {
    pub position: usize,
    pub idea: Idea,
}

/// Pair each idea with its 1-based display position.
pub fn index_ideas(ideas: &[Idea]) -> Vec<DisplayIdea> {
    ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| DisplayIdea {
            position: i + 1,
            idea: idea.clone(),
        })
        .collect()
}

/// Find the display entry a selector points at.
pub fn find<'a>(indexed: &'a [DisplayIdea], selector: &IdeaSelector) -> Option<&'a DisplayIdea> {
    match selector {
        IdeaSelector::Position(n) => indexed
            .iter()
            .find(|di| di.position == *n)
            .or_else(|| {
                let as_id = n.to_string();
                indexed.iter().find(|di| di.idea.id.as_str() == as_id)
            }),
        IdeaSelector::Id(id) => indexed.iter().find(|di| &di.idea.id == id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdeaDraft;
    use chrono::Utc;

    fn ideas(ids: &[&str]) -> Vec<Idea> {
        ids.iter()
            .map(|id| Idea::from_draft(IdeaId::from(*id), IdeaDraft::new(*id, ""), Utc::now()))
            .collect()
    }

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!("3".parse::<IdeaSelector>(), Ok(IdeaSelector::Position(3)));
        assert_eq!(
            "abc-123".parse::<IdeaSelector>(),
            Ok(IdeaSelector::Id(IdeaId::from("abc-123")))
        );
        assert!("  ".parse::<IdeaSelector>().is_err());
    }

    #[test]
    fn positions_follow_insertion_order() {
        let indexed = index_ideas(&ideas(&["a", "b", "c"]));
        let found = find(&indexed, &IdeaSelector::Position(2)).unwrap();
        assert_eq!(found.idea.id.as_str(), "b");
        assert!(find(&indexed, &IdeaSelector::Position(0)).is_none());
    }

    #[test]
    fn numeric_ids_resolve_when_out_of_position_range() {
        let indexed = index_ideas(&ideas(&["90210", "x"]));
        let found = find(&indexed, &IdeaSelector::Position(90210)).unwrap();
        assert_eq!(found.position, 1);
    }

    #[test]
    fn ids_resolve_directly() {
        let indexed = index_ideas(&ideas(&["a", "b"]));
        let found = find(&indexed, &IdeaSelector::Id(IdeaId::from("b"))).unwrap();
        assert_eq!(found.position, 2);
    }
}
