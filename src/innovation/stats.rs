//! Aggregate statistics, derived from a collection snapshot on every read.

use crate::model::{Idea, TRAIT_NAMES};

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub count: usize,
    /// Mean of per-idea trait means, rounded to two decimals. 0 when empty.
    pub average_score: f64,
    /// Highest rank, or `None` for an empty collection.
    pub top_rank: Option<i64>,
}

impl Stats {
    pub fn compute(ideas: &[Idea]) -> Self {
        Self {
            count: ideas.len(),
            average_score: average_score(ideas),
            top_rank: top_rank(ideas),
        }
    }

    pub fn average_score_display(&self) -> String {
        format!("{:.2}", self.average_score)
    }

    pub fn top_rank_display(&self) -> String {
        self.top_rank
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

pub fn average_score(ideas: &[Idea]) -> f64 {
    if ideas.is_empty() {
        return 0.0;
    }
    let total: f64 = ideas.iter().map(Idea::score).sum();
    round2(total / ideas.len() as f64)
}

pub fn top_rank(ideas: &[Idea]) -> Option<i64> {
    ideas.iter().map(|idea| idea.rank).max()
}

/// Mean value of each trait across all ideas, in canonical order.
/// Empty when there are no ideas.
pub fn trait_averages(ideas: &[Idea]) -> Vec<(&'static str, f64)> {
    if ideas.is_empty() {
        return Vec::new();
    }
    TRAIT_NAMES
        .iter()
        .map(|name| {
            let total: u32 = ideas
                .iter()
                .filter_map(|idea| idea.traits.get(name))
                .map(u32::from)
                .sum();
            (*name, round2(f64::from(total) / ideas.len() as f64))
        })
        .collect()
}

/// The first `limit` ideas in collection order.
pub fn recent(ideas: &[Idea], limit: usize) -> &[Idea] {
    &ideas[..ideas.len().min(limit)]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
