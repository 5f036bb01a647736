use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_ideas, DisplayIdea};
use crate::stats::{self, Stats};
use crate::store::idea_store::IdeaStore;
use crate::store::BlobStore;

/// Everything the dashboard view shows.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub stats: Stats,
    pub trait_averages: Vec<(&'static str, f64)>,
    pub recent: Vec<DisplayIdea>,
}

pub fn run<B: BlobStore>(store: &IdeaStore<B>, recent_limit: usize) -> Result<CmdResult> {
    let ideas = store.list();
    let report = StatsReport {
        stats: Stats::compute(ideas),
        trait_averages: stats::trait_averages(ideas),
        recent: index_ideas(stats::recent(ideas, recent_limit)),
    };
    Ok(CmdResult::default().with_stats(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdeaDraft;
    use crate::store::idea_store::DEFAULT_KEY;
    use crate::store::memory::MemBlobStore;

    #[test]
    fn empty_store_report() {
        let store = IdeaStore::open(MemBlobStore::new(), DEFAULT_KEY).unwrap();
        let report = run(&store, 6).unwrap().stats.unwrap();

        assert_eq!(report.stats.count, 0);
        assert_eq!(report.stats.average_score_display(), "0.00");
        assert_eq!(report.stats.top_rank_display(), "N/A");
        assert!(report.recent.is_empty());
    }

    #[test]
    fn recent_respects_limit() {
        let mut store = IdeaStore::open(MemBlobStore::new(), DEFAULT_KEY).unwrap();
        for i in 0..4 {
            store.create(IdeaDraft::new(format!("I{}", i), "")).unwrap();
        }
        let id = store.list()[3].id.clone();
        store.adjust_rank(&id, 7).unwrap();

        let report = run(&store, 2).unwrap().stats.unwrap();
        assert_eq!(report.stats.count, 4);
        assert_eq!(report.stats.top_rank, Some(7));
        assert_eq!(report.stats.average_score_display(), "5.00");
        let recent: Vec<_> = report.recent.iter().map(|di| di.position).collect();
        assert_eq!(recent, vec![1, 2]);
    }
}
