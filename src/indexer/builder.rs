//! Summary builder: bundles every derived view shown on the dashboard.

use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::indexer::categories::categorize_titles;
use crate::indexer::keywords::keyword_analysis;
use crate::indexer::repetition::detect_repetition;
use crate::indexer::sampling::suggest_rediscovery;
use crate::models::ArchiveSummary;

/// Number of keywords on the dashboard unless overridden
pub const DEFAULT_KEYWORD_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    pub keyword_count: usize,
    /// Date stamped on the summary ("as of ...")
    pub generated_on: NaiveDate,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self { keyword_count: DEFAULT_KEYWORD_COUNT, generated_on: Local::now().date_naive() }
    }
}

/// Build the dashboard summary over archive titles
///
/// Everything except the rediscovery sample is deterministic; the sample
/// draws from `rng`.
pub fn build_summary<S, R>(titles: &[S], options: &SummaryOptions, rng: &mut R) -> ArchiveSummary
where
    S: AsRef<str>,
    R: Rng,
{
    let summary = ArchiveSummary {
        total: titles.len(),
        generated_on: options.generated_on,
        keywords: keyword_analysis(titles, options.keyword_count),
        categories: categorize_titles(titles),
        repetitions: detect_repetition(titles),
        rediscover: suggest_rediscovery(titles, rng),
    };

    debug!(
        total = summary.total,
        categories = summary.categories.len(),
        repetitions = summary.repetitions.len(),
        "built archive summary"
    );

    summary
}
