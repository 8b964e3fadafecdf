use indexmap::IndexMap;

use crate::models::KeywordCount;

/// Most frequent lowercase whitespace tokens across all titles
///
/// Returns at most `top_n` entries, highest count first. Ties keep the order
/// in which tokens were first seen.
pub fn keyword_analysis<S: AsRef<str>>(titles: &[S], top_n: usize) -> Vec<KeywordCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for title in titles {
        for word in title.as_ref().to_lowercase().split_whitespace() {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let mut keywords: Vec<KeywordCount> =
        counts.into_iter().map(|(word, count)| KeywordCount { word, count }).collect();
    // Stable sort keeps first-seen order among equal counts
    keywords.sort_by(|a, b| b.count.cmp(&a.count));
    keywords.truncate(top_n);
    keywords
}
