use indexmap::IndexMap;

/// Titles that occur more than once (exact, case-sensitive match)
///
/// Each duplicated title is returned once, in first-seen order.
pub fn detect_repetition<S: AsRef<str>>(titles: &[S]) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for title in titles {
        *counts.entry(title.as_ref()).or_insert(0) += 1;
    }

    counts.into_iter().filter(|(_, count)| *count > 1).map(|(title, _)| title.to_string()).collect()
}
