use indexmap::IndexSet;
use rand::Rng;
use rand::seq::index;

/// How many titles the rediscovery panel shows
pub const REDISCOVERY_SAMPLE_SIZE: usize = 3;

/// Pick up to [`REDISCOVERY_SAMPLE_SIZE`] distinct titles at random
///
/// Sampling is without replacement over the distinct titles, so the result
/// never repeats a title even when the archive does. The random source is
/// injected so callers (and tests) control determinism.
pub fn suggest_rediscovery<S, R>(titles: &[S], rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng,
{
    let distinct: IndexSet<&str> = titles.iter().map(|t| t.as_ref()).collect();
    let amount = REDISCOVERY_SAMPLE_SIZE.min(distinct.len());

    index::sample(rng, distinct.len(), amount)
        .into_iter()
        .filter_map(|i| distinct.get_index(i))
        .map(|title| (*title).to_string())
        .collect()
}

/// Uniformly random archive index, or `None` for an empty archive
pub fn random_index<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    (len > 0).then(|| rng.gen_range(0..len))
}
