use std::collections::HashMap;

use crate::models::{CategorizedTitle, Category, CategoryBucket, CategoryIndex};

/// Classify one title: first rule with a matching keyword wins
///
/// Matching is a case-insensitive substring test on the whole title, so
/// "email" lands in Automation & AI through "ai". A title matching several
/// rules only keeps the highest-precedence one.
pub fn classify(title: &str) -> Category {
    let lowered = title.to_lowercase();
    Category::RULES
        .into_iter()
        .find(|category| category.keywords().iter().any(|keyword| lowered.contains(keyword)))
        .unwrap_or(Category::Other)
}

/// Bucket every title into exactly one category
///
/// Buckets are ordered by size (largest first); equal sizes keep the order
/// in which their categories first appeared while scanning the titles. Only
/// categories with at least one title are present.
pub fn categorize_titles<S: AsRef<str>>(titles: &[S]) -> CategoryIndex {
    let mut buckets: Vec<(Category, Vec<CategorizedTitle>)> = Vec::new();
    let mut positions: HashMap<Category, usize> = HashMap::new();

    for (index, title) in titles.iter().enumerate() {
        let title = title.as_ref();
        let category = classify(title);
        let position = *positions.entry(category).or_insert_with(|| {
            buckets.push((category, Vec::new()));
            buckets.len() - 1
        });
        buckets[position].1.push(CategorizedTitle { index, title: title.to_string() });
    }

    buckets.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    let buckets = buckets
        .into_iter()
        .zip('a'..='z')
        .map(|((category, items), key)| CategoryBucket { key, category, items })
        .collect();

    CategoryIndex { buckets }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify("Song for a job interview"), Category::MusicAndLicensing);
        assert_eq!(classify("Resume script"), Category::CareerAndJobs);
        assert_eq!(classify("Automation of gratitude"), Category::AutomationAndAi);
        assert_eq!(classify("Morning affirmation art"), Category::InnerAlignment);
        assert_eq!(classify("Image prompts"), Category::CreativeFlow);
        assert_eq!(classify("Grocery list"), Category::Other);
    }

    #[test]
    fn test_classify_is_substring_and_case_insensitive() {
        assert_eq!(classify("ISRC codes"), Category::MusicAndLicensing);
        assert_eq!(classify("Email draft"), Category::AutomationAndAi);
        assert_eq!(classify("Smart start"), Category::CreativeFlow);
    }

    #[test]
    fn test_categorize_scenario() {
        let titles = ["Music licensing deal", "Resume update", "Random note"];
        let index = categorize_titles(&titles);

        assert_eq!(index.len(), 3);
        let music = index.get(Category::MusicAndLicensing).unwrap();
        assert_eq!(
            music.items,
            vec![CategorizedTitle { index: 0, title: "Music licensing deal".into() }]
        );
        let career = index.get(Category::CareerAndJobs).unwrap();
        assert_eq!(career.items, vec![CategorizedTitle { index: 1, title: "Resume update".into() }]);
        let other = index.get(Category::Other).unwrap();
        assert_eq!(other.items, vec![CategorizedTitle { index: 2, title: "Random note".into() }]);
        assert!(index.get(Category::CreativeFlow).is_none());
    }

    #[test]
    fn test_buckets_sorted_by_size_then_first_seen() {
        let titles = ["Random", "Job hunt", "Song", "Job offer", "Another song", "Misc"];
        let index = categorize_titles(&titles);

        let order: Vec<Category> = index.buckets.iter().map(|b| b.category).collect();
        // Other (2), Career (2), Music (2): all tied, so first-seen order decides
        assert_eq!(order, vec![Category::Other, Category::CareerAndJobs, Category::MusicAndLicensing]);

        let keys: Vec<char> = index.buckets.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_larger_bucket_comes_first() {
        let titles = ["Note", "Song", "Song two", "Song three"];
        let index = categorize_titles(&titles);
        assert_eq!(index.buckets[0].category, Category::MusicAndLicensing);
        assert_eq!(index.buckets[0].len(), 3);
        assert_eq!(index.buckets[1].category, Category::Other);
    }

    #[test]
    fn test_every_title_in_exactly_one_bucket() {
        let titles = [
            "Music", "job", "AI tools", "gratitude", "art", "nothing", "painting", "said hi",
            "resume song", "",
        ];
        let index = categorize_titles(&titles);

        let mut seen = HashSet::new();
        let mut total = 0;
        for bucket in &index.buckets {
            for item in &bucket.items {
                assert!(seen.insert(item.index), "index {} appears twice", item.index);
                assert_eq!(item.title, titles[item.index]);
                total += 1;
            }
        }
        assert_eq!(total, titles.len());
    }

    #[test]
    fn test_items_keep_archive_order() {
        let titles = ["Song 1", "Other", "Song 2", "Song 3"];
        let index = categorize_titles(&titles);
        let music = index.get(Category::MusicAndLicensing).unwrap();
        let indices: Vec<usize> = music.items.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_by_key() {
        let index = categorize_titles(&["Song", "Note", "Note 2"]);
        assert_eq!(index.by_key("a").unwrap().category, Category::Other);
        assert_eq!(index.by_key(" B ").unwrap().category, Category::MusicAndLicensing);
        assert!(index.by_key("c").is_err());
        assert!(index.by_key("ab").is_err());
        assert!(index.by_key("").is_err());
    }

    #[test]
    fn test_empty_titles() {
        let titles: Vec<String> = Vec::new();
        assert!(categorize_titles(&titles).is_empty());
    }
}
