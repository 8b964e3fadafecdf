use std::fmt;

use chrono::NaiveDate;

use crate::error::InvalidSelection;

/// One row of the keyword table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Thematic label assigned to a title
///
/// Variants are declared in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MusicAndLicensing,
    CareerAndJobs,
    AutomationAndAi,
    InnerAlignment,
    CreativeFlow,
    Other,
}

impl Category {
    /// Categories with keyword rules, in precedence order (`Other` is the fallback)
    pub const RULES: [Category; 5] = [
        Category::MusicAndLicensing,
        Category::CareerAndJobs,
        Category::AutomationAndAi,
        Category::InnerAlignment,
        Category::CreativeFlow,
    ];

    /// Lowercase substrings that select this category
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::MusicAndLicensing => &["music", "song", "isrc"],
            Category::CareerAndJobs => &["job", "resume", "application"],
            Category::AutomationAndAi => &["ai", "script", "automation"],
            Category::InnerAlignment => &["gratitude", "appreciation", "affirmation"],
            Category::CreativeFlow => &["art", "image", "creative"],
            Category::Other => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::MusicAndLicensing => "Music & Licensing",
            Category::CareerAndJobs => "Career & Jobs",
            Category::AutomationAndAi => "Automation & AI",
            Category::InnerAlignment => "Inner Alignment",
            Category::CreativeFlow => "Creative Flow",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Title with its archive index, as stored in a category bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedTitle {
    pub index: usize,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBucket {
    /// Selection key shown to the user: 'a', 'b', ... in display order
    pub key: char,
    pub category: Category,
    /// Archive order
    pub items: Vec<CategorizedTitle>,
}

impl CategoryBucket {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Category buckets sorted by size (largest first)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    pub buckets: Vec<CategoryBucket>,
}

impl CategoryIndex {
    pub fn get(&self, category: Category) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.category == category)
    }

    /// Look up a bucket by its selection key (case-insensitive)
    pub fn by_key(&self, key: &str) -> Result<&CategoryBucket, InvalidSelection> {
        let normalized = key.trim().to_lowercase();
        let mut chars = normalized.chars();
        let found = match (chars.next(), chars.next()) {
            (Some(c), None) => self.buckets.iter().find(|b| b.key == c),
            _ => None,
        };
        found.ok_or_else(|| InvalidSelection::UnknownCategory(key.trim().to_string()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Everything shown on the summary dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveSummary {
    pub total: usize,
    pub generated_on: NaiveDate,
    pub keywords: Vec<KeywordCount>,
    pub categories: CategoryIndex,
    pub repetitions: Vec<String>,
    pub rediscover: Vec<String>,
}
