use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Business listing reduced to the fields the ranking engine reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub featured: bool,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: Vec::new(),
            rating: None,
            featured: false,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Rating used for ordering; missing or non-finite ratings count as 0
    pub fn sort_rating(&self) -> f64 {
        match self.rating {
            Some(r) if r.is_finite() => r,
            _ => 0.0,
        }
    }
}

/// Listing as stored by the directory, before normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specialties: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "isFeatured", default)]
    pub is_featured: Option<bool>,
    #[serde(rename = "isSponsored", default)]
    pub is_sponsored: Option<bool>,
}

impl From<ListingRecord> for Candidate {
    fn from(record: ListingRecord) -> Self {
        let featured = record.is_featured.unwrap_or(false) || record.is_sponsored.unwrap_or(false);

        let mut tags: Vec<String> = Vec::new();
        let sources = record
            .tags
            .into_iter()
            .chain(record.categories)
            .chain(record.specialties)
            .chain(record.amenities);

        for raw in sources {
            let tag = raw.trim();
            if tag.is_empty() {
                continue;
            }
            // First spelling wins
            let folded = tag.to_lowercase();
            if !tags.iter().any(|t| t.to_lowercase() == folded) {
                tags.push(tag.to_string());
            }
        }

        Candidate {
            id: record.id,
            name: record.name,
            tags,
            rating: record.rating,
            featured,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Directory categories with a dedicated ranking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    HealthWellness,
    RealEstate,
    RestaurantsCafes,
    HomeServices,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::HealthWellness,
        Category::RealEstate,
        Category::RestaurantsCafes,
        Category::HomeServices,
    ];

    /// Parse a category id; unknown ids yield `None`
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(id))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HealthWellness => "health-wellness",
            Category::RealEstate => "real-estate",
            Category::RestaurantsCafes => "restaurants-cafes",
            Category::HomeServices => "home-services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preference answers keyed by question id
///
/// Multi-select questions arrive as several entries sharing the field id as a
/// prefix (`goal`, `goal.2`, `goal[3]`); each entry is its own criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Non-empty, trimmed values submitted for `field`
    pub fn values_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(key, _)| key_belongs_to(key, field))
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Whether `field` carries at least one non-empty value
    pub fn has(&self, field: &str) -> bool {
        self.values_for(field).next().is_some()
    }

    /// Every non-empty, trimmed value regardless of key
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0
            .values()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[inline]
fn key_belongs_to(key: &str, field: &str) -> bool {
    match key.strip_prefix(field) {
        Some("") => true,
        Some(rest) => rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}
