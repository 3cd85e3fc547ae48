use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use crate::models::Category;

/// Errors that can occur while loading synonym overrides
#[derive(Debug, Error)]
pub enum SynonymError {
    #[error("Failed to read synonym file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid synonym file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Canonical selection value -> lowercase keyword variants
///
/// Every entry contains its canonical value as the first variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the variants of `canonical`
    pub fn insert<I, S>(&mut self, canonical: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = canonical.trim().to_lowercase();
        if canonical.is_empty() {
            return;
        }

        let mut variants = vec![canonical.clone()];
        for synonym in synonyms {
            let synonym = synonym.as_ref().trim().to_lowercase();
            if !synonym.is_empty() && !variants.contains(&synonym) {
                variants.push(synonym);
            }
        }

        self.entries.insert(canonical, variants);
    }

    /// Variants of a requested value, if it is a canonical entry
    pub fn lookup(&self, value: &str) -> Option<&[String]> {
        self.entries
            .get(value.trim().to_lowercase().as_str())
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_static(data: &[(&str, &[&str])]) -> Self {
        let mut table = Self::new();
        for (canonical, synonyms) in data {
            table.insert(canonical, synonyms.iter());
        }
        table
    }
}

/// Immutable arena of synonym tables indexed by (category, field)
#[derive(Debug, Clone)]
pub struct SynonymCatalog {
    tables: Vec<Arc<SynonymTable>>,
    index: HashMap<(String, String), usize>,
    empty: Arc<SynonymTable>,
}

/// On-disk override format: category -> field -> canonical -> synonyms
type OverrideFile = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<String>>>>;

impl SynonymCatalog {
    /// Catalog without any table
    pub fn empty() -> Self {
        Self {
            tables: Vec::new(),
            index: HashMap::new(),
            empty: Arc::new(SynonymTable::new()),
        }
    }

    /// Catalog seeded with the built-in directory vocabulary
    pub fn with_defaults() -> Self {
        let mut catalog = Self::empty();
        catalog.put(Category::HealthWellness.as_str(), "type", SynonymTable::from_static(HEALTH_TYPE));
        catalog.put(Category::HealthWellness.as_str(), "goal", SynonymTable::from_static(HEALTH_GOAL));
        catalog.put(Category::HomeServices.as_str(), "service", SynonymTable::from_static(HOME_SERVICE));
        catalog.put(Category::HomeServices.as_str(), "project", SynonymTable::from_static(HOME_PROJECT));
        catalog.put(Category::RestaurantsCafes.as_str(), "cuisine", SynonymTable::from_static(CUISINE));
        catalog
    }

    /// Built-in vocabulary with overrides from a TOML file applied on top
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SynonymError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut catalog = Self::with_defaults();
        catalog.apply_toml(&raw)?;
        tracing::info!(
            "Loaded synonym overrides from {} ({} tables)",
            path.as_ref().display(),
            catalog.tables.len()
        );
        Ok(catalog)
    }

    /// Merge a TOML override document into the catalog
    ///
    /// Canonical entries in the document replace existing ones; unknown
    /// categories and fields create new tables.
    pub fn apply_toml(&mut self, raw: &str) -> Result<(), SynonymError> {
        let document: OverrideFile = toml::from_str(raw)?;

        for (category, fields) in document {
            if Category::parse(&category).is_none() {
                tracing::warn!("Synonym overrides for unknown category '{}' will not be used", category);
            }
            for (field, entries) in fields {
                let key = (category.trim().to_lowercase(), field.trim().to_string());
                let slot = match self.index.get(&key) {
                    Some(&slot) => slot,
                    None => {
                        self.tables.push(Arc::new(SynonymTable::new()));
                        let slot = self.tables.len() - 1;
                        self.index.insert(key, slot);
                        slot
                    }
                };

                let table = Arc::make_mut(&mut self.tables[slot]);
                for (canonical, synonyms) in entries {
                    table.insert(&canonical, synonyms);
                }
            }
        }

        Ok(())
    }

    /// Table for a category field; an empty table when none is registered
    pub fn table(&self, category: &str, field: &str) -> Arc<SynonymTable> {
        self.index
            .get(&(category.to_string(), field.to_string()))
            .map(|&slot| Arc::clone(&self.tables[slot]))
            .unwrap_or_else(|| Arc::clone(&self.empty))
    }

    fn put(&mut self, category: &str, field: &str, table: SynonymTable) {
        self.tables.push(Arc::new(table));
        self.index
            .insert((category.to_string(), field.to_string()), self.tables.len() - 1);
    }
}

impl Default for SynonymCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

const HEALTH_TYPE: &[(&str, &[&str])] = &[
    ("chiropractic", &["chiropractor", "chiro", "spine", "spinal", "adjustment"]),
    ("massage", &["massage therapy", "massage therapist", "deep tissue", "bodywork", "sports massage"]),
    ("yoga", &["yoga studio", "hot yoga", "vinyasa", "pilates", "meditation"]),
    ("fitness", &["gym", "personal trainer", "personal training", "crossfit", "bootcamp", "strength"]),
    ("nutrition", &["nutritionist", "dietitian", "diet", "meal planning", "weight management"]),
    ("mental-health", &["therapist", "therapy", "counseling", "counselor", "psychologist", "mental health"]),
    ("physical-therapy", &["physical therapist", "physiotherapy", "physio", "rehab", "rehabilitation"]),
    ("acupuncture", &["acupuncturist", "chinese medicine", "tcm", "cupping"]),
    ("dental", &["dentist", "dental care", "orthodontist", "teeth", "hygienist"]),
    ("spa", &["day spa", "med spa", "facial", "skincare", "esthetician", "wellness center"]),
];

const HEALTH_GOAL: &[(&str, &[&str])] = &[
    ("pain-relief", &["pain", "back pain", "neck pain", "chronic pain", "injury"]),
    ("stress-relief", &["stress", "relaxation", "anxiety", "calm", "mindfulness"]),
    ("weight-loss", &["weight", "fat loss", "diet", "weight management", "metabolism"]),
    ("flexibility", &["mobility", "stretching", "range of motion", "posture"]),
    ("recovery", &["rehab", "rehabilitation", "sports injury", "post-surgery", "injury"]),
    ("general-wellness", &["wellness", "holistic", "preventive", "self-care", "overall health"]),
    ("strength", &["muscle", "strength training", "toning", "conditioning"]),
];

const HOME_SERVICE: &[(&str, &[&str])] = &[
    ("plumbing", &["plumber", "pipes", "drain", "water heater", "leak"]),
    ("electrical", &["electrician", "wiring", "lighting", "panel", "outlet"]),
    ("hvac", &["heating", "cooling", "air conditioning", "furnace", "ac repair", "heat pump"]),
    ("roofing", &["roofer", "roof repair", "shingles", "gutters"]),
    ("landscaping", &["landscaper", "lawn care", "lawn", "gardening", "yard", "tree service"]),
    ("cleaning", &["house cleaning", "maid", "janitorial", "carpet cleaning", "cleaner"]),
    ("painting", &["painter", "interior painting", "exterior painting", "drywall"]),
    ("handyman", &["general repair", "odd jobs", "home repair", "fix-it"]),
    ("pest-control", &["exterminator", "pest", "termite", "rodent", "bed bugs"]),
    ("remodeling", &["contractor", "renovation", "kitchen remodel", "bathroom remodel", "general contractor"]),
];

const HOME_PROJECT: &[(&str, &[&str])] = &[
    ("repair", &["fix", "broken", "service call", "troubleshooting"]),
    ("installation", &["install", "new installation", "replacement", "upgrade"]),
    ("maintenance", &["tune-up", "inspection", "seasonal", "routine service"]),
    ("renovation", &["remodel", "remodeling", "addition", "makeover"]),
    ("emergency", &["24/7", "24 hour", "urgent", "same day", "emergency service"]),
];

const CUISINE: &[(&str, &[&str])] = &[
    ("mexican", &["taco", "tacos", "burrito", "tex-mex", "taqueria", "cantina", "latin"]),
    ("italian", &["pizza", "pasta", "trattoria", "pizzeria", "osteria", "gelato"]),
    ("chinese", &["dim sum", "szechuan", "sichuan", "cantonese", "dumpling", "noodle"]),
    ("japanese", &["sushi", "ramen", "izakaya", "teriyaki", "hibachi"]),
    ("indian", &["curry", "tandoori", "masala", "biryani", "south asian"]),
    ("thai", &["pad thai", "thai curry", "southeast asian"]),
    ("american", &["burger", "burgers", "diner", "grill", "steakhouse", "comfort food"]),
    ("mediterranean", &["greek", "falafel", "gyro", "middle eastern", "lebanese", "hummus"]),
    ("french", &["bistro", "brasserie", "creperie", "patisserie"]),
    ("vegetarian", &["vegan", "plant-based", "plant based", "veggie"]),
    ("cafe", &["coffee", "coffee shop", "espresso", "tea", "roastery"]),
    ("bakery", &["pastry", "bread", "donut", "cupcake", "dessert"]),
    ("bbq", &["barbecue", "smokehouse", "brisket", "ribs"]),
    ("seafood", &["fish", "oyster", "oyster bar", "crab", "lobster", "poke"]),
];
