//! Attribution Tracking
//!
//! UTM and Google click id parameters are captured once from the landing
//! URL and passed through unchanged on submission.

use serde::{Deserialize, Serialize};

use crate::query;

/// Recognised attribution keys, in the order they are written back out
pub const TRACKING_KEYS: [&str; 7] = [
    "utm",
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
];

/// Attribution parameters present in the query string at load
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingParams {
    params: Vec<(String, String)>,
}

impl TrackingParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture tracking parameters from a `location.search` string
    pub fn from_query(search: &str) -> Self {
        let mut tracking = Self::new();
        for (key, value) in query::parse(search) {
            tracking.insert_first(&key, value);
        }
        tracking.params.sort_by_key(|(k, _)| key_rank(k));
        tracking
    }

    /// Value of a captured key; `Some("")` when present but empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Value for a hidden input: empty when the key was absent
    pub fn value_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Captured pairs in canonical key order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert_first(&mut self, key: &str, value: String) {
        if !TRACKING_KEYS.contains(&key) || self.contains(key) {
            return;
        }
        self.params.push((key.to_string(), value));
    }
}

fn key_rank(key: &str) -> usize {
    TRACKING_KEYS
        .iter()
        .position(|k| *k == key)
        .unwrap_or(TRACKING_KEYS.len())
}
