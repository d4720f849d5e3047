//! Classifier configuration.
//!
//! Label names, the domain allow-list, display descriptions, and the
//! decision thresholds are injected at construction instead of being
//! hardcoded in the decision path. The default configuration covers the
//! Turkish automotive support domain.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::Result;

lazy_static! {
    static ref DEFAULT_DESCRIPTIONS: Vec<(&'static str, &'static str)> = vec![
        ("motor", "Motor Sorunları"),
        ("fren", "Fren Sistemi"),
        ("elektrik", "Elektrik ve Akü"),
        ("klima", "Klima ve Isıtma"),
        ("sanziman", "Şanzıman ve Vites"),
        ("lastik", "Lastik ve Jant"),
        ("suspansiyon", "Süspansiyon ve Direksiyon"),
        ("egzoz", "Egzoz ve Emisyon"),
        ("bakim", "Bakım ve Genel"),
        ("selamlama", "Selamlama"),
        ("kapsam_disi", "Kapsam Dışı"),
    ];
}

/// Immutable configuration for a [`VectorSpaceClassifier`].
///
/// [`VectorSpaceClassifier`]: crate::classifier::vsm::VectorSpaceClassifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Label returned for null-signal or very weak input.
    pub greeting_label: String,
    /// Label returned when no trained intents exist.
    pub out_of_scope_label: String,
    /// Labels counted as in-domain by [`is_in_domain`].
    ///
    /// [`is_in_domain`]: crate::classifier::vsm::VectorSpaceClassifier::is_in_domain
    pub domain_labels: BTreeSet<String>,
    /// Display description per label.
    pub descriptions: BTreeMap<String, String>,
    /// Description returned for labels without an entry.
    pub unknown_description: String,
    /// Best scores below this value fall back to the greeting label.
    pub greeting_threshold: f64,
    /// Scores must exceed this stricter value for the in-domain check.
    ///
    /// Deliberately independent of `greeting_threshold`; the gap between
    /// the two creates a grey zone where a real category can be predicted
    /// while the in-domain check still reports false.
    pub domain_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let descriptions: BTreeMap<String, String> = DEFAULT_DESCRIPTIONS
            .iter()
            .map(|(label, desc)| (label.to_string(), desc.to_string()))
            .collect();

        let domain_labels: BTreeSet<String> = [
            "motor",
            "fren",
            "elektrik",
            "klima",
            "sanziman",
            "lastik",
            "suspansiyon",
            "egzoz",
            "bakim",
        ]
        .iter()
        .map(|label| label.to_string())
        .collect();

        ClassifierConfig {
            greeting_label: "selamlama".to_string(),
            out_of_scope_label: "kapsam_disi".to_string(),
            domain_labels,
            descriptions,
            unknown_description: "Bilinmeyen".to_string(),
            greeting_threshold: 0.1,
            domain_threshold: 0.15,
        }
    }
}

impl ClassifierConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the description for a label, or the unknown marker.
    pub fn description(&self, label: &str) -> &str {
        self.descriptions
            .get(label)
            .map(String::as_str)
            .unwrap_or(&self.unknown_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();

        assert_eq!(config.greeting_label, "selamlama");
        assert_eq!(config.out_of_scope_label, "kapsam_disi");
        assert_eq!(config.domain_labels.len(), 9);
        assert!(config.domain_labels.contains("motor"));
        assert!(!config.domain_labels.contains("selamlama"));
        assert!(config.greeting_threshold < config.domain_threshold);
    }

    #[test]
    fn test_description_lookup() {
        let config = ClassifierConfig::default();
        assert_eq!(config.description("fren"), "Fren Sistemi");
        assert_eq!(config.description("uzay"), "Bilinmeyen");
    }

    #[test]
    fn test_json_round_trip() {
        let config = ClassifierConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.greeting_label, config.greeting_label);
        assert_eq!(parsed.domain_labels, config.domain_labels);
    }
}
