//! Model Name Rules
//!
//! Exclusion and alias matching share one case policy: the whole model value
//! is lowercased and compared for exact equality. No trimming, no substring
//! or pattern matching.

use crate::config::CleaningConfig;
use std::collections::HashMap;

/// Model exclusion and canonicalization rules
#[derive(Debug, Clone)]
pub struct ModelRules {
    /// Lowercased excluded model names
    excluded: Vec<String>,
    /// Lowercased alias to canonical model name
    aliases: HashMap<String, String>,
}

impl ModelRules {
    /// Build rules from the cleaning configuration
    pub fn new(config: &CleaningConfig) -> Self {
        Self {
            excluded: config
                .excluded_models
                .iter()
                .map(|m| m.to_lowercase())
                .collect(),
            aliases: config
                .model_aliases
                .iter()
                .map(|(alias, canonical)| (alias.to_lowercase(), canonical.clone()))
                .collect(),
        }
    }

    /// Whether listings of this model are dropped
    pub fn is_excluded(&self, model: &str) -> bool {
        let model = model.to_lowercase();
        self.excluded.iter().any(|m| *m == model)
    }

    /// Canonical name for a model, if it is a known alias
    pub fn canonical(&self, model: &str) -> Option<&str> {
        self.aliases.get(&model.to_lowercase()).map(String::as_str)
    }

    /// Normalize a model name, leaving unknown names unchanged
    pub fn normalize(&self, model: &str) -> String {
        self.canonical(model).unwrap_or(model).to_string()
    }
}

impl Default for ModelRules {
    fn default() -> Self {
        Self::new(&CleaningConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_silverado_excluded_any_case() {
        let rules = ModelRules::default();
        assert!(rules.is_excluded("chevrolet silverado"));
        assert!(rules.is_excluded("Chevrolet Silverado"));
        assert!(rules.is_excluded("CHEVROLET SILVERADO"));
        assert!(!rules.is_excluded("chevrolet silverado 1500"));
        assert!(!rules.is_excluded("ford f-150"));
    }

    #[test]
    fn test_f_series_normalized() {
        let rules = ModelRules::default();
        assert_eq!(rules.normalize("ford f150"), "ford f-150");
        assert_eq!(rules.normalize("ford f250"), "ford f-250");
        assert_eq!(rules.normalize("ford f350"), "ford f-350");
    }

    #[test]
    fn test_mixed_case_alias() {
        let rules = ModelRules::default();
        assert_eq!(rules.normalize("Ford F150"), "ford f-150");
    }

    #[test]
    fn test_exact_match_only() {
        let rules = ModelRules::default();
        assert_eq!(rules.normalize("ford f150 supercrew"), "ford f150 supercrew");
        assert_eq!(rules.normalize(" ford f150"), " ford f150");
        assert_eq!(rules.normalize("ford f-150"), "ford f-150");
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(model in prop_oneof![
            Just("ford f150".to_string()),
            Just("Ford F250".to_string()),
            Just("ford f-350".to_string()),
            "[a-z ]{0,20}",
        ]) {
            let rules = ModelRules::default();
            let once = rules.normalize(&model);
            prop_assert_eq!(rules.normalize(&once), once);
        }
    }
}
