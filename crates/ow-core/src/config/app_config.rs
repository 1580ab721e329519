use std::collections::BTreeMap;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Log verbosity (may be empty - this is a fact, not an error)
    pub verbosity: String,

    /// Whether the platform delivers multi-item payloads; `None` when unset
    pub multi_item_payloads: Option<bool>,

    /// Pending share queue capacity; `None` when unset
    pub queue_capacity: Option<i64>,

    /// Extra action translation rows, raw action → tag
    pub extra_actions: BTreeMap<String, String>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    /// Non-string rows under `[actions.extra]` are skipped.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            verbosity: toml_value
                .get("general")
                .and_then(|g| g.get("verbosity"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            multi_item_payloads: toml_value
                .get("general")
                .and_then(|g| g.get("multi_item_payloads"))
                .and_then(|v| v.as_bool()),
            queue_capacity: toml_value
                .get("queue")
                .and_then(|q| q.get("capacity"))
                .and_then(|v| v.as_integer()),
            extra_actions: toml_value
                .get("actions")
                .and_then(|a| a.get("extra"))
                .and_then(|e| e.as_table())
                .map(|table| {
                    table
                        .iter()
                        .filter_map(|(raw, tag)| {
                            tag.as_str().map(|tag| (raw.clone(), tag.to_string()))
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Create empty AppConfig (all empty/unset values)
    pub fn empty() -> Self {
        Self {
            verbosity: String::new(),
            multi_item_payloads: None,
            queue_capacity: None,
            extra_actions: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [general]
            verbosity = "debug"
            multi_item_payloads = false

            [queue]
            capacity = 8

            [actions.extra]
            "com.example.SHARE_TEXT" = "SEND"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.verbosity, "debug");
        assert_eq!(config.multi_item_payloads, Some(false));
        assert_eq!(config.queue_capacity, Some(8));
        assert_eq!(
            config.extra_actions.get("com.example.SHARE_TEXT"),
            Some(&"SEND".to_string())
        );
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_str = r#"
            [general]
            # verbosity is missing
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_skips_non_string_action_rows() {
        let toml_str = r#"
            [actions.extra]
            "com.example.A" = "SEND"
            "com.example.B" = 3
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.extra_actions.len(), 1);
    }

    #[test]
    fn test_from_toml_keeps_invalid_verbosity_as_fact() {
        let toml_value: Value = toml::from_str("[general]\nverbosity = \"loud\"").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.verbosity, "loud");
    }
}
