use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct VocabConfig {
    successors: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum VocabConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[successors] table is empty")]
    Empty,
    #[error("key must be lowercase ASCII letters: {0:?}")]
    InvalidKey(String),
    #[error("value for key {key} must be lowercase ASCII letters: {value:?}")]
    InvalidValue { key: String, value: String },
}

fn is_number_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Parse TOML text into a sorted `BTreeMap<word, successor>`.
pub fn parse_vocab_toml(toml_str: &str) -> Result<BTreeMap<String, String>, VocabConfigError> {
    let config: VocabConfig =
        toml::from_str(toml_str).map_err(|e| VocabConfigError::Parse(e.to_string()))?;

    if config.successors.is_empty() {
        return Err(VocabConfigError::Empty);
    }

    for (key, value) in &config.successors {
        if !is_number_word(key) {
            return Err(VocabConfigError::InvalidKey(key.clone()));
        }
        if !is_number_word(value) {
            return Err(VocabConfigError::InvalidValue {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }

    Ok(config.successors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[successors]
one = "two"
two = "three"
"#;
        let map = parse_vocab_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["one"], "two");
        assert_eq!(map["two"], "three");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_vocab_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert_eq!(map.len(), 36);
        assert_eq!(map["ninetynine"], "onehundred");
        assert!(!map.contains_key("onehundred"));
    }

    #[test]
    fn error_empty_successors() {
        let err = parse_vocab_toml("[successors]\n").unwrap_err();
        assert!(matches!(err, VocabConfigError::Empty));
    }

    #[test]
    fn error_uppercase_key() {
        let toml = r#"
[successors]
One = "two"
"#;
        let err = parse_vocab_toml(toml).unwrap_err();
        assert!(matches!(err, VocabConfigError::InvalidKey(ref k) if k == "One"));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = "
[successors]
\"eins\u{e9}\" = \"zwei\"
";
        let err = parse_vocab_toml(toml).unwrap_err();
        assert!(matches!(err, VocabConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_hyphenated_value() {
        let toml = r#"
[successors]
twenty = "twenty-one"
"#;
        let err = parse_vocab_toml(toml).unwrap_err();
        assert!(matches!(err, VocabConfigError::InvalidValue { ref key, .. } if key == "twenty"));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[successors]
one = ""
"#;
        let err = parse_vocab_toml(toml).unwrap_err();
        assert!(matches!(err, VocabConfigError::InvalidValue { .. }));
    }

    #[test]
    fn error_missing_table() {
        let err = parse_vocab_toml("[mappings]\none = \"two\"\n").unwrap_err();
        assert!(matches!(err, VocabConfigError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_vocab_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, VocabConfigError::Parse(_)));
    }
}
