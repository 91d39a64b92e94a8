//! Case classification of matched number words.

use serde::Serialize;

/// How a matched occurrence was capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCasing {
    /// Every letter uppercase: "TEN".
    AllUpper,
    /// First character uppercase, the rest not all uppercase: "Ten", "TeN".
    InitialUpper,
    /// Anything else: "ten", "tEN".
    LowerOrOther,
}

impl MatchCasing {
    /// Classify a matched substring.
    ///
    /// `AllUpper` needs at least one letter, so a match without letters
    /// falls through to the first-character rule.
    pub fn classify(matched: &str) -> Self {
        let mut letters = matched.chars().filter(|c| c.is_alphabetic()).peekable();
        if letters.peek().is_some() && letters.all(char::is_uppercase) {
            return MatchCasing::AllUpper;
        }
        match matched.chars().next() {
            Some(c) if c.is_uppercase() => MatchCasing::InitialUpper,
            _ => MatchCasing::LowerOrOther,
        }
    }

    /// Recase a lowercase successor word to this casing.
    pub fn apply(self, word: &str) -> String {
        match self {
            MatchCasing::AllUpper => word.to_uppercase(),
            MatchCasing::InitialUpper => capitalize(word),
            MatchCasing::LowerOrOther => word.to_string(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(MatchCasing::classify("TEN"), MatchCasing::AllUpper);
        assert_eq!(MatchCasing::classify("Ten"), MatchCasing::InitialUpper);
        assert_eq!(MatchCasing::classify("TeN"), MatchCasing::InitialUpper);
        assert_eq!(MatchCasing::classify("ten"), MatchCasing::LowerOrOther);
        assert_eq!(MatchCasing::classify("tEN"), MatchCasing::LowerOrOther);
    }

    #[test]
    fn test_classify_without_letters() {
        assert_eq!(MatchCasing::classify(""), MatchCasing::LowerOrOther);
        assert_eq!(MatchCasing::classify("42"), MatchCasing::LowerOrOther);
    }

    #[test]
    fn test_apply() {
        assert_eq!(MatchCasing::AllUpper.apply("eleven"), "ELEVEN");
        assert_eq!(MatchCasing::InitialUpper.apply("eleven"), "Eleven");
        assert_eq!(MatchCasing::LowerOrOther.apply("eleven"), "eleven");
    }

    #[test]
    fn test_apply_compound_successor() {
        assert_eq!(MatchCasing::AllUpper.apply("onehundred"), "ONEHUNDRED");
        assert_eq!(MatchCasing::InitialUpper.apply("twentyone"), "Twentyone");
    }

    #[test]
    fn test_capitalize_lowers_tail() {
        assert_eq!(capitalize("tWELVE"), "Twelve");
        assert_eq!(capitalize(""), "");
    }
}
