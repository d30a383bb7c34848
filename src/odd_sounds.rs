use anyhow::{Context, Result};
use regex::Regex;

/// A single rejection rule. Patterns are anchored so they only test the
/// start of a word.
#[derive(Debug, Clone)]
pub struct OddSoundRule {
    name: &'static str,
    pattern: Regex,
}

impl OddSoundRule {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        Ok(OddSoundRule {
            name,
            pattern: Regex::new(&format!("^(?:{})", pattern))
                .with_context(|| format!("Failed to compile odd sound rule '{}'", name))?,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }
}

/// Ordered rule set; a word is odd sounding when any rule matches.
#[derive(Debug, Clone)]
pub struct OddSoundRules {
    rules: Vec<OddSoundRule>,
}

impl OddSoundRules {
    pub fn new() -> Result<Self> {
        Ok(OddSoundRules {
            rules: vec![
                // The alternation binds loosely: any leading vowel matches, not
                // only a vowel followed by y's.
                OddSoundRule::new("vowel_or_triple_y", r"a|e|i|o|u|y{3,6}")?,
                // bk, ck, dk, gk, ...
                OddSoundRule::new("odd_sounding_k", r"\b[^aeiouys]k|zt|ksd|kd|zhr")?,
                OddSoundRule::new("hard_to_pronounce", r"\bzt|ksd|kd|zhr")?,
            ],
        })
    }

    pub fn rules(&self) -> &[OddSoundRule] {
        &self.rules
    }

    /// Name of the first rule that rejects `word`.
    pub fn first_match(&self, word: &str) -> Option<&'static str> {
        self.rules.iter().find(|r| r.matches(word)).map(|r| r.name())
    }

    pub fn is_odd(&self, word: &str) -> bool {
        self.rules.iter().any(|r| r.matches(word))
    }
}

impl Default for OddSoundRules {
    fn default() -> Self {
        Self::new().expect("built-in odd sound rules must compile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> OddSoundRule {
        OddSoundRules::default()
            .rules()
            .iter()
            .find(|r| r.name() == name)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = OddSoundRules::default().rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["vowel_or_triple_y", "odd_sounding_k", "hard_to_pronounce"]);
    }

    #[test]
    fn test_vowel_rule_rejects_any_leading_vowel() {
        let r = rule("vowel_or_triple_y");
        for word in ["apple", "echo", "ink", "orbit", "umbra"] {
            assert!(r.matches(word), "{} should match", word);
        }
        assert!(r.matches("yyyes"));
        assert!(!r.matches("yyes"));
        assert!(!r.matches("yes"));
        assert!(!r.matches("Apple"));
        // Prefix match only.
        assert!(!r.matches("banana"));
    }

    #[test]
    fn test_odd_k_rule() {
        let r = rule("odd_sounding_k");
        assert!(r.matches("bkar"));
        assert!(r.matches("tkoo"));
        assert!(r.matches("ztar"));
        assert!(r.matches("ksdo"));
        assert!(r.matches("kdar"));
        assert!(r.matches("zhrin"));
        assert!(!r.matches("skate"));
        assert!(!r.matches("akin"));
        assert!(!r.matches("make"));
        assert!(!r.matches("-kay"));
    }

    #[test]
    fn test_hard_to_pronounce_rule() {
        let r = rule("hard_to_pronounce");
        assert!(r.matches("zteam"));
        assert!(r.matches("kdog"));
        assert!(r.matches("ksdal"));
        assert!(r.matches("zhrom"));
        assert!(!r.matches("bkar"));
        assert!(!r.matches("blitz"));
    }

    #[test]
    fn test_first_match() {
        let rules = OddSoundRules::default();
        assert_eq!(rules.first_match("apple"), Some("vowel_or_triple_y"));
        assert_eq!(rules.first_match("zteam"), Some("odd_sounding_k"));
        assert_eq!(rules.first_match("brand"), None);
        assert!(!rules.is_odd("brand"));
    }
}
