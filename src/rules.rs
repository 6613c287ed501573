use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named modifier rules a match can be played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rule {
    Open,
    Random,
    Same,
    Plus,
    #[serde(rename = "Same Wall")]
    SameWall,
    Elemental,
    #[serde(rename = "Sudden Death")]
    SuddenDeath,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::Open,
        Rule::Random,
        Rule::Same,
        Rule::Plus,
        Rule::SameWall,
        Rule::Elemental,
        Rule::SuddenDeath,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Open => "Open",
            Rule::Random => "Random",
            Rule::Same => "Same",
            Rule::Plus => "Plus",
            Rule::SameWall => "Same Wall",
            Rule::Elemental => "Elemental",
            Rule::SuddenDeath => "Sudden Death",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rule::Open => "All cards visible",
            Rule::Random => "Random card placement",
            Rule::Same => "Same values capture adjacent cards",
            Rule::Plus => "Sum of values capture adjacent cards",
            Rule::SameWall => "Card values can match with walls",
            Rule::Elemental => "Elements provide bonuses",
            Rule::SuddenDeath => "Tie results in rematch",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = String;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "open" => Ok(Rule::Open),
            "random" => Ok(Rule::Random),
            "same" => Ok(Rule::Same),
            "plus" => Ok(Rule::Plus),
            "samewall" => Ok(Rule::SameWall),
            "elemental" => Ok(Rule::Elemental),
            "suddendeath" => Ok(Rule::SuddenDeath),
            _ => Err(format!("Unknown rule '{}'", s.trim())),
        }
    }
}

/// Set of active rules for a match. Order is irrelevant; fixed for the match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct Rules {
    bits: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self::from_slice(&[Rule::Open])
    }
}

impl Rules {
    #[inline]
    pub const fn basic_only() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub const fn all_enabled() -> Self {
        Self { bits: 0b0111_1111 }
    }

    pub const fn from_slice(rules: &[Rule]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < rules.len() {
            bits |= rules[i].bit();
            i += 1;
        }
        Self { bits }
    }

    #[inline]
    pub const fn contains(self, rule: Rule) -> bool {
        self.bits & rule.bit() != 0
    }

    #[inline]
    pub const fn without(self, rule: Rule) -> Self {
        Self { bits: self.bits & !rule.bit() }
    }

    #[inline]
    pub fn insert(&mut self, rule: Rule) {
        self.bits |= rule.bit();
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Rule> {
        Rule::ALL.into_iter().filter(move |r| self.contains(*r))
    }

    /// Parse a comma-separated list such as `same,plus,same wall` (or `none`).
    pub fn parse_list(s: &str) -> Result<Self, String> {
        let mut rules = Rules::basic_only();
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(rules);
        }
        for tok in s.split(',') {
            if tok.trim().is_empty() {
                continue;
            }
            rules.insert(tok.parse()?);
        }
        Ok(rules)
    }
}

impl From<Vec<Rule>> for Rules {
    fn from(v: Vec<Rule>) -> Self {
        Self::from_slice(&v)
    }
}

impl From<Rules> for Vec<Rule> {
    fn from(r: Rules) -> Self {
        r.iter().collect()
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut rules = Rules::basic_only();
        for r in iter {
            rules.insert(r);
        }
        rules
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_are_stable() {
        assert_eq!(
            Rule::ALL.map(Rule::description),
            [
                "All cards visible",
                "Random card placement",
                "Same values capture adjacent cards",
                "Sum of values capture adjacent cards",
                "Card values can match with walls",
                "Elements provide bonuses",
                "Tie results in rematch",
            ]
        );
    }

    #[test]
    fn parse_list_accepts_display_and_snake_names() {
        let r = Rules::parse_list("Same, plus,same_wall,Sudden Death").unwrap();
        assert!(r.contains(Rule::Same));
        assert!(r.contains(Rule::Plus));
        assert!(r.contains(Rule::SameWall));
        assert!(r.contains(Rule::SuddenDeath));
        assert!(!r.contains(Rule::Elemental));
        assert!(Rules::parse_list("none").unwrap().is_empty());
        assert!(Rules::parse_list("same,bogus").is_err());
    }

    #[test]
    fn order_is_irrelevant() {
        let a = Rules::from_slice(&[Rule::Plus, Rule::Same]);
        let b: Rules = [Rule::Same, Rule::Plus, Rule::Same].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_as_rule_names() {
        let r = Rules::from_slice(&[Rule::SameWall, Rule::Open]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"["Open","Same Wall"]"#);
        let back: Rules = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn all_enabled_covers_every_rule() {
        let all = Rules::all_enabled();
        assert!(Rule::ALL.iter().all(|r| all.contains(*r)));
        assert_eq!(all.without(Rule::Open).iter().count(), 6);
    }
}
