use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Birth/survival conditions of a life-like rule (`B<digits>/S<digits>`).
/// Each digit is one neighbor count; only set membership matters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    birth: BTreeSet<u32>,
    survive: BTreeSet<u32>,
}

impl RuleSet {
    /// Parse a rule string such as `"B3/S23"` or `"B368/S245"`.
    ///
    /// Structural mismatches (missing `/`, leading `B`, `S` after the
    /// separator, or an empty digit run) yield [`Error::InvalidRuleFormat`];
    /// a non-digit inside either run yields [`Error::InvalidRuleDigits`].
    /// Repeated digits collapse into a single condition.
    pub fn parse(spec: &str) -> Result<Self> {
        let format_error = || Error::InvalidRuleFormat(spec.to_string());

        let (birth, survive) = spec.split_once('/').ok_or_else(format_error)?;
        let birth = birth.strip_prefix('B').ok_or_else(format_error)?;
        let survive = survive.strip_prefix('S').ok_or_else(format_error)?;
        if birth.is_empty() || survive.is_empty() {
            return Err(format_error());
        }

        Ok(Self {
            birth: parse_digits(birth, spec)?,
            survive: parse_digits(survive, spec)?,
        })
    }

    /// Conway's Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::from_digits(&[3], &[2, 3])
    }

    fn from_digits(birth: &[u32], survive: &[u32]) -> Self {
        Self {
            birth: birth.iter().copied().collect(),
            survive: survive.iter().copied().collect(),
        }
    }

    pub fn birth(&self) -> &BTreeSet<u32> {
        &self.birth
    }

    pub fn survive(&self) -> &BTreeSet<u32> {
        &self.survive
    }

    #[inline]
    pub fn births_on(&self, neighbors: u32) -> bool {
        self.birth.contains(&neighbors)
    }

    #[inline]
    pub fn survives_on(&self, neighbors: u32) -> bool {
        self.survive.contains(&neighbors)
    }

    /// Largest neighbor count named by either set
    pub fn max_condition(&self) -> u32 {
        self.birth.union(&self.survive).copied().max().unwrap_or(0)
    }

    /// Conditions that can never fire because they exceed `max_count`
    pub fn unreachable_counts(&self, max_count: u32) -> Vec<u32> {
        self.birth
            .union(&self.survive)
            .copied()
            .filter(|&n| n > max_count)
            .collect()
    }
}

fn parse_digits(run: &str, spec: &str) -> Result<BTreeSet<u32>> {
    run.chars()
        .map(|c| c.to_digit(10).ok_or_else(|| Error::InvalidRuleDigits(spec.to_string())))
        .collect()
}

impl FromStr for RuleSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        self.birth.iter().try_for_each(|n| write!(f, "{}", n))?;
        write!(f, "/S")?;
        self.survive.iter().try_for_each(|n| write!(f, "{}", n))
    }
}

/// A named rule for menus and logs
#[derive(Clone, Debug)]
pub struct RulePreset {
    pub name: &'static str,
    pub description: &'static str,
    pub rule: RuleSet,
}

/// Well-known life-like rules
pub fn all_rules() -> Vec<RulePreset> {
    vec![
        RulePreset {
            name: "Conway",
            description: "B3/S23 - Classic",
            rule: RuleSet::conway(),
        },
        RulePreset {
            name: "HighLife",
            description: "B36/S23 - Replicators",
            rule: RuleSet::from_digits(&[3, 6], &[2, 3]),
        },
        RulePreset {
            name: "Day&Night",
            description: "B3678/S34678 - Symmetric under inversion",
            rule: RuleSet::from_digits(&[3, 6, 7, 8], &[3, 4, 6, 7, 8]),
        },
        RulePreset {
            name: "Morley",
            description: "B368/S245 - Move",
            rule: RuleSet::from_digits(&[3, 6, 8], &[2, 4, 5]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_parse_conway() {
        let rule = RuleSet::parse("B3/S23").unwrap();
        assert_eq!(rule.birth(), &set(&[3]));
        assert_eq!(rule.survive(), &set(&[2, 3]));
        assert_eq!(rule, RuleSet::conway());
    }

    #[test]
    fn test_parse_morley() {
        let rule = RuleSet::parse("B368/S245").unwrap();
        assert_eq!(rule.birth(), &set(&[3, 6, 8]));
        assert_eq!(rule.survive(), &set(&[2, 4, 5]));
    }

    #[test]
    fn test_duplicate_digits_collapse() {
        let rule = RuleSet::parse("B33/S3223").unwrap();
        assert_eq!(rule, RuleSet::conway());
    }

    #[test]
    fn test_format_errors() {
        for spec in ["3/S23", "B3S23", "B3/23", "", "B/S23", "B3/S", "b3/s23"] {
            assert!(
                matches!(RuleSet::parse(spec), Err(Error::InvalidRuleFormat(_))),
                "{spec:?} should be a format error"
            );
        }
    }

    #[test]
    fn test_digit_errors() {
        for spec in ["Bx/Sy", "B3/S2x", "B3a/S23", "B3/S2/3"] {
            assert!(
                matches!(RuleSet::parse(spec), Err(Error::InvalidRuleDigits(_))),
                "{spec:?} should be a digit error"
            );
        }
    }

    #[test]
    fn test_display_is_canonical() {
        let rule: RuleSet = "B863/S5422".parse().unwrap();
        assert_eq!(rule.to_string(), "B368/S245");
    }

    #[test]
    fn test_presets_match_descriptions() {
        for preset in all_rules() {
            let canonical = preset.description.split(' ').next().unwrap();
            assert_eq!(preset.rule.to_string(), canonical, "{}", preset.name);
        }
    }

    #[test]
    fn test_unreachable_counts() {
        let rule = RuleSet::parse("B39/S2").unwrap();
        assert_eq!(rule.unreachable_counts(8), vec![9]);
        assert!(rule.unreachable_counts(24).is_empty());
        assert_eq!(rule.max_condition(), 9);
    }
}
