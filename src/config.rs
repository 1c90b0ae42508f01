use crate::Tier;
use serde::{Deserialize, Serialize};

/// Which tiers a driver's experience level lets them fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Qualification {
    /// Experience at or above the tier
    AtLeast,
    /// Experience equal to the tier
    Exact,
}

impl Qualification {
    #[inline]
    pub fn qualifies(self, exp: Tier, tier: Tier) -> bool {
        match self {
            Qualification::AtLeast => exp >= tier,
            Qualification::Exact => exp == tier,
        }
    }
}

impl Default for Qualification {
    fn default() -> Self {
        Qualification::AtLeast
    }
}

/// How "at most one of these literals" groups are written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AtMostOne {
    /// One binary clause per pair, no auxiliary variables
    Pairwise,
    /// Sequential counter, linear in the group size
    Sequential,
    /// Pairwise for small groups, sequential for the rest
    Auto,
}

impl AtMostOne {
    /// Largest group `Auto` still writes pairwise
    pub const AUTO_PAIRWISE_LIMIT: usize = 6;
}

impl Default for AtMostOne {
    fn default() -> Self {
        AtMostOne::Auto
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub qualification: Qualification,
    pub at_most_one: AtMostOne,
}

impl Config {
    pub fn with_qualification(mut self, qualification: Qualification) -> Self {
        self.qualification = qualification;
        self
    }

    pub fn with_at_most_one(mut self, at_most_one: AtMostOne) -> Self {
        self.at_most_one = at_most_one;
        self
    }
}

#[test]
fn qualification_policies() {
    let (two, three) = (Tier::ALL[1], Tier::ALL[2]);
    assert!(Qualification::AtLeast.qualifies(three, two));
    assert!(Qualification::AtLeast.qualifies(three, three));
    assert!(!Qualification::AtLeast.qualifies(two, three));
    assert!(Qualification::Exact.qualifies(three, three));
    assert!(!Qualification::Exact.qualifies(three, two));
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: Config = serde_json::from_str(r#"{"qualification": "exact"}"#).unwrap();
    assert_eq!(config.qualification, Qualification::Exact);
    assert_eq!(config.at_most_one, AtMostOne::Auto);
}
