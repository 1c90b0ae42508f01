use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use thiserror::Error;

/// One of the four experience ranks a route has to be staffed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("experience level {0} is outside 1..=4")]
pub struct InvalidTier(pub u8);

impl Tier {
    pub const COUNT: usize = 4;
    pub const LOWEST: Tier = Tier(1);
    pub const HIGHEST: Tier = Tier(4);

    /// Every tier, lowest first
    pub const ALL: [Tier; Tier::COUNT] = [Tier(1), Tier(2), Tier(3), Tier(4)];

    pub fn new(level: u8) -> Option<Self> {
        if (1..=Self::COUNT as u8).contains(&level) {
            Some(Tier(level))
        } else {
            None
        }
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Zero-based position, for slot arrays
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Tier::new(level).ok_or(InvalidTier(level))
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.0
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn only_four_tiers() {
    assert_eq!(Tier::new(0), None);
    assert_eq!(Tier::new(5), None);
    assert_eq!(Tier::try_from(5), Err(InvalidTier(5)));
    assert_eq!(
        Tier::ALL.iter().map(|tier| tier.index()).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert!(Tier::LOWEST < Tier::HIGHEST);
}

#[test]
fn deserializes_from_level() {
    let tier: Tier = serde_json::from_str("3").unwrap();
    assert_eq!(tier.level(), 3);
    assert!(serde_json::from_str::<Tier>("7").is_err());
    assert_eq!(serde_json::to_string(&tier).unwrap(), "3");
}
