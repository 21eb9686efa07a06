use serde::{Deserialize, Serialize};
use std::fmt;

/// Competitive legality buckets. `Unreleased`, `Illegal` and `Cap` are
/// synthetic tiers: the first two mark entries that never appear in search
/// results, and `Cap` entries only appear when explicitly requested.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Uber,
    Ou,
    Uu,
    Lc,
    Cap,
    Bl,
    Bl2,
    Ru,
    Bl3,
    Nu,
    Unreleased,
    Illegal,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Uber => "Uber",
            Tier::Ou => "OU",
            Tier::Uu => "UU",
            Tier::Lc => "LC",
            Tier::Cap => "CAP",
            Tier::Bl => "BL",
            Tier::Bl2 => "BL2",
            Tier::Ru => "RU",
            Tier::Bl3 => "BL3",
            Tier::Nu => "NU",
            Tier::Unreleased => "Unreleased",
            Tier::Illegal => "Illegal",
        };
        write!(f, "{}", name)
    }
}

impl Tier {
    /// Parse one of the ten tier names accepted as search tokens. The
    /// synthetic `Unreleased`/`Illegal` markers are not user-searchable.
    pub fn from_search_token(token: &str) -> Option<Tier> {
        match token.parse().ok()? {
            Tier::Unreleased | Tier::Illegal => None,
            tier => Some(tier),
        }
    }
}

/// Pokedex color classification.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Blue,
    White,
    Brown,
    Yellow,
    Purple,
    Pink,
    Gray,
    Black,
}

impl Color {
    pub fn from_name(name: &str) -> Option<Color> {
        name.parse().ok()
    }
}
