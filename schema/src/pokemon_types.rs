use serde::{Deserialize, Serialize};
use std::fmt;

/// The full Gen-6 elemental type chart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Parse a lowercase type word ("fire", "water", ...), as it appears in a
    /// `<word> type` search token.
    pub fn from_name(name: &str) -> Option<PokemonType> {
        name.parse().ok()
    }
}
