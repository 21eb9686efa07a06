use crate::{Color, PokemonType, Tier};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Moves a species can acquire, keyed by move id. The values are opaque
/// legality-source tags carried over from the catalog; the engine only ever
/// checks for the presence of a move (and of the universal "sketch" grant).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Learnset {
    pub moves: HashMap<String, Vec<String>>,
}

impl Learnset {
    pub fn from_move_ids(ids: &[&str]) -> Self {
        Learnset {
            moves: ids
                .iter()
                .map(|id| (id.to_string(), vec!["l1".to_string()]))
                .collect(),
        }
    }

    pub fn has_move(&self, move_id: &str) -> bool {
        self.moves.contains_key(move_id)
    }

    /// Whether this learnset carries the universal "sketch" legality source.
    pub fn grants_sketch(&self) -> bool {
        self.has_move("sketch")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvolutionMethod {
    Level(u8),
    Item(String),
    Trade,
    Other(String),
}

/// One outgoing evolution edge. `into` is a species id, not an owning
/// reference; the catalog owns every species record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionData {
    pub into: String,
    pub method: EvolutionMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: String,
    pub name: String,
    /// One or two type slots, order preserved from the catalog.
    pub types: Vec<PokemonType>,
    pub tier: Tier,
    pub color: Color,
    pub gen: u8,
    /// Ability ids.
    pub abilities: HashSet<String>,
    pub is_mega: bool,
    pub evos: Vec<EvolutionData>,
    /// Id of the form this species evolves from, if any. A back-reference
    /// into the catalog, never an owning pointer.
    pub prevo: Option<String>,
    /// Display name of the family root; `None` means this species is its
    /// own base.
    pub base_species: Option<String>,
    pub learnset: Learnset,
}

impl SpeciesData {
    pub fn is_fully_evolved(&self) -> bool {
        self.evos.is_empty()
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    pub fn has_ability(&self, ability_id: &str) -> bool {
        self.abilities.contains(ability_id)
    }

    /// The family root's display name (this species' own name if it is the
    /// base form).
    pub fn base_name(&self) -> &str {
        self.base_species.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityData {
    pub id: String,
    pub name: String,
}
