use crate::classify::{ClassifiedToken, Token};
use crate::errors::{SearchError, SearchResult};
use schema::{Color, PokemonType, Tier};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Whether a predicate value must be present or absent. A value missing from
/// its category map is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Required,
    Excluded,
}

impl Polarity {
    pub fn from_negation(negated: bool) -> Self {
        if negated {
            Polarity::Excluded
        } else {
            Polarity::Required
        }
    }

    pub fn is_required(self) -> bool {
        self == Polarity::Required
    }
}

/// The typed predicate set accumulated from classified tokens. One map per
/// category plus the structural flags; built fresh per query and discarded
/// with the response.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub abilities: HashMap<String, Polarity>,
    pub tiers: HashMap<Tier, Polarity>,
    pub colors: HashMap<Color, Polarity>,
    pub gens: HashMap<u8, Polarity>,
    pub types: HashMap<PokemonType, Polarity>,
    pub moves: HashMap<String, Polarity>,
    pub show_all: bool,
    /// Some(true) = megas only, Some(false) = no megas.
    pub mega_filter: Option<bool>,
    /// Some(true) = fully evolved only, Some(false) = not fully evolved only.
    pub fully_evolved_filter: Option<bool>,
}

impl SearchQuery {
    pub fn new() -> Self {
        SearchQuery::default()
    }

    /// Insert one classified token, enforcing the conflict and cardinality
    /// invariants. The first violation aborts the whole query.
    pub fn add(&mut self, classified: ClassifiedToken) -> SearchResult<()> {
        let ClassifiedToken { token, negated } = classified;
        let polarity = Polarity::from_negation(negated);

        match token {
            Token::Ability(id) => {
                insert(&mut self.abilities, id, polarity)?;
                if required_count(&self.abilities) > 1 {
                    return Err(SearchError::CardinalityExceeded("one ability"));
                }
            }
            Token::Tier(tier) => insert(&mut self.tiers, tier, polarity)?,
            Token::Color(color) => insert(&mut self.colors, color, polarity)?,
            Token::Gen(gen) => insert(&mut self.gens, gen, polarity)?,
            Token::Type(pokemon_type) => {
                insert(&mut self.types, pokemon_type, polarity)?;
                if required_count(&self.types) > 2 {
                    return Err(SearchError::CardinalityExceeded("two types"));
                }
            }
            Token::Move(id) => {
                insert(&mut self.moves, id, polarity)?;
                if required_count(&self.moves) > 4 {
                    return Err(SearchError::CardinalityExceeded("four moves"));
                }
            }
            // The classifier rejects a negated `all`.
            Token::All => self.show_all = true,
            Token::Mega => set_structural(&mut self.mega_filter, !negated, "mega")?,
            Token::FullyEvolved => {
                set_structural(&mut self.fully_evolved_filter, !negated, "fully evolved")?
            }
            // "nfe" carries an inverted negation flag: bare "nfe" means
            // not-fully-evolved, "!nfe" means fully evolved.
            Token::NotFullyEvolved => {
                set_structural(&mut self.fully_evolved_filter, negated, "fully evolved")?
            }
        }
        Ok(())
    }

    pub fn has_category_predicates(&self) -> bool {
        !self.abilities.is_empty()
            || !self.tiers.is_empty()
            || !self.colors.is_empty()
            || !self.gens.is_empty()
            || !self.types.is_empty()
            || !self.moves.is_empty()
    }

    pub fn has_structural_filters(&self) -> bool {
        self.mega_filter.is_some() || self.fully_evolved_filter.is_some()
    }

    /// True for a query whose only content is the `all` keyword. Such a
    /// query dumps the entire admissible catalog and is subject to the
    /// broadcast gate.
    pub fn is_all_only(&self) -> bool {
        self.show_all && !self.has_category_predicates() && !self.has_structural_filters()
    }
}

fn insert<K>(map: &mut HashMap<K, Polarity>, key: K, polarity: Polarity) -> SearchResult<()>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    match map.insert(key.clone(), polarity) {
        Some(previous) if previous != polarity => {
            Err(SearchError::ConflictingPredicate(key.to_string()))
        }
        _ => Ok(()),
    }
}

fn set_structural(
    slot: &mut Option<bool>,
    value: bool,
    label: &'static str,
) -> SearchResult<()> {
    match *slot {
        Some(previous) if previous != value => {
            Err(SearchError::ConflictingPredicate(label.to_string()))
        }
        _ => {
            *slot = Some(value);
            Ok(())
        }
    }
}

fn required_count<K>(map: &HashMap<K, Polarity>) -> usize {
    map.values().filter(|p| p.is_required()).count()
}
