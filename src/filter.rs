use crate::dex::Pokedex;
use crate::errors::{SearchError, SearchResult};
use crate::query::{Polarity, SearchQuery};
use schema::{PokemonType, SpeciesData, Tier};
use std::collections::HashMap;
use std::hash::Hash;

/// Moves that cannot be acquired through the universal "sketch" grant.
const SKETCH_EXCLUDED: [&str; 3] = ["chatter", "struggle", "magikarpsrevenge"];

/// Reduce the catalog to the species satisfying every active predicate.
/// Each stage takes the current candidate set and returns a new one; no
/// stage observes another's in-progress work.
pub fn run_filters<'a>(
    dex: &'a Pokedex,
    query: &SearchQuery,
) -> SearchResult<Vec<&'a SpeciesData>> {
    let cap_requested = query.tiers.get(&Tier::Cap) == Some(&Polarity::Required);
    let mut candidates: Vec<&SpeciesData> = dex
        .all_species()
        .filter(|species| admissible(species, cap_requested))
        .collect();

    if let Some(want_mega) = query.mega_filter {
        candidates = candidates
            .into_iter()
            .filter(|s| s.is_mega == want_mega)
            .collect();
    }
    if let Some(want_fully_evolved) = query.fully_evolved_filter {
        candidates = candidates
            .into_iter()
            .filter(|s| s.is_fully_evolved() == want_fully_evolved)
            .collect();
    }

    candidates = type_filter(candidates, &query.types);
    candidates = membership_filter(candidates, &query.tiers, |s, tier| match tier {
        Tier::Lc => is_lc_legal(dex, s),
        _ => s.tier == *tier,
    });
    candidates = membership_filter(candidates, &query.gens, |s, gen| s.gen == *gen);
    candidates = membership_filter(candidates, &query.colors, |s, color| s.color == *color);
    candidates = ability_filter(candidates, &query.abilities);
    candidates = move_filter(dex, candidates, &query.moves)?;

    Ok(candidates)
}

/// Base admissibility: never show unreleased or illegal entries, and only
/// show CAP entries when the query explicitly asked for the CAP tier.
fn admissible(species: &SpeciesData, cap_requested: bool) -> bool {
    match species.tier {
        Tier::Unreleased | Tier::Illegal => false,
        Tier::Cap => cap_requested,
        _ => true,
    }
}

/// Dynamic Little Cup legality, computed from evolutionary shape and the
/// format ban list instead of the stored tier field: the species must have
/// at least one evolution, no prevolution, and not be banned.
pub fn is_lc_legal(dex: &Pokedex, species: &SpeciesData) -> bool {
    !species.evos.is_empty()
        && species.prevo.is_none()
        && !dex.lc_banlist_contains(&species.id)
}

/// Whether the species can learn the move, resolved by walking the
/// prevolution chain: step backwards while the current link has a
/// prevolution and its own learnset lacks the move, then check the terminal
/// link (directly, or through the sketch catch-all minus its exclusions).
pub fn can_learn(dex: &Pokedex, species: &SpeciesData, move_id: &str) -> bool {
    let mut current = species;
    // Bounded so malformed prevolution cycles in catalog data cannot hang
    // the query.
    let mut remaining = dex.species_count();
    while remaining > 0 && !current.learnset.has_move(move_id) {
        match current.prevo.as_deref().and_then(|id| dex.species(id)) {
            Some(previous) => current = previous,
            None => break,
        }
        remaining -= 1;
    }

    current.learnset.has_move(move_id)
        || (current.learnset.grants_sketch() && !SKETCH_EXCLUDED.contains(&move_id))
}

/// Whitelist/blacklist reduction shared by the tier, generation and color
/// categories: any excluded membership removes the species; if any required
/// values exist, at least one must match.
fn membership_filter<'a, K>(
    candidates: Vec<&'a SpeciesData>,
    map: &HashMap<K, Polarity>,
    is_member: impl Fn(&SpeciesData, &K) -> bool,
) -> Vec<&'a SpeciesData>
where
    K: Eq + Hash,
{
    if map.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|species| {
            let mut any_required = false;
            let mut required_hit = false;
            for (value, polarity) in map {
                let member = is_member(species, value);
                match polarity {
                    Polarity::Excluded => {
                        if member {
                            return false;
                        }
                    }
                    Polarity::Required => {
                        any_required = true;
                        if member {
                            required_hit = true;
                        }
                    }
                }
            }
            !any_required || required_hit
        })
        .collect()
}

/// Type reduction. With exactly two required types the species' two slots
/// must be exactly that pair (order-independent); otherwise the usual
/// whitelist/blacklist semantics apply per slot.
fn type_filter<'a>(
    candidates: Vec<&'a SpeciesData>,
    map: &HashMap<PokemonType, Polarity>,
) -> Vec<&'a SpeciesData> {
    if map.is_empty() {
        return candidates;
    }
    let required: Vec<PokemonType> = map
        .iter()
        .filter(|(_, polarity)| polarity.is_required())
        .map(|(pokemon_type, _)| *pokemon_type)
        .collect();

    if required.len() == 2 {
        candidates
            .into_iter()
            .filter(|s| s.types.len() == 2 && required.iter().all(|t| s.has_type(*t)))
            .collect()
    } else {
        membership_filter(candidates, map, |s, pokemon_type| s.has_type(*pokemon_type))
    }
}

/// Ability reduction is universally quantified: every required ability must
/// be present and every excluded ability absent.
fn ability_filter<'a>(
    candidates: Vec<&'a SpeciesData>,
    map: &HashMap<String, Polarity>,
) -> Vec<&'a SpeciesData> {
    if map.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|species| {
            map.iter()
                .all(|(ability, polarity)| species.has_ability(ability) == polarity.is_required())
        })
        .collect()
}

/// Move reduction via the learnability walk. A move id missing from the
/// catalog is a data problem, not a legitimate "no match", and aborts the
/// query.
fn move_filter<'a>(
    dex: &Pokedex,
    candidates: Vec<&'a SpeciesData>,
    map: &HashMap<String, Polarity>,
) -> SearchResult<Vec<&'a SpeciesData>> {
    if map.is_empty() {
        return Ok(candidates);
    }
    for move_id in map.keys() {
        if dex.get_move(move_id).is_none() {
            return Err(SearchError::UnknownMove(move_id.clone()));
        }
    }
    Ok(candidates
        .into_iter()
        .filter(|species| {
            map.iter()
                .all(|(move_id, polarity)| can_learn(dex, species, move_id) == polarity.is_required())
        })
        .collect())
}
