use rand::seq::SliceRandom;
use rand::Rng;
use schema::SpeciesData;
use std::collections::HashSet;
use std::fmt;

/// Result-count threshold above which the reply is sampled instead of
/// listed in full.
pub const MAX_DISPLAYED: usize = 10;

/// The rendered outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchReply {
    NoResults,
    /// Alphabetically sorted, complete list.
    Full(Vec<String>),
    /// A random sample, with the true number of entries left out.
    Sampled { shown: Vec<String>, omitted: usize },
}

impl fmt::Display for SearchReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchReply::NoResults => write!(f, "No Pokemon found."),
            SearchReply::Full(names) => write!(f, "{}", names.join(", ")),
            SearchReply::Sampled { shown, omitted } => write!(
                f,
                "{}, and {} more. Redo the search with 'all' as a search parameter to show all results.",
                shown.join(", "),
                omitted
            ),
        }
    }
}

/// Collapse evolutionary families down to display names: a non-base form is
/// dropped whenever its family root's name also made it into the result set.
pub fn dedup_families(candidates: &[&SpeciesData]) -> Vec<String> {
    let present: HashSet<&str> = candidates.iter().map(|s| s.name.as_str()).collect();
    candidates
        .iter()
        .filter(|species| {
            let base = species.base_name();
            base == species.name || !present.contains(base)
        })
        .map(|species| species.name.clone())
        .collect()
}

/// Deduplicate, then sort or sample the final name list.
pub fn assemble<R: Rng>(
    candidates: &[&SpeciesData],
    show_all: bool,
    rng: &mut R,
) -> SearchReply {
    let mut names = dedup_families(candidates);
    if names.is_empty() {
        return SearchReply::NoResults;
    }
    if show_all || names.len() <= MAX_DISPLAYED {
        names.sort();
        SearchReply::Full(names)
    } else {
        let omitted = names.len() - MAX_DISPLAYED;
        names.shuffle(rng);
        names.truncate(MAX_DISPLAYED);
        SearchReply::Sampled { shown: names, omitted }
    }
}
