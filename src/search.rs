use crate::assemble::{assemble, SearchReply};
use crate::classify::classify;
use crate::dex::Pokedex;
use crate::errors::{SearchError, SearchResult};
use crate::filter::run_filters;
use crate::query::SearchQuery;
use rand::Rng;

/// Run one dexsearch query end to end: classify the comma-separated tokens,
/// build the predicate set, apply the broadcast gate, filter the catalog and
/// assemble the reply. `broadcasting` is true when the caller intends to
/// show the reply to a shared audience.
pub fn run_dexsearch(dex: &Pokedex, input: &str, broadcasting: bool) -> SearchResult<SearchReply> {
    run_dexsearch_with_rng(dex, input, broadcasting, &mut rand::rng())
}

/// Same as [`run_dexsearch`] with an injected RNG for the sampling branch.
pub fn run_dexsearch_with_rng<R: Rng>(
    dex: &Pokedex,
    input: &str,
    broadcasting: bool,
    rng: &mut R,
) -> SearchResult<SearchReply> {
    if input.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let mut query = SearchQuery::new();
    for piece in input.split(',') {
        let token = classify(dex, piece)?;
        query.add(token)?;
    }

    // Dumping the entire catalog is only allowed as a private reply.
    if query.is_all_only() && broadcasting {
        return Err(SearchError::NotBroadcastable);
    }

    let candidates = run_filters(dex, &query)?;
    Ok(assemble(&candidates, query.show_all, rng))
}
