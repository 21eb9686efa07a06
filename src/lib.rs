//! Dexsearch Query Engine
//!
//! A pure query engine over a fixed, in-memory species catalog: free-form
//! comma-separated tokens (abilities, tiers, colors, generations, types,
//! moves, structural keywords) are classified, accumulated into a typed
//! predicate set, applied against the catalog, and rendered as a bounded
//! name list. No state outlives a single query.

// --- MODULE DECLARATIONS ---
pub mod assemble;
pub mod classify;
pub mod dex;
pub mod errors;
pub mod filter;
pub mod query;
pub mod search;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the catalog data definitions.
pub use schema::{
    AbilityData,
    Color,
    EvolutionData,
    EvolutionMethod,
    Learnset,
    MoveData,
    PokemonType,
    SpeciesData,
    Tier,
};

// --- From this crate's modules (`src/`) ---

// The catalog and its id normalization.
pub use dex::{to_id, Pokedex};

// Query construction pieces, for callers that build predicates directly.
pub use classify::{classify, ClassifiedToken, Token};
pub use query::{Polarity, SearchQuery};

// The engine entry points and reply type.
pub use assemble::{SearchReply, MAX_DISPLAYED};
pub use search::{run_dexsearch, run_dexsearch_with_rng};

// Crate-specific error and result types.
pub use errors::{SearchError, SearchResult};
