// Dexsearch Schema - Shared type definitions
// This crate contains the catalog data structures and the fixed enums
// (types, tiers, colors) shared between the dexsearch engine and any
// tool that produces catalog files.

// Re-export the main types
pub use pokemon_types::*;
pub use species_data::*;
pub use tiers::*;

pub mod pokemon_types;
pub mod species_data;
pub mod tiers;
