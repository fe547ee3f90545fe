// src/stats/mod.rs
// =============================================================================
// Statistics derived from already-fetched data. Pure functions only: nothing
// in here touches the network.
// =============================================================================

mod languages;

pub use languages::{aggregate, ChartSlice, LanguageTally};
