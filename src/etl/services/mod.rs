mod dimension_builder;
mod enrichment;
mod fact_builder;
mod party_registry;
mod purpose_index;

pub use dimension_builder::{code_dimension, time_dimension};
pub use enrichment::{EnrichedFacts, StatusEnrichedFacts, UnenrichedFacts};
pub use fact_builder::FactBuilder;
pub use party_registry::{PartyRegistry, PartyRole};
pub use purpose_index::PurposeIndex;
