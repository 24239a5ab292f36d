use crate::document::Node;
use crate::mappings;
use crate::models::{CodeRow, PartyTables, PaymentFact, TimeRow};
use crate::services::{
    code_dimension, time_dimension, FactBuilder, PartyRegistry, PurposeIndex, UnenrichedFacts,
};

/// The four already-parsed document streams, one per message category.
/// Document discovery and parsing happen at the caller's boundary; each
/// vector is expected in deterministic (filename-sorted) order.
#[derive(Debug, Default)]
pub struct PipelineInput {
    /// pain.001 customer payment initiations
    pub initiation: Vec<Node>,
    /// pacs.008 interbank credit transfers
    pub settlement: Vec<Node>,
    /// pacs.002 status reports
    pub status: Vec<Node>,
    /// camt.054 account statement entries
    pub statement: Vec<Node>,
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Partition party identities by role (debtor vs creditor), producing
    /// split party tables with `D`/`C` prefixed IDs instead of one merged
    /// `P`-prefixed table
    pub split_party_roles: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        return Self {
            split_party_roles: true,
        };
    }
}

/// Everything one run produces
#[derive(Debug)]
pub struct Mart {
    pub facts: Vec<PaymentFact>,
    pub parties: PartyTables,
    pub status_dimension: Vec<CodeRow>,
    pub currency_dimension: Vec<CodeRow>,
    pub purpose_dimension: Vec<CodeRow>,
    pub time_dimension: Vec<TimeRow>,
}

/// Runs the full correlation and enrichment pipeline: purpose index from the
/// initiation stream, facts from the settlement stream, status then statement
/// enrichment, dimensions from the final facts. Single-threaded, sequential,
/// run-to-completion; data-quality issues never abort the run.
pub fn run(input: PipelineInput, options: PipelineOptions) -> Mart {
    let purposes = PurposeIndex::build(&input.initiation);

    let mut registry = PartyRegistry::new(options.split_party_roles);
    let facts = FactBuilder::new(&mut registry, &purposes).build(&input.settlement);
    log::debug!(
        "Fact building complete: {} facts, {} parties",
        facts.len(),
        registry.len()
    );

    let facts = UnenrichedFacts::new(facts)
        .apply_status_reports(&input.status)
        .apply_statements(&input.statement)
        .into_facts();

    let status_dimension = code_dimension(
        &facts,
        |fact| fact.status_code.as_deref(),
        mappings::status_description,
    );
    let currency_dimension = code_dimension(&facts, |fact| fact.currency_code.as_deref(), |_| None);
    let purpose_dimension = code_dimension(
        &facts,
        |fact| fact.purpose_code.as_deref(),
        mappings::purpose_description,
    );
    let time_dimension = time_dimension(&facts);

    return Mart {
        facts,
        parties: registry.into_tables(),
        status_dimension,
        currency_dimension,
        purpose_dimension,
        time_dimension,
    };
}
