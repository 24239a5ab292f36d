use crate::document::Node;
use crate::extract::{self, normalize_reference};
use crate::models::PaymentFact;

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// Enrichment is a finite state-machine with the following structure:
///
/// UnenrichedFacts
/// -> apply_status_reports: StatusEnrichedFacts
///
/// StatusEnrichedFacts
/// -> apply_statements: EnrichedFacts
///
/// EnrichedFacts
/// -> into_facts
///
/// The status pass is authoritative and may overwrite a settlement date; the
/// statement pass is a fallback that only fills ones still unset. Encoding
/// the passes as consuming transitions makes that ordering an invariant
/// rather than a calling convention.
#[derive(Debug)]
pub struct UnenrichedFacts {
    facts: Vec<PaymentFact>,
    index: HashMap<String, usize>,
}

#[derive(Debug)]
pub struct StatusEnrichedFacts {
    facts: Vec<PaymentFact>,
    index: HashMap<String, usize>,
}

#[derive(Debug)]
pub struct EnrichedFacts {
    facts: Vec<PaymentFact>,
}

impl UnenrichedFacts {
    /// Indexes the fact builder's output by normalized end-to-end reference.
    /// Facts without a reference are unindexed and can never be enriched;
    /// the first fact wins when a reference is duplicated.
    pub fn new(facts: Vec<PaymentFact>) -> Self {
        let mut index = HashMap::new();

        for (idx, fact) in facts.iter().enumerate() {
            if let Some(reference) = fact.end_to_end_id.as_deref() {
                index.entry(normalize_reference(reference)).or_insert(idx);
            }
        }

        return Self { facts, index };
    }

    /// Status pass: merges status-report (pacs.002) data. Status reports are
    /// authoritative, so an acceptance timestamp overwrites any settlement
    /// date already present.
    pub fn apply_status_reports(mut self, documents: &[Node]) -> StatusEnrichedFacts {
        let mut matched = 0;

        for document in documents {
            for record in document.find_all("TxInfAndSts") {
                let Some(reference) = record.text("OrgnlEndToEndId") else {
                    continue;
                };
                let Some(&idx) = self.index.get(&normalize_reference(reference)) else {
                    continue;
                };

                let fact = &mut self.facts[idx];
                matched += 1;

                if let Some(status) = record.text("TxSts") {
                    fact.status_code = Some(status.to_string());
                }

                let acceptance = record
                    .text("AccptncDtTm")
                    .and_then(extract::parse_timestamp);
                if let Some(acceptance) = acceptance {
                    fact.settlement_date = Some(acceptance);
                    fact.processing_time_minutes = latency_minutes(fact.payment_date, acceptance);
                }
            }
        }

        log::debug!("Status pass matched {matched} report records");

        return StatusEnrichedFacts {
            facts: self.facts,
            index: self.index,
        };
    }
}

impl StatusEnrichedFacts {
    /// Statement pass: merges statement-entry (camt.054) data as a fallback
    /// confirmation source. An entry without any end-to-end reference element
    /// is skipped before lookup; a settlement date already set by the status
    /// pass is never overwritten.
    pub fn apply_statements(mut self, documents: &[Node]) -> EnrichedFacts {
        let mut matched = 0;

        for document in documents {
            for entry in document.find_all("Ntry") {
                let Some(reference) = entry.text("EndToEndId") else {
                    continue;
                };
                let Some(&idx) = self.index.get(&normalize_reference(reference)) else {
                    continue;
                };

                let fact = &mut self.facts[idx];
                if fact.settlement_date.is_some() {
                    continue;
                }

                let booked = entry
                    .text("BookgDt/DtTm")
                    .or_else(|| entry.text("ValDt/DtTm"))
                    .and_then(extract::parse_timestamp);
                if let Some(booked) = booked {
                    fact.settlement_date = Some(booked);
                    fact.processing_time_minutes = latency_minutes(fact.payment_date, booked);
                    matched += 1;
                }
            }
        }

        log::debug!("Statement pass filled {matched} settlement dates");

        return EnrichedFacts { facts: self.facts };
    }
}

impl EnrichedFacts {
    pub fn facts(&self) -> &[PaymentFact] {
        &self.facts
    }

    pub fn into_facts(self) -> Vec<PaymentFact> {
        return self.facts;
    }
}

/// Minutes between initiation and settlement, rounded to two decimals; `None`
/// without an initiation timestamp
fn latency_minutes(initiation: Option<NaiveDateTime>, settlement: NaiveDateTime) -> Option<f64> {
    let initiation = initiation?;

    let elapsed = settlement.signed_duration_since(initiation);
    let minutes = elapsed.num_milliseconds() as f64 / 60_000.0;

    Some((minutes * 100.0).round() / 100.0)
}
