use crate::document::Node;

use chrono::{DateTime, NaiveDateTime};

/// Name / account / country triplet for one side of a payment, as sighted in
/// a single document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyFields {
    pub name: Option<String>,
    pub account: Option<String>,
    pub country: Option<String>,
}

/// Extracts the amount and currency of a transaction, trying the known
/// encodings in priority order:
///
/// 1. `IntrBkSttlmAmt` — the settlement amount, authoritative when present
///    (it reflects what actually moved)
/// 2. `InstdAmt` — the payer's instructed amount
/// 3. a generic `Amt` container — first a nested `InstdAmt` child, then the
///    container's own value and `Ccy` attribute
///
/// A candidate only matches when both the value and the currency attribute
/// are present. No match yields `(None, None)`.
pub fn amount_and_currency(transaction: &Node) -> (Option<String>, Option<String>) {
    if let Some(pair) = amount_pair(transaction.find("IntrBkSttlmAmt")) {
        return pair;
    }

    if let Some(pair) = amount_pair(transaction.find("InstdAmt")) {
        return pair;
    }

    if let Some(container) = transaction.find("Amt") {
        if let Some(pair) = amount_pair(container.find("InstdAmt")) {
            return pair;
        }

        if let Some(pair) = amount_pair(Some(container)) {
            return pair;
        }
    }

    (None, None)
}

fn amount_pair(node: Option<&Node>) -> Option<(Option<String>, Option<String>)> {
    let node = node?;

    match (node.text.as_ref(), node.attr("Ccy")) {
        (Some(amount), Some(currency)) => {
            Some((Some(amount.clone()), Some(currency.to_string())))
        }
        _ => None,
    }
}

/// Extracts the payer triplet, preferring values attached to the individual
/// transaction and falling back per-field to the enclosing message (bulk
/// messages usually declare the payer once at message level)
pub fn payer_triplet(message: &Node, transaction: &Node) -> PartyFields {
    PartyFields {
        name: fallback_text(transaction, message, "Dbtr/Nm"),
        account: fallback_text(transaction, message, "DbtrAcct/Id/IBAN"),
        country: fallback_text(transaction, message, "Dbtr/PstlAdr/Ctry"),
    }
}

/// Extracts the payee triplet from the transaction only; payees are not
/// expected at message level
pub fn payee_triplet(transaction: &Node) -> PartyFields {
    PartyFields {
        name: transaction.text("Cdtr/Nm").map(str::to_string),
        account: transaction.text("CdtrAcct/Id/IBAN").map(str::to_string),
        country: transaction.text("Cdtr/PstlAdr/Ctry").map(str::to_string),
    }
}

/// Extracts an agent BIC under `agent_tag` (`DbtrAgt` or `CdtrAgt`). Message
/// sub-variants spell the identifier `BICFI` or `BIC`; both are tried.
pub fn agent_bic(node: &Node, agent_tag: &str) -> Option<String> {
    let bicfi = format!("{agent_tag}/FinInstnId/BICFI");
    let bic = format!("{agent_tag}/FinInstnId/BIC");

    node.text(&bicfi)
        .or_else(|| node.text(&bic))
        .map(str::to_string)
}

/// Safely parses an ISO 8601 timestamp like `2025-09-24T13:22:11Z`, with or
/// without offset and fractional seconds. Returns `None` when parsing fails.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.naive_utc());
    }

    let stripped = trimmed.trim_end_matches('Z');
    NaiveDateTime::parse_from_str(stripped, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Normalizes a cross-document join key: trim and uppercase. Applied to every
/// reference used to correlate documents, protecting against case and
/// whitespace divergence between producing systems.
pub fn normalize_reference(value: &str) -> String {
    value.trim().to_uppercase()
}

fn fallback_text(transaction: &Node, message: &Node, path: &str) -> Option<String> {
    transaction
        .text(path)
        .or_else(|| message.text(path))
        .map(str::to_string)
}
