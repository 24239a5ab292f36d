use crate::ids::PartyId;

use serde::Serialize;

/// One deduplicated counterparty row for the party dimension. Created once
/// per unique identity key, never mutated afterwards.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Party {
    #[serde(rename = "PartyID")]
    pub party_id: PartyId,

    #[serde(rename = "Name")]
    pub name: Option<String>,

    #[serde(rename = "IBAN")]
    pub account_number: Option<String>,

    #[serde(rename = "CountryCode")]
    pub country_code: Option<String>,
}

/// Party output is either one merged table or a debtor/creditor split,
/// depending on whether the registry partitions identities by role
#[derive(Debug, PartialEq)]
pub enum PartyTables {
    Merged(Vec<Party>),
    Split {
        debtors: Vec<Party>,
        creditors: Vec<Party>,
    },
}
