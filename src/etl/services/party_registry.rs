use crate::extract::PartyFields;
use crate::ids::PartyId;
use crate::models::{Party, PartyTables};

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    Debtor,
    Creditor,
}

impl PartyRole {
    fn prefix(self) -> &'static str {
        return match self {
            Self::Debtor => "D",
            Self::Creditor => "C",
        };
    }
}

/// Identity key: role prefix plus name and account number, absent values as
/// empty strings
type PartyKey = (&'static str, String, String);

/// Deduplicating store mapping a (name, account) pair to a stable synthetic
/// PartyID, optionally partitioned by role. IDs are allocated at first sight,
/// monotonically per prefix; the stored triplet (including country) comes
/// from the first sighting only — later sightings with a different country
/// are not reconciled. No eviction, lives for one pipeline run.
#[derive(Debug, Default)]
pub struct PartyRegistry {
    split_roles: bool,
    parties: HashMap<PartyKey, Party>,
    counters: HashMap<&'static str, u32>,
}

impl PartyRegistry {
    pub fn new(split_roles: bool) -> Self {
        return Self {
            split_roles,
            ..Self::default()
        };
    }

    /// Idempotent for an identical (role, name, account) key within a run;
    /// a new key allocates the next counter value for its prefix
    pub fn resolve(&mut self, role: PartyRole, fields: PartyFields) -> PartyId {
        let prefix = if self.split_roles { role.prefix() } else { "P" };
        let key = (
            prefix,
            fields.name.clone().unwrap_or_default(),
            fields.account.clone().unwrap_or_default(),
        );

        if let Some(party) = self.parties.get(&key) {
            return party.party_id.clone();
        }

        let counter = self.counters.entry(prefix).or_insert(0);
        *counter += 1;

        let party_id = PartyId(format!("{prefix}{:05}", counter));
        log::debug!("Registered new party {party_id} for {fields:?}");

        self.parties.insert(
            key,
            Party {
                party_id: party_id.clone(),
                name: fields.name,
                account_number: fields.account,
                country_code: fields.country,
            },
        );

        return party_id;
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the registry as output table(s), sorted by PartyID
    pub fn into_tables(self) -> PartyTables {
        let split_roles = self.split_roles;

        let mut parties: Vec<Party> = self.parties.into_values().collect();
        parties.sort_by(|a, b| a.party_id.cmp(&b.party_id));

        if !split_roles {
            return PartyTables::Merged(parties);
        }

        let (debtors, creditors) = parties
            .into_iter()
            .partition(|party| party.party_id.0.starts_with('D'));

        return PartyTables::Split { debtors, creditors };
    }
}
