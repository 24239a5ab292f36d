use std::fmt;

use serde::Serialize;

/// Stable synthetic identity for a deduplicated counterparty, formatted as a
/// role-prefixed zero-padded counter (`D00001`, `C00001`, or `P00001` in
/// merged mode)
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartyId(pub String);

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
