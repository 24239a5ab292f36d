use std::fmt;

use serde::Serialize;

/// Composite payment identifier: message id and instruction id joined with a
/// separator. Unique across a run by upstream document uniqueness; it is the
/// join key for downstream enrichment.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaymentId(pub String);

impl PaymentId {
    pub fn new(msg_id: &str, instr_id: &str) -> Self {
        return Self(format!("{msg_id}-{instr_id}"));
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
