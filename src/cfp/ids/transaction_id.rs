use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier handed out by whatever stores the transactions.
/// Records that were never persisted carry an empty id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn is_assigned(&self) -> bool {
        return !self.0.is_empty();
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_assigned() {
            return write!(f, "<unassigned>");
        }

        return write!(f, "{}", self.0);
    }
}
