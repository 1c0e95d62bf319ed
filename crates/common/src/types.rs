use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settlement identifier, `order_<uuid>`.
///
/// The UUID is version 7, so its leading bits carry the settlement time
/// and ids sort roughly by when the order completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Stamps a fresh id from the current time.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}
