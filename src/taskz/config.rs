use serde::{Deserialize, Serialize};

use crate::schedule::RecurrenceAnchor;

/// Engine configuration, injected into [`TaskzApi`](crate::api::TaskzApi)
/// at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskzConfig {
    /// Which instant recurrence offsets are computed from.
    #[serde(default)]
    pub recurrence_anchor: RecurrenceAnchor,
}
