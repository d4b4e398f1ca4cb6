use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle of one "clean this text" action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}
