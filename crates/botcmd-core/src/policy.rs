//! Save policies
//!
//! Decides what a save does when every submitted line is blank.

use serde::{Deserialize, Serialize};

/// Behaviour of `save_responses` when filtering leaves zero lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySavePolicy {
    /// Fail with `EmptyResult` and leave the command untouched
    #[default]
    Reject,
    /// Remove the command entirely
    Delete,
}
