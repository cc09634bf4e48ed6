//! Technical details for a single device.

use serde::{Deserialize, Serialize};

/// A common fault with its remedy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Malfunction {
    /// Observed fault.
    pub fault: String,
    /// Suggested solution.
    pub solution: String,
}

impl Malfunction {
    /// Creates a new fault/solution pair.
    #[must_use]
    pub fn new(fault: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            fault: fault.into(),
            solution: solution.into(),
        }
    }
}

/// Principle of operation and troubleshooting table for a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDetails {
    /// Device name.
    pub name: String,
    /// Principle-of-operation text.
    pub principle: String,
    /// Known malfunctions.
    pub malfunctions: Vec<Malfunction>,
}
