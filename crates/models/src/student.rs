use serde::{Deserialize, Serialize};

/// The publicly visible identity of a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Social security number (kennitala), unique per student
    pub ssn: String,
    pub name: String,
}

/// A waiting list entry, which only exposes the student's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingStudent {
    pub name: String,
}

