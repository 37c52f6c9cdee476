use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod person {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Person {
        pub person_id: i32,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PersonNew {
        pub name: String,
    }
}

pub mod outing {
    use std::fmt;

    use super::*;

    /// Public join code of an outing.
    ///
    /// The server hands out short lowercase hashids (e.g. `k3m9`) and never
    /// exposes the numeric database key. This is serialized as a plain string
    /// in JSON.
    #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct OutingId(String);

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct InvalidOutingId(pub String);

    impl fmt::Display for InvalidOutingId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "\"{}\" is not a valid join code", self.0)
        }
    }

    impl std::error::Error for InvalidOutingId {}

    impl OutingId {
        /// Parses user input into a join code.
        ///
        /// Codes are ASCII alphanumeric. Input is trimmed and lowercased since
        /// the hashid alphabet is lowercase only.
        pub fn parse(input: &str) -> Result<Self, InvalidOutingId> {
            let trimmed = input.trim();
            if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                return Err(InvalidOutingId(input.to_string()));
            }
            Ok(Self(trimmed.to_ascii_lowercase()))
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl fmt::Display for OutingId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Outing {
        pub outing_id: OutingId,
        /// RFC3339 timestamp (UTC) set by the server.
        pub created_at: DateTime<Utc>,
        pub name: String,
    }

    /// Outing plus the names of everyone who joined it.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct OutingDetails {
        pub outing_id: OutingId,
        pub created_at: DateTime<Utc>,
        pub name: String,
        pub people: Vec<String>,
    }

    /// Request body for creating an outing. The creator becomes its first
    /// participant.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct OutingNew {
        pub name: String,
        pub person_name: String,
    }

    /// Request body for `PUT /outings/:id/join`. Joining twice is a no-op.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct OutingJoin {
        pub name: String,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Balance {
        pub total: f64,
    }
}

pub mod expense {
    use super::*;
    use crate::outing::OutingId;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        pub expense_id: i32,
        pub created_at: DateTime<Utc>,
        pub outing_id: OutingId,
        pub person_name: String,
        pub amount: f64,
        pub description: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub outing_id: OutingId,
        pub person_name: String,
        pub amount: f64,
        pub description: Option<String>,
    }
}

pub mod settlement {
    use super::*;

    /// One suggested payment that zeroes out net balances.
    ///
    /// `P` identifies a participant. The server keys people by name, which is
    /// the default.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct SettlementTransfer<P = String> {
        pub from: P,
        pub to: P,
        pub amount: f64,
    }
}
