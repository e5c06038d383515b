//! Value objects for the customer domain.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

/// A transfer of value between two parties.
///
/// Transactions have no identity of their own: two transactions with the
/// same amount, parties and timestamp are the same transaction. A positive
/// amount moves value from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    amount: i64,
    from: EntityId,
    to: EntityId,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction stamped with the current time.
    pub fn new(amount: i64, from: EntityId, to: EntityId) -> Self {
        Self::at(amount, from, to, Utc::now())
    }

    /// Creates a transaction with an explicit timestamp.
    pub fn at(amount: i64, from: EntityId, to: EntityId, created_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            from,
            to,
            created_at,
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn from(&self) -> EntityId {
        self.from
    }

    pub fn to(&self) -> EntityId {
        self.to
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
