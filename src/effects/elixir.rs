//! Per-side elixir balance.

use serde::{Deserialize, Serialize};

use crate::core::ElixirError;

/// A bounded elixir balance.
///
/// The balance never leaves `[0, max]`: regeneration saturates at the cap
/// and a spend either succeeds in full or leaves the balance untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElixirPool {
    balance: u8,
    max: u8,
}

impl ElixirPool {
    /// Create a pool. The starting balance is clamped to `max`.
    #[must_use]
    pub fn new(start: u8, max: u8) -> Self {
        Self {
            balance: start.min(max),
            max,
        }
    }

    #[must_use]
    pub fn balance(&self) -> u8 {
        self.balance
    }

    #[must_use]
    pub fn max(&self) -> u8 {
        self.max
    }

    #[must_use]
    pub fn can_afford(&self, cost: u8) -> bool {
        self.balance >= cost
    }

    /// Spend `cost`, or fail without changing the balance.
    pub fn spend(&mut self, cost: u8) -> Result<(), ElixirError> {
        if !self.can_afford(cost) {
            return Err(ElixirError::InsufficientElixir {
                needed: cost,
                available: self.balance,
            });
        }
        self.balance -= cost;
        Ok(())
    }

    /// Add `amount`, capped at the maximum. Returns the amount gained.
    pub fn regenerate(&mut self, amount: u8) -> u8 {
        let before = self.balance;
        self.balance = self.balance.saturating_add(amount).min(self.max);
        self.balance - before
    }

    /// Overwrite the balance, clamped to the maximum.
    pub fn set(&mut self, balance: u8) {
        self.balance = balance.min(self.max);
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.balance == self.max
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balance == 0
    }
}

impl std::fmt::Display for ElixirPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.balance, self.max)
    }
}
