//! Ability definitions and in-flight abilities.
//!
//! `AbilitySpec` is the static cost/fuse/radius data for a kind and lives
//! in the `RuleTable`. A `PendingAbility` is one activation waiting for its
//! fuse to run out.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Position, Side};

/// Ability kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbilityKind {
    /// Delayed blast that removes enemy pieces around its target.
    Bomb,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 1] = [AbilityKind::Bomb];

    /// Rules-file name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AbilityKind::Bomb => "bomb",
        }
    }
}

impl std::fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbilityKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbilityKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::Parse(format!("unknown ability `{s}`")))
    }
}

/// Static data for one ability kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilitySpec {
    /// Elixir spent on activation.
    pub cost: u8,

    /// Plies until resolution.
    pub fuse: u8,

    /// Chebyshev radius of the affected area.
    pub radius: u8,
}

impl AbilitySpec {
    /// The standard bomb: cost 4, fuse 4, 3x3 blast.
    pub const BOMB: AbilitySpec = AbilitySpec {
        cost: 4,
        fuse: 4,
        radius: 1,
    };

    #[must_use]
    pub const fn new(cost: u8, fuse: u8, radius: u8) -> Self {
        Self { cost, fuse, radius }
    }

    /// Check the spec against the elixir capacity.
    pub fn validate(&self, kind: AbilityKind, max_elixir: u8) -> Result<(), ConfigError> {
        if self.fuse == 0 {
            return Err(ConfigError::InvalidAbility {
                kind,
                reason: "fuse must be positive".to_string(),
            });
        }
        if self.cost > max_elixir {
            return Err(ConfigError::InvalidAbility {
                kind,
                reason: format!("cost {} exceeds elixir capacity {}", self.cost, max_elixir),
            });
        }
        Ok(())
    }
}

/// Identifier for an activation, allocated in activation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AbilityId(pub u32);

impl AbilityId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ability({})", self.0)
    }
}

/// An activated ability waiting on its fuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingAbility {
    pub id: AbilityId,
    pub kind: AbilityKind,
    pub owner: Side,
    pub target: Position,

    /// Plies left before resolution.
    pub fuse: u8,

    pub radius: u8,

    /// Ply in which the ability was activated.
    pub activated_ply: u32,
}

impl PendingAbility {
    /// Whether the fuse has run out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.fuse == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(AbilityKind::Bomb.to_string(), "bomb");
        assert_eq!("bomb".parse::<AbilityKind>().unwrap(), AbilityKind::Bomb);
        assert!("freeze".parse::<AbilityKind>().is_err());
    }

    #[test]
    fn test_bomb_spec() {
        assert_eq!(AbilitySpec::BOMB, AbilitySpec::new(4, 4, 1));
        assert!(AbilitySpec::BOMB.validate(AbilityKind::Bomb, 10).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_fuse() {
        let spec = AbilitySpec::new(2, 0, 1);
        assert!(matches!(
            spec.validate(AbilityKind::Bomb, 10),
            Err(ConfigError::InvalidAbility { kind: AbilityKind::Bomb, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unaffordable() {
        let spec = AbilitySpec::new(11, 4, 1);
        assert!(spec.validate(AbilityKind::Bomb, 10).is_err());
    }
}
