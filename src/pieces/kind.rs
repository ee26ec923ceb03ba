//! Piece types.
//!
//! The set of unit types is closed; how each one moves is not. Movement
//! and capture behavior is looked up in the `RuleTable`, never matched on
//! here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// A unit type.
///
/// Declaration order is the canonical ordering used when grouping
/// captured pieces for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceType {
    RoyalRecruits,
    Musketeer,
    Knight,
    DarkPrince,
    Witch,
    RoyalGiant,
}

impl PieceType {
    /// All piece types in declaration order.
    pub const ALL: [PieceType; 6] = [
        PieceType::RoyalRecruits,
        PieceType::Musketeer,
        PieceType::Knight,
        PieceType::DarkPrince,
        PieceType::Witch,
        PieceType::RoyalGiant,
    ];

    /// Rules-file name (kebab-case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PieceType::RoyalRecruits => "royal-recruits",
            PieceType::Musketeer => "musketeer",
            PieceType::Knight => "knight",
            PieceType::DarkPrince => "dark-prince",
            PieceType::Witch => "witch",
            PieceType::RoyalGiant => "royal-giant",
        }
    }

    /// Label shown on the piece guide and results screen.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            PieceType::RoyalRecruits => "ROYAL RECRUITS",
            PieceType::Musketeer => "MUSKETEER",
            PieceType::Knight => "KNIGHT",
            PieceType::DarkPrince => "DARK PRINCE",
            PieceType::Witch => "WITCH",
            PieceType::RoyalGiant => "ROYAL GIANT",
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::Parse(format!("unknown piece type `{s}`")))
    }
}
