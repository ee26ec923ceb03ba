//! Rule table: movement profiles and ability specs keyed by type.
//!
//! The `RuleTable` is immutable once a match starts. The engine is generic
//! over its contents: adding a piece type's behavior is a data change.

use rustc_hash::FxHashMap;

use super::kind::PieceType;
use super::loader::RulesFile;
use super::profile::MovementProfile;
use crate::core::ConfigError;
use crate::effects::{AbilityKind, AbilitySpec};

/// Per-type movement and per-kind ability configuration.
///
/// ## Example
///
/// ```
/// use rune_rift::pieces::{MovePattern, MovementProfile, PieceType, RuleTable, Symmetry};
///
/// let mut table = RuleTable::new();
/// table
///     .register(
///         PieceType::Knight,
///         MovementProfile::new().with_pattern(MovePattern::leap(2, 1).with_symmetry(Symmetry::All)),
///     )
///     .unwrap();
///
/// assert_eq!(table.profile(PieceType::Knight).unwrap().patterns.len(), 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    profiles: FxHashMap<PieceType, MovementProfile>,
    abilities: FxHashMap<AbilityKind, AbilitySpec>,
    royal: Option<PieceType>,
}

impl RuleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled RuneRift rules.
    pub fn standard() -> Result<Self, ConfigError> {
        Ok(RulesFile::standard()?.table)
    }

    /// Register a movement profile, replacing any previous one.
    ///
    /// Symmetric patterns are expanded here, so lookups always see concrete
    /// patterns in their enumeration order.
    pub fn register(&mut self, piece_type: PieceType, profile: MovementProfile) -> Result<(), ConfigError> {
        profile.validate(piece_type)?;
        self.profiles.insert(piece_type, profile.expanded());
        Ok(())
    }

    /// Register an ability spec, checked against the elixir capacity.
    pub fn register_ability(
        &mut self,
        kind: AbilityKind,
        spec: AbilitySpec,
        max_elixir: u8,
    ) -> Result<(), ConfigError> {
        spec.validate(kind, max_elixir)?;
        self.abilities.insert(kind, spec);
        Ok(())
    }

    /// Designate the royal type. Losing it ends the match.
    pub fn set_royal(&mut self, royal: Option<PieceType>) {
        self.royal = royal;
    }

    /// Builder form of `set_royal`.
    #[must_use]
    pub fn with_royal(mut self, royal: PieceType) -> Self {
        self.royal = Some(royal);
        self
    }

    /// The royal type, if the rules designate one.
    #[must_use]
    pub fn royal(&self) -> Option<PieceType> {
        self.royal
    }

    /// Get a movement profile.
    #[must_use]
    pub fn profile(&self, piece_type: PieceType) -> Option<&MovementProfile> {
        self.profiles.get(&piece_type)
    }

    /// Check if a type has a profile.
    #[must_use]
    pub fn contains(&self, piece_type: PieceType) -> bool {
        self.profiles.contains_key(&piece_type)
    }

    /// Get an ability spec.
    #[must_use]
    pub fn ability(&self, kind: AbilityKind) -> Option<&AbilitySpec> {
        self.abilities.get(&kind)
    }

    /// The cheapest configured ability, ties broken by kind order.
    #[must_use]
    pub fn cheapest_ability(&self) -> Option<(AbilityKind, AbilitySpec)> {
        self.abilities
            .iter()
            .map(|(&k, &s)| (k, s))
            .min_by_key(|(k, s)| (s.cost, *k))
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if no profiles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Fail unless every given type has a profile.
    pub fn require_profiles(&self, types: impl IntoIterator<Item = PieceType>) -> Result<(), ConfigError> {
        for piece_type in types {
            if !self.contains(piece_type) {
                return Err(ConfigError::MissingProfile(piece_type));
            }
        }
        Ok(())
    }
}
