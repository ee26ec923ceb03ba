//! Rules-file loading.
//!
//! A rules file is TOML with four parts: `[match]` settings, the `royal`
//! type, `[pieces.<type>]` profiles and `[abilities.<kind>]` specs, plus an
//! optional `[layout]` for the starting position. Everything is validated
//! here so a bad file fails before any match is built.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::kind::PieceType;
use super::profile::MovementProfile;
use super::table::RuleTable;
use crate::board::Layout;
use crate::core::{ConfigError, MatchConfig};
use crate::effects::{AbilityKind, AbilitySpec};

/// The bundled RuneRift rules.
pub const STANDARD_RULES: &str = include_str!("../../data/rune_rift.toml");

#[derive(Debug, Deserialize)]
struct RulesDocument {
    #[serde(default, rename = "match")]
    match_config: MatchConfig,

    #[serde(default)]
    royal: Option<PieceType>,

    #[serde(default)]
    pieces: BTreeMap<String, MovementProfile>,

    #[serde(default)]
    abilities: BTreeMap<String, AbilitySpec>,

    #[serde(default)]
    layout: Option<Layout>,
}

/// A parsed and validated rules file.
#[derive(Clone, Debug)]
pub struct RulesFile {
    pub config: MatchConfig,
    pub table: RuleTable,
    pub layout: Option<Layout>,
}

impl RulesFile {
    /// Parse rules from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let doc: RulesDocument = toml::from_str(text)?;
        doc.match_config.validate()?;

        let mut table = RuleTable::new();
        for (name, profile) in doc.pieces {
            let piece_type: PieceType = name.parse()?;
            table.register(piece_type, profile)?;
        }
        for (name, spec) in doc.abilities {
            let kind: AbilityKind = name.parse()?;
            table.register_ability(kind, spec, doc.match_config.max_elixir)?;
        }

        if let Some(royal) = doc.royal {
            table.require_profiles([royal])?;
        }
        table.set_royal(doc.royal);

        if let Some(layout) = &doc.layout {
            layout.validate(doc.match_config.width)?;
            table.require_profiles(layout.piece_types())?;
        }

        tracing::debug!(
            profiles = table.len(),
            royal = ?table.royal(),
            has_layout = doc.layout.is_some(),
            "loaded rules"
        );

        Ok(Self {
            config: doc.match_config,
            table,
            layout: doc.layout,
        })
    }

    /// Read and parse a rules file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The bundled rules.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::from_toml_str(STANDARD_RULES)
    }
}
