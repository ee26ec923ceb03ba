//! Movement profiles: declarative per-type movement and capture data.
//!
//! A profile is an ordered list of `MovePattern`s plus a `CaptureRule`.
//! The move resolver expands patterns against a board; nothing in this
//! module looks at a board.
//!
//! ## Pattern kinds
//!
//! - `Leap`: a single offset that ignores anything in between.
//! - `Slide`: repeat a step until blocked, off the board, or out of range.
//! - `Ranged`: a line-of-sight shot at the first enemy within range.
//!
//! ## Example
//!
//! ```
//! use rune_rift::pieces::{MovePattern, MovementProfile, Symmetry};
//!
//! let rook = MovementProfile::new()
//!     .with_pattern(MovePattern::slide(1, 0).with_symmetry(Symmetry::Rotate));
//!
//! assert_eq!(rook.expanded().patterns.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::PieceType;
use crate::core::ConfigError;

/// Largest offset magnitude a pattern may declare; no board is wider.
pub const MAX_OFFSET: i32 = u8::MAX as i32;

/// How a pattern walks the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Leap,
    Slide,
    Ranged,
}

/// Which destinations a pattern may produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveMode {
    /// Empty cells and enemy-occupied cells.
    #[default]
    Any,
    /// Empty cells only.
    MoveOnly,
    /// Enemy-occupied cells only.
    CaptureOnly,
}

/// Shorthand for declaring a pattern with its mirror images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symmetry {
    #[default]
    None,
    /// The pattern and its left-right reflection.
    Mirror,
    /// The four quarter-turn rotations.
    Rotate,
    /// All eight reflections and rotations.
    All,
}

/// One movement rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovePattern {
    pub kind: PatternKind,

    pub dx: i32,

    /// Vertical step from White's point of view.
    pub dy: i32,

    /// Maximum number of steps for slides and shots. `None` is unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<u8>,

    #[serde(default)]
    pub mode: MoveMode,

    /// Only usable while the piece has not moved.
    #[serde(default)]
    pub initial_only: bool,

    #[serde(default)]
    pub symmetry: Symmetry,
}

impl MovePattern {
    fn with_kind(kind: PatternKind, dx: i32, dy: i32) -> Self {
        Self {
            kind,
            dx,
            dy,
            range: None,
            mode: MoveMode::Any,
            initial_only: false,
            symmetry: Symmetry::None,
        }
    }

    /// A single-offset jump.
    #[must_use]
    pub fn leap(dx: i32, dy: i32) -> Self {
        Self::with_kind(PatternKind::Leap, dx, dy)
    }

    /// A repeated step, unlimited unless `with_range` is applied.
    #[must_use]
    pub fn slide(dx: i32, dy: i32) -> Self {
        Self::with_kind(PatternKind::Slide, dx, dy)
    }

    /// A line-of-sight shot with a maximum range.
    #[must_use]
    pub fn ranged(dx: i32, dy: i32, range: u8) -> Self {
        Self::with_kind(PatternKind::Ranged, dx, dy).with_range(range)
    }

    #[must_use]
    pub fn with_range(mut self, range: u8) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn move_only(mut self) -> Self {
        self.mode = MoveMode::MoveOnly;
        self
    }

    #[must_use]
    pub fn capture_only(mut self) -> Self {
        self.mode = MoveMode::CaptureOnly;
        self
    }

    #[must_use]
    pub fn initial_only(mut self) -> Self {
        self.initial_only = true;
        self
    }

    #[must_use]
    pub fn with_symmetry(mut self, symmetry: Symmetry) -> Self {
        self.symmetry = symmetry;
        self
    }

    /// Concrete patterns this declaration stands for.
    ///
    /// Order is fixed: the declared offset first, then its images in the
    /// order (dy,dx), (-dx,dy), (-dy,dx), (dx,-dy), (dy,-dx), (-dx,-dy),
    /// (-dy,-dx), restricted to the requested symmetry. Duplicates keep
    /// their first position.
    #[must_use]
    pub fn variants(&self) -> SmallVec<[MovePattern; 8]> {
        let (dx, dy) = (self.dx, self.dy);
        let offsets: SmallVec<[(i32, i32); 8]> = match self.symmetry {
            Symmetry::None => smallvec::smallvec![(dx, dy)],
            Symmetry::Mirror => smallvec::smallvec![(dx, dy), (-dx, dy)],
            Symmetry::Rotate => smallvec::smallvec![(dx, dy), (-dy, dx), (-dx, -dy), (dy, -dx)],
            Symmetry::All => smallvec::smallvec![
                (dx, dy),
                (dy, dx),
                (-dx, dy),
                (-dy, dx),
                (dx, -dy),
                (dy, -dx),
                (-dx, -dy),
                (-dy, -dx),
            ],
        };

        let mut out: SmallVec<[MovePattern; 8]> = SmallVec::new();
        for (vx, vy) in offsets {
            if out.iter().any(|p| p.dx == vx && p.dy == vy) {
                continue;
            }
            out.push(MovePattern {
                dx: vx,
                dy: vy,
                symmetry: Symmetry::None,
                ..*self
            });
        }
        out
    }

    /// Step limit for this pattern on a board whose longest side is `span`.
    #[must_use]
    pub fn max_steps(&self, span: i32) -> i32 {
        match self.kind {
            PatternKind::Leap => 1,
            PatternKind::Slide | PatternKind::Ranged => {
                self.range.map_or(span, |r| i32::from(r).min(span))
            }
        }
    }

    fn validate(&self, piece_type: PieceType) -> Result<(), ConfigError> {
        if self.dx == 0 && self.dy == 0 {
            return Err(ConfigError::InvalidPattern {
                piece_type,
                reason: "zero offset".to_string(),
            });
        }
        let limit = MAX_OFFSET.unsigned_abs();
        if self.dx.unsigned_abs() > limit || self.dy.unsigned_abs() > limit {
            return Err(ConfigError::InvalidPattern {
                piece_type,
                reason: format!("offset ({}, {}) exceeds {MAX_OFFSET}", self.dx, self.dy),
            });
        }
        if self.range == Some(0) {
            return Err(ConfigError::InvalidPattern {
                piece_type,
                reason: "range must be positive".to_string(),
            });
        }
        if self.kind == PatternKind::Ranged && self.mode == MoveMode::MoveOnly {
            return Err(ConfigError::InvalidPattern {
                piece_type,
                reason: "ranged patterns cannot be move-only".to_string(),
            });
        }
        Ok(())
    }
}

/// How a type captures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapturePolicy {
    /// Moving onto an enemy removes it.
    #[default]
    Displacement,
    /// Never captures by moving; only abilities remove enemies.
    AreaEffect,
}

/// Capture policy plus per-type restrictions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRule {
    #[serde(default)]
    pub policy: CapturePolicy,

    /// Types this piece may never capture by displacement.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub exempt: SmallVec<[PieceType; 2]>,
}

impl CaptureRule {
    /// Capture only through abilities.
    #[must_use]
    pub fn area_effect() -> Self {
        Self {
            policy: CapturePolicy::AreaEffect,
            exempt: SmallVec::new(),
        }
    }

    /// Add an exempt target type.
    #[must_use]
    pub fn with_exempt(mut self, target: PieceType) -> Self {
        self.exempt.push(target);
        self
    }

    /// Whether this type may displace a piece of `target` type.
    #[must_use]
    pub fn permits(&self, target: PieceType) -> bool {
        self.policy == CapturePolicy::Displacement && !self.exempt.contains(&target)
    }
}

/// Movement and capture data for one piece type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementProfile {
    pub patterns: SmallVec<[MovePattern; 8]>,

    #[serde(default)]
    pub capture: CaptureRule,
}

impl MovementProfile {
    /// Create an empty profile (a piece that cannot move).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: MovePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Set the capture rule.
    #[must_use]
    pub fn with_capture(mut self, capture: CaptureRule) -> Self {
        self.capture = capture;
        self
    }

    /// Replace every symmetric declaration with its concrete variants.
    #[must_use]
    pub fn expanded(&self) -> Self {
        Self {
            patterns: self.patterns.iter().flat_map(MovePattern::variants).collect(),
            capture: self.capture.clone(),
        }
    }

    /// Check every pattern.
    pub fn validate(&self, piece_type: PieceType) -> Result<(), ConfigError> {
        self.patterns.iter().try_for_each(|p| p.validate(piece_type))
    }
}
