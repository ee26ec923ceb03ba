//! Elixir and abilities.
//!
//! - `ElixirPool`: a side's bounded, regenerating resource
//! - `AbilitySpec`: cost, fuse and radius for one `AbilityKind`
//! - `AbilityManager`: activates abilities and resolves them when their
//!   fuse runs out
//!
//! Abilities are the only way an area-effect piece type takes anything,
//! and the only capture that does not involve a move.

mod ability;
mod elixir;
mod manager;

pub use ability::{AbilityId, AbilityKind, AbilitySpec, PendingAbility};
pub use elixir::ElixirPool;
pub use manager::{AbilityManager, AbilityResolution};
