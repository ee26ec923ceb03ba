//! Match control.
//!
//! - `Match`: turn order, the ply cycle, clocks and termination
//! - `MatchBuilder`: validated construction from rules and a layout
//! - `MatchResult`: the final outcome handed to the results screen
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use rune_rift::core::Side;
//! use rune_rift::game::{EndReason, MatchBuilder, Winner};
//!
//! let mut game = MatchBuilder::standard().unwrap().build().unwrap();
//! game.advance_clock(Duration::from_secs(600));
//!
//! let result = game.result().unwrap();
//! assert_eq!(result.winner, Winner::Black);
//! assert_eq!(result.reason, EndReason::Timeout);
//! assert_eq!(result.time_remaining(Side::White), Duration::ZERO);
//! ```

mod builder;
mod clock;
mod controller;
mod result;

pub use builder::MatchBuilder;
pub use clock::{format_clock, MatchClock};
pub use controller::{Match, MatchPhase};
pub use result::{EndReason, MatchResult, Winner};
