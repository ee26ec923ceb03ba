//! Match events for presentation collaborators.
//!
//! The engine never calls a renderer. It publishes `MatchEvent`s on an
//! `EventBus`; renderers, sound and the results screen subscribe or poll.

mod bus;
mod event;

pub use bus::{EventBus, SubscriberId};
pub use event::{CaptureCause, EventKind, MatchEvent};
