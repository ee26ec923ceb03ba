//! Movement rules.
//!
//! `MoveResolver` turns the data in a `RuleTable` into legal destinations
//! and applies validated moves to a `Board`. It holds no state of its own.

mod resolver;

pub use resolver::MoveResolver;
