//! Output contract for the moral-drift simulation engine.
//!
//! The engine hands one [`TickSnapshot`] per tick to whatever [`Collector`]
//! the caller supplies. Everything downstream of that handoff (plotting,
//! dataframes, batch statistics) is the caller's business, so this crate
//! stays limited to the serialization structs and a couple of ready-made
//! sinks.

pub mod collector;
pub mod snapshot;

pub use collector::{CollectError, Collector, JsonlCollector, MemoryCollector};
pub use snapshot::{generate_snapshot_id, CreatureSnapshot, TickSnapshot, TrustCounts};
