//! `hive-sim` — the swarm driver for the rust_hive simulator.
//!
//! # Run model
//!
//! ```text
//! build roster (SwarmBuilder)
//! for each agent:        spawn thread "agent-<id>"
//!                          loop { advance → emit report → sleep(tick) }
//! driver:                sleep(run_duration)
//!                        sink.shutdown("=== STOP ===")
//!                        Abandon  → detach all agent threads
//!                        Graceful → raise StopSignal, await acks ≤ timeout
//! ```
//!
//! Agents never coordinate: each owns its state outright and the only shared
//! resource is the [`Sink`][hive_sink::Sink].  There is no ordering between
//! different agents' reports; each agent's own reports are in tick order.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hive_core::{Point, SwarmConfig};
//! use hive_sim::SwarmBuilder;
//! use hive_sink::Sink;
//!
//! let summary = SwarmBuilder::new(SwarmConfig::default(), Arc::new(Sink::stdout()))
//!     .shuttle(Point::new(2.0, 3.0))
//!     .wanderer(Point::new(4.0, 1.0))
//!     .build()?
//!     .run()?;
//! ```

pub mod builder;
pub mod error;
pub mod signal;
pub mod swarm;

#[cfg(test)]
mod tests;

pub use builder::{RosterEntry, SwarmBuilder};
pub use error::{SimError, SimResult};
pub use signal::StopSignal;
pub use swarm::{RunSummary, STOP_MARKER, Swarm};
