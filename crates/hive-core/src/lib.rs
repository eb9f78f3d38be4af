//! `hive-core` — foundational types for the `rust_hive` swarm simulator.
//!
//! This crate is a dependency of every other `hive-*` crate.  It has no
//! `hive-*` dependencies and only `rand` and `thiserror` externally, plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point`, `Heading`, Euclidean [`distance`]            |
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Tick`, `Kinematics`                                  |
//! | [`rng`]         | `AgentRng` (per-agent)                                |
//! | [`config`]      | `SwarmConfig`, `ShutdownPolicy`                       |
//! | [`error`]       | `HiveError`, `HiveResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ShutdownPolicy, SwarmConfig};
pub use error::{HiveError, HiveResult};
pub use geo::{Heading, Point, distance};
pub use ids::AgentId;
pub use rng::AgentRng;
pub use time::{Kinematics, Tick};
