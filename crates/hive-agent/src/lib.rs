//! `hive-agent` — the per-tick agent contract and its two motion models.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`model`]     | `Agent` trait, `AgentKind`                                 |
//! | [`report`]    | `Report` — one agent's position at one tick                |
//! | [`shuttle`]   | `Shuttle`, `Phase` — home ↔ origin commuter                |
//! | [`wanderer`]  | `Wanderer` — piecewise-linear random walk                  |
//!
//! # Design notes
//!
//! An agent is pure state plus one operation, [`Agent::advance`], which moves
//! it by one tick and returns the resulting [`Report`].  Agents never sleep,
//! lock, or write output themselves; the driver in `hive-sim` owns the
//! tick loop and the sink.  That keeps every motion rule testable by calling
//! `advance` in a plain loop.

pub mod model;
pub mod report;
pub mod shuttle;
pub mod wanderer;


pub use model::{Agent, AgentKind};
pub use report::Report;
pub use shuttle::{Phase, Shuttle};
pub use wanderer::Wanderer;
