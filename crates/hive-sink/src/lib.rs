//! `hive-sink` — the single shared text stream all agents report to.
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`sink`]    | `Sink<W>`, `Delivery`                     |
//! | [`error`]   | `SinkError`, `SinkResult<T>`              |
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use hive_sink::Sink;
//!
//! let sink = Arc::new(Sink::new(Vec::new()));
//! sink.emit("Wanderer #0 at 1.000000, 0.000000").unwrap();
//! sink.shutdown("=== STOP ===").unwrap();
//! assert_eq!(sink.lines_written(), 2);
//! ```

pub mod error;
pub mod sink;


pub use error::{SinkError, SinkResult};
pub use sink::{Delivery, Sink};
