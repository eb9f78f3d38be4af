//! hive — runs the fixed four-agent swarm for ten seconds.
//!
//! Two Shuttles commute between their homes and the origin while two
//! Wanderers drift along random headings.  Every agent ticks once a second on
//! its own thread and prints its position to stdout; after the run the
//! driver prints `=== STOP ===` and exits without waiting for the agents.
//! Diagnostics go to stderr.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use hive_core::{Point, ShutdownPolicy, SwarmConfig};
use hive_sim::{RosterEntry, SwarmBuilder};
use hive_sink::Sink;

// ── Constants ─────────────────────────────────────────────────────────────────

const SPEED:                  f64 = 1.0;   // units per second
const TICK_MS:                u64 = 1_000;
const HEADING_INTERVAL_TICKS: u32 = 3;
const SIM_TIME_SECS:          u64 = 10;

const ROSTER: [RosterEntry; 4] = [
    RosterEntry::Shuttle  { home:  Point::new(2.0, 3.0) },
    RosterEntry::Shuttle  { home:  Point::new(-3.0, -3.0) },
    RosterEntry::Wanderer { start: Point::new(0.0, 0.0) },
    RosterEntry::Wanderer { start: Point::new(4.0, 1.0) },
];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // 1. Diagnostics on stderr so stdout carries only report lines.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    // 2. Swarm config.  Wanderers are seeded from OS entropy.
    let config = SwarmConfig {
        speed:                  SPEED,
        tick:                   Duration::from_millis(TICK_MS),
        heading_interval_ticks: HEADING_INTERVAL_TICKS,
        run_duration:           Duration::from_secs(SIM_TIME_SECS),
        seed:                   None,
        shutdown:               ShutdownPolicy::Abandon,
    };

    // 3. Build and run.
    let sink = Arc::new(Sink::stdout());
    let summary = SwarmBuilder::new(config, sink)
        .roster(ROSTER)
        .build()?
        .run()?;

    info!(
        agents = summary.agents,
        reports = summary.reports,
        "simulation finished in {:.3} s",
        summary.slept.as_secs_f64()
    );
    Ok(())
}
