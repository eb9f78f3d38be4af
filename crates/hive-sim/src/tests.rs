//! Integration tests for hive-sim.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use hive_agent::AgentKind;
use hive_core::{AgentId, Point, ShutdownPolicy, SwarmConfig};
use hive_sink::Sink;

use crate::{RosterEntry, STOP_MARKER, SimError, SwarmBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 5 ms ticks, seeded, running for `run_ms`.
fn fast_config(run_ms: u64, shutdown: ShutdownPolicy) -> SwarmConfig {
    SwarmConfig {
        speed:                  1.0,
        tick:                   Duration::from_millis(5),
        heading_interval_ticks: 3,
        run_duration:           Duration::from_millis(run_ms),
        seed:                   Some(42),
        shutdown,
    }
}

fn capture_sink() -> Arc<Sink<Vec<u8>>> {
    Arc::new(Sink::new(Vec::new()))
}

fn captured(sink: &Sink<Vec<u8>>) -> String {
    sink.with_writer(|buf| String::from_utf8(buf.clone()).expect("sink output is UTF-8"))
}

/// Refuses any write mentioning a Wanderer; everything else is captured.
struct NoWanderers(Vec<u8>);

impl Write for NoWanderers {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.windows(8).any(|w| w == b"Wanderer") {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "wanderer pipe closed"));
        }
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The roster the `hive` binary runs.
fn hive_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::Shuttle  { home:  Point::new(2.0, 3.0) },
        RosterEntry::Shuttle  { home:  Point::new(-3.0, -3.0) },
        RosterEntry::Wanderer { start: Point::new(0.0, 0.0) },
        RosterEntry::Wanderer { start: Point::new(4.0, 1.0) },
    ]
}

// ── SwarmBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn assigns_ids_in_roster_order() {
        let swarm = SwarmBuilder::new(fast_config(10, ShutdownPolicy::Abandon), capture_sink())
            .roster(hive_roster())
            .build()
            .unwrap();
        let kinds: Vec<_> = swarm.agents().iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            [AgentKind::Shuttle, AgentKind::Shuttle, AgentKind::Wanderer, AgentKind::Wanderer]
        );
        for (i, agent) in swarm.agents().iter().enumerate() {
            assert_eq!(agent.id(), AgentId(i as u32));
        }
        assert_eq!(swarm.agents()[3].position(), Point::new(4.0, 1.0));
    }

    #[test]
    fn fluent_methods_match_roster() {
        let swarm = SwarmBuilder::new(fast_config(10, ShutdownPolicy::Abandon), capture_sink())
            .shuttle(Point::new(2.0, 3.0))
            .wanderer(Point::new(1.0, 1.0))
            .build()
            .unwrap();
        assert_eq!(swarm.agents().len(), 2);
        assert_eq!(swarm.agents()[0].position(), Point::new(2.0, 3.0));
        assert_eq!(swarm.agents()[1].kind(), AgentKind::Wanderer);
    }

    #[test]
    fn invalid_config_errors() {
        let config = SwarmConfig { tick: Duration::ZERO, ..SwarmConfig::default() };
        let result = SwarmBuilder::new(config, capture_sink()).shuttle(Point::ORIGIN).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn overflowing_heading_interval_is_a_config_error() {
        let config = SwarmConfig {
            tick: Duration::from_secs(u64::MAX / 2),
            ..SwarmConfig::default()
        };
        let result = SwarmBuilder::new(config, capture_sink()).wanderer(Point::ORIGIN).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn seeded_wanderers_are_reproducible() {
        let build = || {
            SwarmBuilder::new(fast_config(10, ShutdownPolicy::Abandon), capture_sink())
                .wanderer(Point::ORIGIN)
                .build()
                .unwrap()
        };
        let mut a = build();
        let mut b = build();
        let pa = a.agents[0].advance().position;
        let pb = b.agents[0].advance().position;
        assert_eq!(pa, pb);
    }
}

// ── Swarm::run ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn stop_marker_written_once_and_last() {
        let sink = capture_sink();
        let summary = SwarmBuilder::new(fast_config(60, ShutdownPolicy::Abandon), Arc::clone(&sink))
            .roster(hive_roster())
            .build()
            .unwrap()
            .run()
            .unwrap();

        let text = captured(&sink);
        assert_eq!(text.matches(STOP_MARKER).count(), 1);
        assert_eq!(text.lines().last(), Some(STOP_MARKER));
        assert_eq!(summary.agents, 4);
        assert!(summary.reports >= 4, "every agent reports on its first tick");
        assert_eq!(summary.reports + 1, text.lines().count() as u64);
        assert_eq!(summary.stopped_agents, 0);
    }

    #[test]
    fn driver_sleeps_for_run_duration() {
        let run = Duration::from_millis(80);
        let summary = SwarmBuilder::new(fast_config(80, ShutdownPolicy::Abandon), capture_sink())
            .shuttle(Point::new(2.0, 3.0))
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert!(summary.slept >= run, "slept only {:?}", summary.slept);
        assert!(summary.slept < run + Duration::from_millis(500));
    }

    #[test]
    fn every_line_is_a_whole_report() {
        let sink = capture_sink();
        SwarmBuilder::new(fast_config(50, ShutdownPolicy::Abandon), Arc::clone(&sink))
            .roster(hive_roster())
            .build()
            .unwrap()
            .run()
            .unwrap();

        let text = captured(&sink);
        let mut lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.pop(), Some(STOP_MARKER));
        for line in lines {
            let known_agent = line.starts_with("Shuttle (2.000000, 3.000000) at ")
                || line.starts_with("Shuttle (-3.000000, -3.000000) at ")
                || line.starts_with("Wanderer #2 at ")
                || line.starts_with("Wanderer #3 at ");
            assert!(known_agent, "unexpected line {line:?}");
            let coords = line.rsplit(" at ").next().unwrap();
            let parsed: Vec<f64> = coords.split(", ").map(|c| c.parse().unwrap()).collect();
            assert_eq!(parsed.len(), 2, "torn coordinates in {line:?}");
        }
    }

    #[test]
    fn abandoned_agents_cannot_write_after_stop() {
        let sink = capture_sink();
        SwarmBuilder::new(fast_config(30, ShutdownPolicy::Abandon), Arc::clone(&sink))
            .roster(hive_roster())
            .build()
            .unwrap()
            .run()
            .unwrap();

        let lines_at_stop = sink.lines_written();
        // Abandoned threads keep ticking; give them several ticks.
        thread::sleep(Duration::from_millis(40));
        assert!(sink.is_closed());
        assert_eq!(sink.lines_written(), lines_at_stop);
        assert_eq!(captured(&sink).lines().last(), Some(STOP_MARKER));
    }

    #[test]
    fn graceful_policy_stops_every_agent() {
        let policy = ShutdownPolicy::Graceful { timeout: Duration::from_secs(2) };
        let summary = SwarmBuilder::new(fast_config(30, policy), capture_sink())
            .roster(hive_roster())
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(summary.stopped_agents, summary.agents);
    }

    #[test]
    fn graceful_policy_with_unbounded_timeout() {
        let policy = ShutdownPolicy::Graceful { timeout: Duration::MAX };
        let summary = SwarmBuilder::new(fast_config(20, policy), capture_sink())
            .shuttle(Point::new(2.0, 3.0))
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(summary.agents, 1);
        assert_eq!(summary.stopped_agents, 1);
    }

    #[test]
    fn sink_failure_stops_every_agent() {
        let sink = Arc::new(Sink::new(NoWanderers(Vec::new())));
        let policy = ShutdownPolicy::Graceful { timeout: Duration::from_millis(500) };
        let summary = SwarmBuilder::new(fast_config(200, policy), Arc::clone(&sink))
            .shuttle(Point::new(30.0, 40.0))
            .wanderer(Point::ORIGIN)
            .build()
            .unwrap()
            .run()
            .unwrap();

        // The Wanderer fails its first emit and never acknowledges; the
        // Shuttle sees the raised signal and stops well before the run ends.
        assert_eq!(summary.stopped_agents, 1);
        assert!(summary.reports < 20, "shuttle kept reporting: {}", summary.reports);

        let text = sink.with_writer(|w| String::from_utf8(w.0.clone()).unwrap());
        assert!(!text.contains("Wanderer"));
        assert_eq!(text.lines().last(), Some(STOP_MARKER));
    }

    #[test]
    fn empty_roster_only_writes_marker() {
        let sink = capture_sink();
        let summary = SwarmBuilder::new(fast_config(10, ShutdownPolicy::Abandon), Arc::clone(&sink))
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(summary.agents, 0);
        assert_eq!(summary.reports, 0);
        assert_eq!(captured(&sink), format!("{STOP_MARKER}\n"));
    }

    #[test]
    fn shuttle_reports_arrive_in_tick_order() {
        // Long enough ticks that the home → origin leg is visible in order.
        let config = SwarmConfig {
            tick: Duration::from_millis(10),
            run_duration: Duration::from_millis(35),
            ..fast_config(0, ShutdownPolicy::Graceful { timeout: Duration::from_secs(1) })
        };
        let sink = capture_sink();
        SwarmBuilder::new(config, Arc::clone(&sink))
            .shuttle(Point::new(30.0, 40.0))
            .build()
            .unwrap()
            .run()
            .unwrap();

        // Speed 1 * 10 ms = 0.01 units per tick straight towards the origin,
        // so the distance to the origin strictly decreases report by report.
        let text = captured(&sink);
        let dists: Vec<f64> = text
            .lines()
            .filter(|l| l.starts_with("Shuttle"))
            .map(|l| {
                let coords = l.rsplit(" at ").next().unwrap();
                let xy: Vec<f64> = coords.split(", ").map(|c| c.parse().unwrap()).collect();
                xy[0].hypot(xy[1])
            })
            .collect();
        assert!(!dists.is_empty());
        assert!(dists.windows(2).all(|w| w[1] < w[0]), "out of order: {dists:?}");
    }
}
