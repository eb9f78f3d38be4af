//! The `Swarm` driver: one thread per agent, a timed run, then shutdown.

use std::io::Write;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use hive_agent::Agent;
use hive_core::{AgentId, ShutdownPolicy, SwarmConfig};
use hive_sink::{Sink, SinkResult};
use tracing::{debug, error, info, warn};

use crate::{SimError, SimResult, StopSignal};

/// Final line written to the sink when the run ends.
pub const STOP_MARKER: &str = "=== STOP ===";

/// What happened during [`Swarm::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Agent threads launched.
    pub agents: usize,
    /// Report lines written before the stop marker.
    pub reports: u64,
    /// Agents that acknowledged the stop signal.  Always `0` under
    /// [`ShutdownPolicy::Abandon`].
    pub stopped_agents: usize,
    /// How long the driver actually slept.
    pub slept: Duration,
}

/// A fully constructed swarm, ready to run.
///
/// Create via [`SwarmBuilder`][crate::SwarmBuilder].
pub struct Swarm<W: Write + Send + 'static> {
    /// Validated swarm-wide parameters.
    pub config: SwarmConfig,

    pub(crate) sink:   Arc<Sink<W>>,
    pub(crate) agents: Vec<Box<dyn Agent>>,
}

impl<W: Write + Send + 'static> Swarm<W> {
    /// The roster, in `AgentId` order.
    pub fn agents(&self) -> &[Box<dyn Agent>] {
        &self.agents
    }

    /// Run the swarm for `config.run_duration`.
    ///
    /// 1. Every agent is moved into its own thread, which loops
    ///    {advance, emit report, sleep one tick}.
    /// 2. The calling thread sleeps for the run duration.
    /// 3. [`STOP_MARKER`] is written and the sink is closed.
    /// 4. Agent threads are handled per [`ShutdownPolicy`]: abandoned
    ///    (detached, never signalled) or signalled and awaited up to a
    ///    timeout.
    ///
    /// Abandoned threads keep ticking until the process exits; the closed
    /// sink drops their reports.
    ///
    /// A sink failure in any agent thread is fatal to the swarm: that agent
    /// ends and the stop signal is raised, so every other agent stops at its
    /// next tick.  The driver still sleeps out the run and writes the marker.
    pub fn run(self) -> SimResult<RunSummary> {
        let Swarm { config, sink, agents } = self;
        let agent_count = agents.len();
        let stop = StopSignal::new();
        let (ack_tx, ack_rx) = mpsc::channel::<AgentId>();

        info!(
            agents = agent_count,
            tick = ?config.tick,
            run = ?config.run_duration,
            "starting swarm"
        );

        let mut handles: Vec<(AgentId, JoinHandle<()>)> = Vec::with_capacity(agent_count);
        for agent in agents {
            let id   = agent.id();
            let kind = agent.kind();
            let sink = Arc::clone(&sink);
            let stop_flag = stop.clone();
            let ack  = ack_tx.clone();
            let tick = config.tick;

            let spawned = thread::Builder::new()
                .name(format!("agent-{}", id.0))
                .spawn(move || match agent_loop(agent, &sink, tick, &stop_flag) {
                    Ok(()) => {
                        debug!(agent = id.0, "agent acknowledged stop");
                        let _ = ack.send(id);
                    }
                    Err(e) => {
                        stop_flag.raise();
                        error!(
                            agent = id.0,
                            error = %e,
                            "sink failed; agent stopped reporting and the swarm is stopping"
                        );
                    }
                });

            match spawned {
                Ok(handle) => {
                    debug!(agent = id.0, %kind, "spawned agent");
                    handles.push((id, handle));
                }
                Err(e) => {
                    // Threads already running must not outlive a failed launch.
                    stop.raise();
                    return Err(SimError::Spawn(e));
                }
            }
        }
        drop(ack_tx);

        let started = Instant::now();
        thread::sleep(config.run_duration);
        let slept = started.elapsed();

        sink.shutdown(STOP_MARKER)?;
        let reports = sink.lines_written().saturating_sub(1);

        let stopped_agents = match config.shutdown {
            ShutdownPolicy::Abandon => {
                // Dropping a JoinHandle detaches its thread.
                drop(handles);
                0
            }
            ShutdownPolicy::Graceful { timeout } => {
                stop.raise();
                let acked = await_acks(&ack_rx, agent_count, timeout);
                for (id, handle) in handles {
                    if acked.contains(&id) {
                        let _ = handle.join();
                    }
                }
                if acked.len() < agent_count {
                    warn!(
                        stopped = acked.len(),
                        agents = agent_count,
                        "abandoning agents that missed the stop deadline"
                    );
                }
                acked.len()
            }
        };

        info!(reports, stopped_agents, "swarm stopped");
        Ok(RunSummary {
            agents: agent_count,
            reports,
            stopped_agents,
            slept,
        })
    }
}

/// Per-agent tick loop.  Returns only once `stop` is raised or the sink
/// fails.
fn agent_loop<W: Write + Send>(
    mut agent: Box<dyn Agent>,
    sink:      &Sink<W>,
    tick:      Duration,
    stop:      &StopSignal,
) -> SinkResult<()> {
    while !stop.is_raised() {
        let report = agent.advance();
        sink.emit(&report.to_string())?;
        thread::sleep(tick);
    }
    Ok(())
}

/// Collect stop acknowledgements until all `expected` arrive or `timeout`
/// elapses.
///
/// A timeout too large to add to `Instant::now()` waits with no deadline,
/// until every agent has acknowledged or exited.
fn await_acks(rx: &Receiver<AgentId>, expected: usize, timeout: Duration) -> Vec<AgentId> {
    let deadline = Instant::now().checked_add(timeout);
    let mut acked = Vec::with_capacity(expected);
    while acked.len() < expected {
        let received = match deadline {
            Some(deadline) => rx
                .recv_timeout(deadline.saturating_duration_since(Instant::now()))
                .ok(),
            None => rx.recv().ok(),
        };
        match received {
            Some(id) => acked.push(id),
            None => break,
        }
    }
    acked
}
