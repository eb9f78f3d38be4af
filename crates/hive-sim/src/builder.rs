//! Fluent builder for constructing a [`Swarm`].

use std::io::Write;
use std::sync::Arc;

use hive_agent::{Agent, Shuttle, Wanderer};
use hive_core::{AgentId, AgentRng, Point, SwarmConfig};
use hive_sink::Sink;

use crate::{SimError, SimResult, Swarm};

/// One agent in the fixed roster, before construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RosterEntry {
    /// A Shuttle commuting between `home` and the origin.
    Shuttle { home: Point },
    /// A Wanderer starting its walk at `start`.
    Wanderer { start: Point },
}

/// Fluent builder for [`Swarm<W>`].
///
/// Agents receive `AgentId`s in the order they are added.
///
/// # Example
///
/// ```rust,ignore
/// let sink = Arc::new(Sink::stdout());
/// let summary = SwarmBuilder::new(SwarmConfig::default(), sink)
///     .shuttle(Point::new(2.0, 3.0))
///     .wanderer(Point::ORIGIN)
///     .build()?
///     .run()?;
/// ```
pub struct SwarmBuilder<W: Write + Send + 'static> {
    config: SwarmConfig,
    sink:   Arc<Sink<W>>,
    roster: Vec<RosterEntry>,
}

impl<W: Write + Send + 'static> SwarmBuilder<W> {
    /// Create a builder with an empty roster.
    pub fn new(config: SwarmConfig, sink: Arc<Sink<W>>) -> Self {
        Self { config, sink, roster: Vec::new() }
    }

    /// Add a Shuttle homed at `home`.
    pub fn shuttle(mut self, home: Point) -> Self {
        self.roster.push(RosterEntry::Shuttle { home });
        self
    }

    /// Add a Wanderer starting at `start`.
    pub fn wanderer(mut self, start: Point) -> Self {
        self.roster.push(RosterEntry::Wanderer { start });
        self
    }

    /// Append several roster entries at once.
    pub fn roster(mut self, entries: impl IntoIterator<Item = RosterEntry>) -> Self {
        self.roster.extend(entries);
        self
    }

    /// Validate the configuration and construct every agent.
    ///
    /// Wanderer RNGs are seeded here, one per agent, from the configured run
    /// seed or from OS entropy.
    pub fn build(self) -> SimResult<Swarm<W>> {
        self.config.validate()?;

        let kinematics = self.config.kinematics();
        let interval   = self.config.heading_interval()?;

        let agents = self
            .roster
            .iter()
            .enumerate()
            .map(|(i, entry)| -> SimResult<Box<dyn Agent>> {
                let id = AgentId::try_from(i)
                    .map_err(|_| SimError::RosterTooLarge(self.roster.len()))?;
                let agent: Box<dyn Agent> = match *entry {
                    RosterEntry::Shuttle { home } => {
                        Box::new(Shuttle::new(id, home, kinematics))
                    }
                    RosterEntry::Wanderer { start } => Box::new(Wanderer::new(
                        id,
                        start,
                        kinematics,
                        interval,
                        AgentRng::for_agent(self.config.seed, id),
                    )),
                };
                Ok(agent)
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Swarm {
            config: self.config,
            sink:   self.sink,
            agents,
        })
    }
}
