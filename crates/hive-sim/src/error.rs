use hive_core::HiveError;
use hive_sink::SinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("swarm configuration error: {0}")]
    Config(#[from] HiveError),

    #[error("roster has {0} agents, more than an AgentId can address")]
    RosterTooLarge(usize),

    #[error("failed to spawn agent thread: {0}")]
    Spawn(std::io::Error),

    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type SimResult<T> = Result<T, SimError>;
