//! Per-agent RNG wrapper.
//!
//! # Seeding strategy
//!
//! Every agent that needs randomness owns its own `SmallRng`.  Two seeding
//! modes exist:
//!
//! - **Entropy** (default): each generator is seeded from the OS entropy
//!   source at construction, so trajectories differ from run to run.
//! - **Deterministic**: with a run seed, each agent is seeded by
//!
//!     seed = run_seed XOR (agent_id * MIXING_CONSTANT)
//!
//!   The mixing constant is the 64-bit fractional part of the golden ratio,
//!   which spreads consecutive agent IDs uniformly across the seed space.
//!
//! Either way, agents never share RNG state: there is no contention between
//! agent threads and no correlation between their streams.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Heading};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent RNG.
///
/// `AgentRng` is `Send` so it can move into its agent's thread, and it is
/// never wrapped in a lock: the owning thread is the only user.
#[derive(Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's seed and an agent ID.
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the process-level entropy source.
    pub fn from_entropy() -> Self {
        AgentRng(SmallRng::from_entropy())
    }

    /// `new(seed, agent)` when a run seed is configured, entropy otherwise.
    pub fn for_agent(run_seed: Option<u64>, agent: AgentId) -> Self {
        match run_seed {
            Some(seed) => Self::new(seed, agent),
            None       => Self::from_entropy(),
        }
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A heading whose angle is uniform in `[0, 2π)`.
    #[inline]
    pub fn heading(&mut self) -> Heading {
        Heading::from_angle(self.0.gen_range(0.0..TAU))
    }
}
