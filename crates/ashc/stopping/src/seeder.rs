use crate::error::StoppingError;
use crate::prior::BetaPrior;
use async_trait::async_trait;

/// Optional collaborator that estimates a prior before any run exists.
///
/// An external pre-verification pass (an LLM reading the specification)
/// produces an estimated success probability and a pseudo-sample strength;
/// seeding shifts the posterior so easy specifications converge in fewer
/// samples. The engine works without one — the default is the uniform prior.
#[async_trait]
pub trait PriorSeeder: Send + Sync {
    async fn seed_prior(&self, spec_text: &str) -> Result<BetaPrior, StoppingError>;
}

/// Simulated seeder returning a fixed estimate.
pub struct SimulatedPriorSeeder {
    mean: f64,
    strength: f64,
}

impl SimulatedPriorSeeder {
    pub fn new() -> Self {
        Self {
            mean: 0.5,
            strength: 2.0,
        }
    }

    pub fn with_estimate(mut self, mean: f64, strength: f64) -> Self {
        self.mean = mean;
        self.strength = strength;
        self
    }
}

impl Default for SimulatedPriorSeeder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriorSeeder for SimulatedPriorSeeder {
    async fn seed_prior(&self, _spec_text: &str) -> Result<BetaPrior, StoppingError> {
        Ok(BetaPrior::seeded(self.mean, self.strength))
    }
}
