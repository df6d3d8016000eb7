//! Random policy for smoke tests and baselines.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::trait_::Policy;
use crate::motion::Action;

/// Uniformly random action selection from its own seeded generator.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &[f64]) -> Action {
        Action::sample(&mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_actions() {
        let mut a = RandomPolicy::new(11);
        let mut b = RandomPolicy::new(11);
        let obs = vec![0.0; 12];
        for _ in 0..50 {
            assert_eq!(a.select_action(&obs), b.select_action(&obs));
        }
    }
}
