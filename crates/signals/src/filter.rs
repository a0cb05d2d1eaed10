use gammabot_core::StrategyConfig;
use serde::{Deserialize, Serialize};

/// Entry thresholds. Both comparisons are strictly greater-than.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub beta: f64,
    /// Fractional, e.g. `0.01` for 1%.
    pub momentum: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            beta: 1.5,
            momentum: 0.01,
        }
    }
}

impl From<&StrategyConfig> for SignalThresholds {
    fn from(config: &StrategyConfig) -> Self {
        Self {
            beta: config.beta_threshold,
            momentum: config.momentum_threshold,
        }
    }
}

impl SignalThresholds {
    pub fn beta_passes(&self, beta: f64) -> bool {
        beta > self.beta
    }

    pub fn momentum_passes(&self, momentum: f64) -> bool {
        momentum > self.momentum
    }

    pub fn passes(&self, beta: f64, momentum: f64) -> bool {
        self.beta_passes(beta) && self.momentum_passes(momentum)
    }
}
