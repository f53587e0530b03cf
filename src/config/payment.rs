//! Payment gateway configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway configuration
///
/// The simulated gateway approves confirmations with probability
/// `success_rate`. Real gateway integrations ignore that field.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Probability in [0.0, 1.0] that a simulated confirmation succeeds
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(ValidationError::InvalidSuccessRate);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            success_rate: default_success_rate(),
        }
    }
}

fn default_success_rate() -> f64 {
    0.9
}
