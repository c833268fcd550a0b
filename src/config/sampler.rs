//! Question sampler configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::sampling::SamplerSettings;

/// Check-in sampling configuration
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SamplerConfig {
    /// Questions asked per category
    #[serde(default = "default_count_per_category")]
    pub count_per_category: usize,

    /// Of those, how many are the heaviest questions
    #[serde(default = "default_high_weight_count")]
    pub high_weight_count: usize,
}

impl SamplerConfig {
    /// Domain settings for the sampler.
    pub fn settings(&self) -> SamplerSettings {
        SamplerSettings::new(self.count_per_category, self.high_weight_count)
    }

    /// Validate sampler configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.count_per_category == 0 {
            return Err(ValidationError::InvalidSampleCount);
        }
        if self.high_weight_count > self.count_per_category {
            return Err(ValidationError::HighWeightExceedsCount {
                high: self.high_weight_count,
                count: self.count_per_category,
            });
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            count_per_category: default_count_per_category(),
            high_weight_count: default_high_weight_count(),
        }
    }
}

fn default_count_per_category() -> usize {
    SamplerSettings::DEFAULT_COUNT_PER_CATEGORY
}

fn default_high_weight_count() -> usize {
    SamplerSettings::DEFAULT_HIGH_WEIGHT_COUNT
}
