//! Sampling module - picks the questions for a recurring check-in.

mod sampler;
mod seed;

pub use sampler::{QuestionSampler, SamplerSettings};
pub use seed::variety_seed;
