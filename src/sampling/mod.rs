//! Sampling harness: run many races and summarize how long they took.

pub mod sampler;
pub mod statistics;

pub use sampler::{Sample, SampleError, SamplerConfig, sample};
pub use statistics::{
    SampleReport, fastest_duration, fastest_sample, mean_duration, median_duration,
    slowest_duration, slowest_sample, total_duration,
};
