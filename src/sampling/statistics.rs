//! Run-time statistics over collected samples
//!
//! Every function returns `None` for empty input instead of dividing by zero
//! or indexing past the end.

use crate::sampling::sampler::Sample;
use std::fmt;
use std::time::Duration;

/// Sum of all durations
pub fn total_duration(durations: &[Duration]) -> Duration {
    durations.iter().sum()
}

/// Arithmetic mean, truncated to whole nanoseconds
pub fn mean_duration(durations: &[Duration]) -> Option<Duration> {
    if durations.is_empty() {
        return None;
    }
    let nanos = total_duration(durations).as_nanos() / durations.len() as u128;
    Some(Duration::from_nanos(nanos as u64))
}

/// Median duration.
///
/// An even count averages the two middle values: `[10ms, 20ms]` gives 15ms.
pub fn median_duration(durations: &[Duration]) -> Option<Duration> {
    if durations.is_empty() {
        return None;
    }
    let mut sorted = durations.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2)
    } else {
        Some(sorted[mid])
    }
}

pub fn fastest_duration(durations: &[Duration]) -> Option<Duration> {
    durations.iter().min().copied()
}

pub fn slowest_duration(durations: &[Duration]) -> Option<Duration> {
    durations.iter().max().copied()
}

/// Sample with the shortest run time; ties go to the earliest sample
pub fn fastest_sample(samples: &[Sample]) -> Option<&Sample> {
    samples
        .iter()
        .reduce(|best, s| if s.run_time < best.run_time { s } else { best })
}

/// Sample with the longest run time; ties go to the earliest sample
pub fn slowest_sample(samples: &[Sample]) -> Option<&Sample> {
    samples
        .iter()
        .reduce(|best, s| if s.run_time > best.run_time { s } else { best })
}

/// Aggregate figures for one sampling run
#[derive(Debug, Clone)]
pub struct SampleReport {
    pub puzzle: String,
    pub samples: usize,
    pub contestants: usize,
    pub total: Duration,
    pub mean: Option<Duration>,
    pub median: Option<Duration>,
    pub fastest: Option<Sample>,
    pub slowest: Option<Sample>,
}

impl SampleReport {
    pub fn from_samples(puzzle: impl fmt::Display, contestants: usize, samples: &[Sample]) -> Self {
        let run_times: Vec<Duration> = samples.iter().map(|s| s.run_time).collect();

        Self {
            puzzle: puzzle.to_string(),
            samples: samples.len(),
            contestants,
            total: total_duration(&run_times),
            mean: mean_duration(&run_times),
            median: median_duration(&run_times),
            fastest: fastest_sample(samples).cloned(),
            slowest: slowest_sample(samples).cloned(),
        }
    }
}

fn write_optional<T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &Option<T>,
) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{}: {:?}", label, v),
        None => writeln!(f, "{}: n/a", label),
    }
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f, "Puzzle: {}", self.puzzle)?;
        writeln!(f, "Number of Samples: {}", self.samples)?;
        writeln!(f, "Parallelism: {}", self.contestants)?;
        writeln!(f)?;
        writeln!(f, "Results")?;
        writeln!(f, "=========================")?;
        writeln!(f, "Total Run Time: {:?}", self.total)?;
        write_optional(f, "Mean Run Time", &self.mean)?;
        write_optional(f, "Median Run Time", &self.median)?;
        match &self.fastest {
            Some(s) => writeln!(f, "Fastest Sample:\n{}", s)?,
            None => writeln!(f, "Fastest Sample: n/a")?,
        }
        match &self.slowest {
            Some(s) => write!(f, "Slowest Sample:\n{}", s),
            None => write!(f, "Slowest Sample: n/a"),
        }
    }
}
