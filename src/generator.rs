//! Delayed random-value streams.
//!
//! [`async_generator`] yields ten values drawn from `[0, 10)`, sleeping one
//! second before each. The sleep is a tokio timer, so other tasks on the same
//! runtime make progress while the stream is suspended.

use std::time::Duration;

use futures::future::join_all;
use futures::stream::{self, Stream, StreamExt};
use rand::Rng;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Number of concurrent comprehensions run by [`measure_runtime`].
const MEASURE_PARALLELISM: usize = 4;

/// Shape of a delayed random stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Number of values to yield
    pub count: usize,
    /// Suspension before each value
    pub delay: Duration,
    /// Inclusive lower bound
    pub low: f64,
    /// Exclusive upper bound
    pub high: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 10,
            delay: Duration::from_secs(1),
            low: 0.0,
            high: 10.0,
        }
    }
}

impl GeneratorConfig {
    /// Whether `[low, high)` is a non-empty range `rand` can sample.
    #[must_use]
    pub fn is_sampleable(&self) -> bool {
        self.low.is_finite()
            && self.high.is_finite()
            && self.low < self.high
            && (self.high - self.low).is_finite()
    }
}

/// Ten uniform values in `[0, 10)`, one per second.
///
/// Each call returns a fresh stream; an exhausted stream stays exhausted.
pub fn async_generator() -> impl Stream<Item = f64> + Send {
    delayed_random(GeneratorConfig::default())
}

/// `config.count` uniform values in `[config.low, config.high)`, each preceded
/// by a `config.delay` sleep.
///
/// A range that cannot be sampled (`low >= high`, a non-finite bound, or a
/// span too wide for `f64`) yields `low` every time.
pub fn delayed_random(config: GeneratorConfig) -> impl Stream<Item = f64> + Send {
    stream::unfold(0_usize, move |produced| async move {
        if produced >= config.count {
            return None;
        }

        tokio::time::sleep(config.delay).await;

        let value = if config.is_sampleable() {
            rand::thread_rng().gen_range(config.low..config.high)
        } else {
            config.low
        };
        trace!(index = produced, value, "Yielding random value");

        Some((value, produced + 1))
    })
}

/// Collect one full run of [`async_generator`].
pub async fn async_comprehension() -> Vec<f64> {
    async_generator().collect().await
}

/// Run four [`async_comprehension`] calls concurrently and return the wall
/// time taken.
///
/// The runs overlap, so this is close to a single run's duration.
pub async fn measure_runtime() -> Duration {
    let start = Instant::now();
    let runs = join_all((0..MEASURE_PARALLELISM).map(|_| async_comprehension())).await;
    let elapsed = start.elapsed();

    debug!(
        runs = runs.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Concurrent comprehensions finished"
    );
    elapsed
}
