use meter_config::FeedConfig;
use meter_core::Reading;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Stand-in for a real flow sensor: whole-number values drawn uniformly
/// from `[min, max)`.
#[derive(Debug)]
pub struct ReadingGenerator {
    rng:  StdRng,
    min:  f64,
    max:  f64,
    /// Timestamp of the previous reading; new ones never go below it.
    last: Option<i64>,
}

impl ReadingGenerator {
    pub fn new(config: &FeedConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            min: config.min_value,
            max: config.max_value,
            last: None,
        }
    }

    /// Produce the reading for `now_ms`, clamping the timestamp so the
    /// stream stays non-decreasing even if the wall clock steps back.
    pub fn next_reading(&mut self, now_ms: i64) -> Reading {
        let timestamp = self.last.map_or(now_ms, |last| now_ms.max(last));
        self.last = Some(timestamp);

        let value = self.rng.gen_range(self.min..self.max).floor();
        Reading::new(timestamp, value)
    }
}
