use crate::{error::ReadingError, reading::Reading, MeterError, Result};
use std::collections::VecDeque;

/// Default number of readings a gauge keeps.
pub const DEFAULT_CAPACITY: usize = 10;

/// Largest window a gauge may be configured with.
pub const MAX_CAPACITY: usize = 10_000;

/// Bounded, chronologically ordered FIFO window of readings.
///
/// Once full, every accepted push evicts the oldest reading.  A rejected
/// reading leaves the window exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    samples:  VecDeque<Reading>,
    capacity: usize,
}

impl SampleWindow {
    /// Create an empty window.  `capacity` must be in `1..=MAX_CAPACITY`.
    pub fn new(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        Ok(Self {
            samples: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        })
    }

    /// Push a new reading, evicting the oldest if at capacity.
    ///
    /// Returns the evicted reading, if any.
    pub fn push(&mut self, reading: Reading) -> Result<Option<Reading>, ReadingError> {
        reading.validate()?;
        if let Some(newest) = self.samples.back() {
            if reading.timestamp < newest.timestamp {
                return Err(ReadingError::OutOfOrder {
                    newest:    newest.timestamp,
                    timestamp: reading.timestamp,
                });
            }
        }

        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(reading);
        Ok(evicted)
    }

    /// Change the capacity, dropping the oldest readings if it shrinks.
    pub fn resize(&mut self, capacity: usize) -> Result<()> {
        check_capacity(capacity)?;
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
        self.capacity = capacity;
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Most recent reading.
    pub fn latest(&self) -> Option<&Reading> {
        self.samples.back()
    }

    /// Readings oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Reading> + ExactSizeIterator {
        self.samples.iter()
    }

    /// Sum of every value in the window.
    pub fn sum(&self) -> f64 {
        self.samples.iter().map(|r| r.value).sum()
    }
}

/// Reject capacities outside `1..=MAX_CAPACITY`.
pub fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 || capacity > MAX_CAPACITY {
        return Err(MeterError::Config(format!(
            "window capacity must be between 1 and {MAX_CAPACITY}, got {capacity}"
        )));
    }
    Ok(())
}
