pub mod aggregate;
pub mod error;
pub mod event;
pub mod reading;
pub mod window;

pub use aggregate::{compute_aggregate, Aggregate, Status};
pub use error::{MeterError, ReadingError, Result};
pub use event::Message;
pub use reading::{seed_readings, Reading};
pub use window::SampleWindow;
