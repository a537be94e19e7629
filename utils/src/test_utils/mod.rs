mod logger;

pub use logger::{CapturedRecord, CapturingLogger};
