pub mod tracker;

pub use tracker::{FallbackEvent, FallbackTracker, DEFAULT_MAX_EVENTS};
