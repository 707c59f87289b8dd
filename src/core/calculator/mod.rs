pub mod duration;
pub mod metrics;
