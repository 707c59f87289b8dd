pub mod calculator;
pub mod pipeline;
pub mod session;
