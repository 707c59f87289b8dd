pub mod messages;
pub mod review;
