pub mod raw_row;
pub mod telop_row;

pub use raw_row::RawRow;
pub use telop_row::TelopRow;
