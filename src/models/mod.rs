pub mod booking;
pub mod export;
pub mod row;
