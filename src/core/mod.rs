pub mod convert;
pub mod input;
pub mod matcher;
pub mod sequencer;
pub mod store;
pub mod week;
