// Utils compartidos

pub mod constants;
pub mod dialog;
pub mod storage;

pub use constants::*;
