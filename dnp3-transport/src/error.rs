//! Error types re-exported from the core crate

pub use dnp3_core::error::{Dnp3Error, Dnp3Result};
