//! Core types and utilities for DNP3 frame building
//!
//! This crate provides the error taxonomy shared by the link and transport
//! layers of the DNP3 frame builder.

pub mod error;

pub use error::{Dnp3Error, Dnp3Result};
