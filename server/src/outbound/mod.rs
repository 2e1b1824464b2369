//! Outbound adapters implementing domain ports against real backends.

pub mod document;
pub mod persistence;
