//! tickerwatch — technical stock screener and portfolio monitor.
//!
//! Domain logic lives in [`domain`] and depends on nothing but its inputs;
//! [`ports`] defines the traits at the I/O seams and [`adapters`] the file
//! backed implementations. [`cli`] wires them together.

pub mod domain;
pub mod ports;
pub mod adapters;

pub mod cli;
