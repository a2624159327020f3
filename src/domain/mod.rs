//! Core domain types and logic.

pub mod market_data;
pub mod signal;
pub mod signals;
pub mod levels;
pub mod score;
pub mod recommend;
pub mod trade_plan;
pub mod screen;
pub mod universe;
pub mod portfolio;
pub mod position;
pub mod alert;
pub mod risk;
pub mod monitor;
pub mod config;
pub mod error;
