//! Command-line front end for the Franka Desk client.

pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
