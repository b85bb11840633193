//! Session client for the Franka Desk HTTP API.
//!
//! Desk is the browser control panel of Franka robots. This crate logs in to
//! Desk, takes control of the robot and issues the few state changes needed
//! before an external controller can connect through FCI.
//!
//! # Main Types
//!
//! - [`DeskConfig`] / [`Credentials`] - where and as whom to connect
//! - [`DeskClient`] - one robot's Desk API
//! - [`Session`] / [`ControlToken`] - what login and take control hand back
//! - [`Command`] - the closed set of requests, used to name failed steps
//! - [`enable()`] - the full login, take control, unlock, FCI sequence
//!
//! ```ignore
//! let client = DeskClient::new(DeskConfig::new("192.168.1.10", Credentials::new(user, pass)))?;
//! let mut session = client.login().await?;
//! client.take_control(&mut session).await?;
//! client.unlock_joints(&session).await?;
//! client.enable_external_control(&session).await?;
//! ```

pub mod client;
pub mod command;
pub mod config;
pub mod enable;
pub mod error;
pub mod mode;
pub mod session;

pub use client::DeskClient;
pub use command::Command;
pub use config::{Credentials, DEFAULT_OWNER, DeskConfig};
pub use desk_protocol::JointState;
pub use enable::{EnableOptions, RebootRecovery, enable, reboot_and_wait};
pub use error::{AuthError, CommandError, Error, Result};
pub use mode::OperatingMode;
pub use session::{ControlToken, Session};
