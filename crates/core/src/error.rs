//! Error types for the Desk client.

use std::time::Duration;

use thiserror::Error;

use crate::command::Command;

/// Result type alias for Desk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to Desk.
#[derive(Debug, Error)]
pub enum Error {
	/// The session could not be established.
	#[error(transparent)]
	Auth(#[from] AuthError),

	/// An authenticated command was rejected or could not be delivered.
	#[error(transparent)]
	Command(#[from] CommandError),

	/// The client could not be built from its configuration.
	#[error("invalid configuration: {0}")]
	Config(String),

	/// The robot did not reach execution mode after a reboot.
	#[error(
		"robot {robot} did not reach execution mode within {}s after reboot",
		.waited.as_secs()
	)]
	BootTimeout { robot: String, waited: Duration },
}

impl Error {
	/// The command that failed, if the failure happened after login.
	pub fn command(&self) -> Option<Command> {
		match self {
			Error::Command(err) => Some(err.command()),
			_ => None,
		}
	}
}

/// Login failures.
///
/// Login is never retried: Desk locks accounts after repeated bad attempts.
#[derive(Debug, Error)]
pub enum AuthError {
	/// Desk answered with a 4xx status, usually wrong username or password.
	#[error("Desk at {robot} rejected the credentials (HTTP {status})")]
	Rejected { robot: String, status: u16 },

	/// Desk answered with a status that is neither success nor a client error.
	#[error("Desk at {robot} failed the login check (HTTP {status}): {message}")]
	Unexpected {
		robot: String,
		status: u16,
		message: String,
	},

	/// No response, e.g. connection refused, TLS failure or timeout.
	#[error("Desk at {robot} is unreachable: {source}")]
	Unreachable {
		robot: String,
		#[source]
		source: reqwest::Error,
	},
}

/// Failures of commands issued against an established session.
#[derive(Debug, Error)]
pub enum CommandError {
	/// A control-gated command was issued before control was taken.
	#[error("{command}: session does not hold control of the robot, take control first")]
	NoControl { command: Command },

	/// The session belongs to a different robot than the client.
	#[error("{command}: session was opened for {session_robot}, not {client_robot}")]
	ForeignSession {
		command: Command,
		session_robot: String,
		client_robot: String,
	},

	/// Desk refused the credentials or control token (401/403).
	#[error("{command}: session is no longer valid (HTTP {status})")]
	Unauthorized { command: Command, status: u16 },

	/// Desk answered with any other non-accepted status.
	#[error("{command}: Desk rejected the request (HTTP {status}): {message}")]
	Rejected {
		command: Command,
		status: u16,
		message: String,
	},

	/// The request did not complete.
	#[error("{command}: request failed: {source}")]
	Transport {
		command: Command,
		#[source]
		source: reqwest::Error,
	},

	/// The response could not be understood.
	#[error("{command}: unexpected response: {message}")]
	Protocol { command: Command, message: String },
}

impl CommandError {
	/// The command this error belongs to.
	pub fn command(&self) -> Command {
		match self {
			CommandError::NoControl { command }
			| CommandError::ForeignSession { command, .. }
			| CommandError::Unauthorized { command, .. }
			| CommandError::Rejected { command, .. }
			| CommandError::Transport { command, .. }
			| CommandError::Protocol { command, .. } => *command,
		}
	}

	/// HTTP status reported by Desk, when there was one.
	pub fn status(&self) -> Option<u16> {
		match self {
			CommandError::Unauthorized { status, .. } | CommandError::Rejected { status, .. } => {
				Some(*status)
			}
			_ => None,
		}
	}
}
