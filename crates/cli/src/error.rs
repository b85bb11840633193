use desk::{AuthError, CommandError as DeskCommandError};
use serde_json::json;
use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, DeskCliError>;

pub const USERNAME_ENV: &str = "FRANKA_DESK_USERNAME";
pub const PASSWORD_ENV: &str = "FRANKA_DESK_PASSWORD";

#[derive(Debug, Error)]
pub enum DeskCliError {
	#[error(
		"missing Desk credentials: set FRANKA_DESK_USERNAME and FRANKA_DESK_PASSWORD or use --username/--password"
	)]
	MissingCredentials,

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error(transparent)]
	Desk(#[from] desk::Error),
}

impl From<AuthError> for DeskCliError {
	fn from(err: AuthError) -> Self {
		DeskCliError::Desk(err.into())
	}
}

impl From<DeskCommandError> for DeskCliError {
	fn from(err: DeskCommandError) -> Self {
		DeskCliError::Desk(err.into())
	}
}

impl DeskCliError {
	/// Convert this error to a CommandError for structured output.
	///
	/// The message always names the failed step; `details.step` carries the
	/// same in machine-readable form.
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			DeskCliError::MissingCredentials => (ErrorCode::InvalidInput, self.to_string(), None),
			DeskCliError::InvalidInput(msg) => (ErrorCode::InvalidInput, msg.clone(), None),
			DeskCliError::Desk(desk::Error::Auth(err)) => {
				let code = match err {
					AuthError::Unreachable { .. } => ErrorCode::Unreachable,
					AuthError::Rejected { .. } | AuthError::Unexpected { .. } => {
						ErrorCode::AuthFailed
					}
				};
				let mut details = json!({ "step": "login" });
				if let AuthError::Rejected { status, .. } | AuthError::Unexpected { status, .. } =
					err
				{
					details["status"] = json!(status);
				}
				(code, format!("login: {err}"), Some(details))
			}
			DeskCliError::Desk(desk::Error::Command(err)) => {
				let code = match err {
					DeskCommandError::NoControl { .. } => ErrorCode::NoControl,
					DeskCommandError::Unauthorized { .. } => ErrorCode::SessionInvalid,
					DeskCommandError::Rejected { .. } => ErrorCode::CommandRejected,
					DeskCommandError::Transport { .. } => ErrorCode::Unreachable,
					DeskCommandError::Protocol { .. } => ErrorCode::ProtocolError,
					DeskCommandError::ForeignSession { .. } => ErrorCode::InternalError,
				};
				let mut details = json!({ "step": err.command() });
				if let Some(status) = err.status() {
					details["status"] = json!(status);
				}
				(code, err.to_string(), Some(details))
			}
			DeskCliError::Desk(desk::Error::BootTimeout { .. }) => (
				ErrorCode::Timeout,
				format!("reboot: {self}"),
				Some(json!({ "step": "reboot" })),
			),
			DeskCliError::Desk(desk::Error::Config(_)) => {
				(ErrorCode::InvalidInput, self.to_string(), None)
			}
		};

		CommandError {
			code,
			message,
			details,
		}
	}
}

#[cfg(test)]
mod tests {
	use desk::Command;

	use super::*;

	#[test]
	fn rejected_command_names_step() {
		let err = DeskCliError::from(DeskCommandError::Rejected {
			command: Command::UnlockJoints,
			status: 409,
			message: "robot in error state".into(),
		});

		let cmd_error = err.to_command_error();

		assert_eq!(cmd_error.code, ErrorCode::CommandRejected);
		assert!(cmd_error.message.starts_with("unlock joints:"));
		let details = cmd_error.details.unwrap();
		assert_eq!(details["step"], "unlock_joints");
		assert_eq!(details["status"], 409);
	}

	#[test]
	fn auth_rejection_maps_to_auth_failed() {
		let err = DeskCliError::from(AuthError::Rejected {
			robot: "192.168.1.10".into(),
			status: 401,
		});

		let cmd_error = err.to_command_error();

		assert_eq!(cmd_error.code, ErrorCode::AuthFailed);
		assert!(cmd_error.message.starts_with("login:"));
		assert_eq!(cmd_error.details.unwrap()["status"], 401);
	}

	#[test]
	fn expired_session_maps_to_session_invalid() {
		let err = DeskCliError::from(DeskCommandError::Unauthorized {
			command: Command::EnableExternalControl,
			status: 403,
		});
		assert_eq!(err.to_command_error().code, ErrorCode::SessionInvalid);
	}

	#[test]
	fn missing_credentials_mentions_both_variables() {
		let cmd_error = DeskCliError::MissingCredentials.to_command_error();
		assert_eq!(cmd_error.code, ErrorCode::InvalidInput);
		assert!(cmd_error.message.contains(USERNAME_ENV));
		assert!(cmd_error.message.contains(PASSWORD_ENV));
	}
}
