//! The closed set of Desk operations and their response policy.

use std::fmt;

use desk_protocol::endpoints;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

/// Every request the client can send after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
	TakeControl,
	UnlockJoints,
	EnableExternalControl,
	LockJoints,
	DisableExternalControl,
	ChangeOperatingMode,
	Reboot,
	ReadOperatingMode,
	ReadJointStates,
}

impl Command {
	pub fn method(self) -> Method {
		match self {
			Command::ReadOperatingMode | Command::ReadJointStates => Method::GET,
			_ => Method::POST,
		}
	}

	pub fn path(self) -> &'static str {
		match self {
			Command::TakeControl => endpoints::TAKE_CONTROL,
			Command::UnlockJoints => endpoints::UNLOCK_JOINTS,
			Command::EnableExternalControl => endpoints::ACTIVATE_FCI,
			Command::LockJoints => endpoints::LOCK_JOINTS,
			Command::DisableExternalControl => endpoints::DEACTIVATE_FCI,
			Command::ChangeOperatingMode => endpoints::CHANGE_OPERATING_MODE,
			Command::Reboot => endpoints::REBOOT,
			Command::ReadOperatingMode => endpoints::OPERATING_MODE,
			Command::ReadJointStates => endpoints::JOINTS,
		}
	}

	/// Whether the request must carry the control token.
	pub fn requires_control(self) -> bool {
		matches!(
			self,
			Command::UnlockJoints
				| Command::EnableExternalControl
				| Command::LockJoints
				| Command::DisableExternalControl
				| Command::ChangeOperatingMode
		)
	}

	/// Whether Desk's answer counts as success.
	///
	/// Desk replies 500 to unlock and FCI activation when the brakes are
	/// already open or FCI is already on. A rebooting controller may answer
	/// with anything.
	pub fn accepts(self, status: StatusCode) -> bool {
		match self {
			Command::UnlockJoints | Command::EnableExternalControl => {
				status.is_success() || status == StatusCode::INTERNAL_SERVER_ERROR
			}
			Command::Reboot => true,
			_ => status.is_success(),
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Command::TakeControl => "take control",
			Command::UnlockJoints => "unlock joints",
			Command::EnableExternalControl => "enable FCI",
			Command::LockJoints => "lock joints",
			Command::DisableExternalControl => "disable FCI",
			Command::ChangeOperatingMode => "change operating mode",
			Command::Reboot => "reboot",
			Command::ReadOperatingMode => "read operating mode",
			Command::ReadJointStates => "read joint states",
		}
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
