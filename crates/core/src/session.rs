//! Session and control token value types.

use std::fmt;

use crate::config::Credentials;

const REDACTED_PREFIX: usize = 4;

/// Opaque token proving this session currently controls the robot.
#[derive(Clone, PartialEq, Eq)]
pub struct ControlToken(String);

impl ControlToken {
	pub(crate) fn new(token: String) -> Self {
		Self(token)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Short form safe for logs and terminal output.
	///
	/// Tokens too short to hide most of their characters are masked entirely.
	pub fn redacted(&self) -> String {
		if self.0.chars().count() <= 2 * REDACTED_PREFIX {
			return "…".to_string();
		}
		let prefix: String = self.0.chars().take(REDACTED_PREFIX).collect();
		format!("{prefix}…")
	}
}

impl fmt::Debug for ControlToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ControlToken({})", self.redacted())
	}
}

/// Authenticated context against one robot, returned by
/// [`DeskClient::login`](crate::DeskClient::login).
///
/// A session holds the verified credentials and, after
/// [`take_control`](crate::DeskClient::take_control), the control token.
/// There is no way to build one without a successful login.
pub struct Session {
	robot: String,
	credentials: Credentials,
	control: Option<ControlToken>,
}

impl Session {
	pub(crate) fn new(robot: String, credentials: Credentials) -> Self {
		Self {
			robot,
			credentials,
			control: None,
		}
	}

	/// Robot this session was opened for.
	pub fn robot(&self) -> &str {
		&self.robot
	}

	pub fn has_control(&self) -> bool {
		self.control.is_some()
	}

	pub fn control_token(&self) -> Option<&ControlToken> {
		self.control.as_ref()
	}

	pub(crate) fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	pub(crate) fn set_control(&mut self, token: ControlToken) -> &ControlToken {
		self.control.insert(token)
	}

	/// Forgets the control token, e.g. after Desk reported it as stale.
	pub fn release_control(&mut self) {
		self.control = None;
	}
}

impl fmt::Debug for Session {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session")
			.field("robot", &self.robot)
			.field("username", &self.credentials.username())
			.field("control", &self.control)
			.finish()
	}
}
