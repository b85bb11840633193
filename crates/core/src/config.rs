//! Client configuration: [`DeskConfig`] and [`Credentials`].

use std::fmt;
use std::net::Ipv6Addr;
use std::time::Duration;

/// Owner name Desk shows while this client holds control.
pub const DEFAULT_OWNER: &str = "franka_desk_client";

/// Desk login.
///
/// The password never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	username: String,
	password: String,
}

impl Credentials {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
		}
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub(crate) fn password(&self) -> &str {
		&self.password
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Everything a [`DeskClient`](crate::DeskClient) needs to reach one robot.
///
/// ```ignore
/// let config = DeskConfig::new("192.168.1.10", Credentials::new("admin", "secret"))
///     .timeout(Duration::from_secs(5))
///     .accept_invalid_certs(true);
/// ```
#[derive(Debug, Clone)]
pub struct DeskConfig {
	/// Robot address as given by the operator (IP or hostname).
	pub robot: String,
	pub credentials: Credentials,
	/// Name registered as control owner.
	pub owner: String,
	/// Per-request timeout; [`None`] keeps the HTTP client's default.
	pub timeout: Option<Duration>,
	/// Skip TLS certificate verification. Desk ships a self-signed certificate.
	pub accept_invalid_certs: bool,
	/// Replaces `https://<robot>` as the request base.
	pub base_url: Option<String>,
}

impl DeskConfig {
	pub fn new(robot: impl Into<String>, credentials: Credentials) -> Self {
		Self {
			robot: robot.into(),
			credentials,
			owner: DEFAULT_OWNER.to_string(),
			timeout: None,
			accept_invalid_certs: false,
			base_url: None,
		}
	}

	pub fn owner(mut self, owner: impl Into<String>) -> Self {
		self.owner = owner.into();
		self
	}

	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
		self.accept_invalid_certs = accept;
		self
	}

	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	/// Base URL requests are sent to, without trailing slash.
	pub fn resolved_base_url(&self) -> String {
		match &self.base_url {
			Some(url) => url.trim_end_matches('/').to_string(),
			None if self.robot.parse::<Ipv6Addr>().is_ok() => format!("https://[{}]", self.robot),
			None => format!("https://{}", self.robot),
		}
	}
}
