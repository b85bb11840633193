//! Turns global CLI flags into a Desk client for one robot.
//!
//! Credentials arrive here already resolved by clap (flag or environment
//! variable); the library never reads the environment itself.

use std::time::Duration;

use desk::{Command, Credentials, DeskClient, DeskConfig, Session};
use tracing::debug;

use crate::cli::ConnectionArgs;
use crate::error::{DeskCliError, Result};
use crate::output::CommandInputs;

/// Step name used for the login in result data.
pub const LOGIN_STEP: &str = "login";

impl ConnectionArgs {
	pub fn credentials(&self) -> Result<Credentials> {
		match (self.username.as_deref(), self.password.as_deref()) {
			(Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
				Ok(Credentials::new(user, pass))
			}
			_ => Err(DeskCliError::MissingCredentials),
		}
	}

	pub fn config(&self, robot: &str) -> Result<DeskConfig> {
		let robot = robot.trim();
		if robot.is_empty() {
			return Err(DeskCliError::InvalidInput("robot address is empty".into()));
		}

		let mut config = DeskConfig::new(robot, self.credentials()?)
			.owner(self.owner.as_str())
			.accept_invalid_certs(self.insecure);

		match self.timeout_ms {
			Some(0) => {
				return Err(DeskCliError::InvalidInput(
					"--timeout-ms must be greater than zero".into(),
				));
			}
			Some(ms) => config = config.timeout(Duration::from_millis(ms)),
			None => {}
		}

		if let Some(url) = &self.base_url {
			if !url.starts_with("http://") && !url.starts_with("https://") {
				return Err(DeskCliError::InvalidInput(format!(
					"--base-url must start with http:// or https://, got {url}"
				)));
			}
			config = config.base_url(url.as_str());
		}

		Ok(config)
	}

	pub fn client(&self, robot: &str) -> Result<DeskClient> {
		let client = DeskClient::new(self.config(robot)?)?;
		debug!(robot = client.robot(), base_url = client.base_url(), "client ready");
		Ok(client)
	}

	pub fn inputs(&self, robot: &str) -> CommandInputs {
		CommandInputs {
			robot: robot.to_string(),
			base_url: self.base_url.clone(),
			owner: Some(self.owner.clone()),
		}
	}
}

/// Logs in and takes control, returning the steps performed.
pub async fn controlled_session(client: &DeskClient) -> Result<(Session, Vec<String>)> {
	let mut session = client.login().await?;
	client.take_control(&mut session).await?;
	Ok((session, vec![LOGIN_STEP.to_string(), Command::TakeControl.to_string()]))
}
