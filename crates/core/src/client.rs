//! HTTP client for one robot's Desk.

use desk_protocol::{
	CONTROL_TOKEN_HEADER, ChangeOperatingModeRequest, JointState, OperatingModeResponse,
	TakeControlRequest, TakeControlResponse, endpoints,
};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::config::{Credentials, DeskConfig};
use crate::error::{AuthError, CommandError, Error, Result};
use crate::mode::OperatingMode;
use crate::session::{ControlToken, Session};

type CommandResult<T> = std::result::Result<T, CommandError>;

/// Client for the Desk API of a single robot.
///
/// The client itself holds no session state. [`login`](Self::login) hands out
/// a [`Session`] that every other call takes explicitly, so the caller sees
/// when control is held and for how long.
#[derive(Debug, Clone)]
pub struct DeskClient {
	http: reqwest::Client,
	base_url: String,
	robot: String,
	credentials: Credentials,
	owner: String,
}

impl DeskClient {
	pub fn new(config: DeskConfig) -> Result<Self> {
		let base_url = config.resolved_base_url();
		let mut builder =
			reqwest::Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		let http = builder
			.build()
			.map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

		Ok(Self {
			http,
			base_url,
			robot: config.robot,
			credentials: config.credentials,
			owner: config.owner,
		})
	}

	pub fn robot(&self) -> &str {
		&self.robot
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Verifies the credentials and opens a session.
	///
	/// A single authenticated read of the operating mode; Desk answers 401 on
	/// bad credentials.
	pub async fn login(&self) -> std::result::Result<Session, AuthError> {
		debug!(robot = %self.robot, user = self.credentials.username(), "logging in");

		let response = self
			.http
			.get(self.url(endpoints::OPERATING_MODE))
			.basic_auth(self.credentials.username(), Some(self.credentials.password()))
			.send()
			.await
			.map_err(|source| AuthError::Unreachable {
				robot: self.robot.clone(),
				source,
			})?;

		let status = response.status();
		if status.is_client_error() {
			return Err(AuthError::Rejected {
				robot: self.robot.clone(),
				status: status.as_u16(),
			});
		}
		if !status.is_success() {
			return Err(AuthError::Unexpected {
				robot: self.robot.clone(),
				status: status.as_u16(),
				message: body_text(response).await,
			});
		}

		info!(robot = %self.robot, user = self.credentials.username(), "logged in");
		Ok(Session::new(self.robot.clone(), self.credentials.clone()))
	}

	/// Takes control of the robot, superseding any other owner.
	///
	/// The returned token is stored in `session` and sent with every
	/// control-gated command afterwards.
	pub async fn take_control<'s>(
		&self,
		session: &'s mut Session,
	) -> CommandResult<&'s ControlToken> {
		let command = Command::TakeControl;
		let request = self.request(session, command)?.json(&TakeControlRequest {
			owner: self.owner.clone(),
		});
		let response = self.dispatch(command, request).await?;
		let body: TakeControlResponse = decode(command, response).await?;

		let token = body
			.token
			.filter(|token| !token.is_empty())
			.ok_or_else(|| CommandError::Protocol {
				command,
				message: "response carried no control token".into(),
			})?;

		let token = session.set_control(ControlToken::new(token));
		info!(robot = %self.robot, owner = %self.owner, token = %token.redacted(), "took control");
		Ok(token)
	}

	/// Releases the joint brakes. The arm becomes physically movable.
	pub async fn unlock_joints(&self, session: &Session) -> CommandResult<()> {
		self.execute(session, Command::UnlockJoints).await
	}

	/// Engages the joint brakes.
	pub async fn lock_joints(&self, session: &Session) -> CommandResult<()> {
		self.execute(session, Command::LockJoints).await
	}

	/// Activates FCI so an external process can drive the robot.
	pub async fn enable_external_control(&self, session: &Session) -> CommandResult<()> {
		self.execute(session, Command::EnableExternalControl).await
	}

	pub async fn disable_external_control(&self, session: &Session) -> CommandResult<()> {
		self.execute(session, Command::DisableExternalControl).await
	}

	pub async fn set_operating_mode(
		&self,
		session: &Session,
		mode: &OperatingMode,
	) -> CommandResult<()> {
		let command = Command::ChangeOperatingMode;
		let request = self.request(session, command)?.json(&ChangeOperatingModeRequest {
			desired_operating_mode: mode.to_string(),
		});
		self.dispatch(command, request).await?;
		info!(robot = %self.robot, %mode, "operating mode change requested");
		Ok(())
	}

	/// Restarts the controller. Desk may answer with an error status while
	/// shutting down; only a failed request is reported.
	pub async fn reboot(&self, session: &Session) -> CommandResult<()> {
		self.execute(session, Command::Reboot).await
	}

	pub async fn operating_mode(&self, session: &Session) -> CommandResult<OperatingMode> {
		let command = Command::ReadOperatingMode;
		let request = self.request(session, command)?;
		let response = self.dispatch(command, request).await?;
		let body: OperatingModeResponse = decode(command, response).await?;
		body.status
			.map(OperatingMode::from)
			.ok_or_else(|| CommandError::Protocol {
				command,
				message: "response carried no status".into(),
			})
	}

	pub async fn joint_states(&self, session: &Session) -> CommandResult<Vec<JointState>> {
		let command = Command::ReadJointStates;
		let request = self.request(session, command)?;
		decode(command, self.dispatch(command, request).await?).await
	}

	async fn execute(&self, session: &Session, command: Command) -> CommandResult<()> {
		let request = self.request(session, command)?;
		self.dispatch(command, request).await?;
		info!(robot = %self.robot, %command, "done");
		Ok(())
	}

	/// Builds an authenticated request, checking the session locally first.
	fn request(&self, session: &Session, command: Command) -> CommandResult<RequestBuilder> {
		if session.robot() != self.robot {
			return Err(CommandError::ForeignSession {
				command,
				session_robot: session.robot().to_string(),
				client_robot: self.robot.clone(),
			});
		}

		let credentials = session.credentials();
		let mut request = self
			.http
			.request(command.method(), self.url(command.path()))
			.basic_auth(credentials.username(), Some(credentials.password()));

		if command.requires_control() {
			let token = session
				.control_token()
				.ok_or(CommandError::NoControl { command })?;
			request = request.header(CONTROL_TOKEN_HEADER, token.as_str());
		}

		Ok(request)
	}

	async fn dispatch(&self, command: Command, request: RequestBuilder) -> CommandResult<Response> {
		debug!(robot = %self.robot, %command, "sending");

		let response = request
			.send()
			.await
			.map_err(|source| CommandError::Transport { command, source })?;

		let status = response.status();
		if command.accepts(status) {
			if !status.is_success() {
				warn!(
					robot = %self.robot,
					%command,
					%status,
					"Desk answered with an error status, continuing"
				);
			}
			return Ok(response);
		}

		if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
			return Err(CommandError::Unauthorized {
				command,
				status: status.as_u16(),
			});
		}

		Err(CommandError::Rejected {
			command,
			status: status.as_u16(),
			message: body_text(response).await,
		})
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}
}

async fn decode<T: DeserializeOwned>(command: Command, response: Response) -> CommandResult<T> {
	response.json().await.map_err(|e| CommandError::Protocol {
		command,
		message: format!("failed to parse response: {e}"),
	})
}

async fn body_text(response: Response) -> String {
	response
		.text()
		.await
		.map(|text| text.trim().to_string())
		.unwrap_or_default()
}
