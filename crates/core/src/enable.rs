//! The login, take control, unlock, enable FCI sequence.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::client::DeskClient;
use crate::error::{Error, Result};
use crate::mode::OperatingMode;
use crate::session::Session;

/// Reboot-and-retry behaviour when taking control fails.
///
/// Desk refuses to hand out control while the controller is in some error
/// states that only a restart clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebootRecovery {
	/// Time to wait after requesting the reboot before polling Desk.
	pub boot_delay: Duration,
	/// Time between operating mode polls.
	pub poll_interval: Duration,
	/// Upper bound on the whole recovery, measured from the reboot request.
	pub boot_timeout: Duration,
}

impl Default for RebootRecovery {
	fn default() -> Self {
		Self {
			boot_delay: Duration::from_secs(60),
			poll_interval: Duration::from_secs(2),
			boot_timeout: Duration::from_secs(300),
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct EnableOptions {
	/// [`None`] reports a failed take control immediately.
	pub recovery: Option<RebootRecovery>,
}

/// Logs in, takes control, unlocks the joints and activates FCI, in that order.
///
/// Stops at the first failure; the returned error names the failed step
/// through [`Error::command`]. On success the session, still holding control,
/// is handed back to the caller.
pub async fn enable(client: &DeskClient, options: &EnableOptions) -> Result<Session> {
	let mut session = client.login().await?;

	info!(robot = client.robot(), "requesting control");
	let first_attempt = client
		.take_control(&mut session)
		.await
		.map(|token| token.redacted());

	let token = match first_attempt {
		Ok(token) => token,
		Err(err) => {
			let Some(recovery) = &options.recovery else {
				return Err(err.into());
			};
			warn!(robot = client.robot(), error = %err, "failed to take control, rebooting");
			reboot_and_wait(client, &session, recovery).await?;
			client.take_control(&mut session).await?.redacted()
		}
	};
	info!(robot = client.robot(), %token, "holding control");

	info!(robot = client.robot(), "unlocking joints");
	client.unlock_joints(&session).await?;

	info!(robot = client.robot(), "activating FCI");
	client.enable_external_control(&session).await?;

	Ok(session)
}

/// Reboots the controller and waits until Desk reports execution mode.
pub async fn reboot_and_wait(
	client: &DeskClient,
	session: &Session,
	recovery: &RebootRecovery,
) -> Result<()> {
	let started = Instant::now();
	client.reboot(session).await?;
	tokio::time::sleep(recovery.boot_delay).await;

	loop {
		// Desk is unreachable for most of the boot.
		match client.operating_mode(session).await {
			Ok(OperatingMode::Execution) => {
				info!(
					robot = client.robot(),
					elapsed_s = started.elapsed().as_secs(),
					"robot back in execution mode"
				);
				return Ok(());
			}
			Ok(mode) => debug!(robot = client.robot(), %mode, "waiting for execution mode"),
			Err(err) => debug!(robot = client.robot(), error = %err, "Desk not ready"),
		}

		if started.elapsed() >= recovery.boot_timeout {
			return Err(Error::BootTimeout {
				robot: client.robot().to_string(),
				waited: started.elapsed(),
			});
		}
		tokio::time::sleep(recovery.poll_interval).await;
	}
}
