//! `desk enable`: the whole login, take control, unlock, FCI sequence.

use std::time::Duration;

use desk::{Command, ControlToken, EnableOptions, RebootRecovery};
use tracing::info;

use crate::cli::{ConnectionArgs, EnableArgs};
use crate::context::LOGIN_STEP;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, StepsData, print_result};

pub async fn execute(
	connection: &ConnectionArgs,
	args: EnableArgs,
	format: OutputFormat,
) -> Result<()> {
	let builder = ResultBuilder::new("enable").inputs(connection.inputs(&args.robot));
	let client = connection.client(&args.robot)?;

	let options = EnableOptions {
		recovery: args.reboot_on_failure.then(|| RebootRecovery {
			boot_delay: Duration::from_secs(args.boot_delay),
			boot_timeout: Duration::from_secs(args.boot_timeout),
			..RebootRecovery::default()
		}),
	};

	info!(robot = client.robot(), "enabling robot");
	let session = desk::enable(&client, &options).await?;
	info!(robot = client.robot(), "robot ready for FCI");

	let steps = vec![
		LOGIN_STEP.to_string(),
		Command::TakeControl.to_string(),
		Command::UnlockJoints.to_string(),
		Command::EnableExternalControl.to_string(),
	];
	let data = StepsData {
		robot: session.robot().to_string(),
		control_token: session.control_token().map(ControlToken::redacted),
		steps,
	};
	print_result(&builder.data(data).build(), format);
	Ok(())
}
