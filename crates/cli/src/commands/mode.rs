use desk::{Command, ControlToken, OperatingMode};
use tracing::info;

use crate::cli::{ConnectionArgs, ModeArgs};
use crate::context::controlled_session;
use crate::error::{DeskCliError, Result};
use crate::output::{OutputFormat, ResultBuilder, StepsData, print_result};

pub async fn execute(
	connection: &ConnectionArgs,
	args: ModeArgs,
	format: OutputFormat,
) -> Result<()> {
	let builder = ResultBuilder::new("mode").inputs(connection.inputs(&args.robot));
	let mode = parse_mode(&args.mode)?;
	let client = connection.client(&args.robot)?;

	let (session, mut steps) = controlled_session(&client).await?;
	client.set_operating_mode(&session, &mode).await?;
	steps.push(Command::ChangeOperatingMode.to_string());
	info!(robot = client.robot(), %mode, "operating mode changed");

	let data = StepsData {
		robot: session.robot().to_string(),
		control_token: session.control_token().map(ControlToken::redacted),
		steps,
	};
	print_result(&builder.data(data).build(), format);
	Ok(())
}

fn parse_mode(raw: &str) -> Result<OperatingMode> {
	let raw = raw.trim();
	if raw.is_empty() {
		return Err(DeskCliError::InvalidInput("operating mode is empty".into()));
	}
	let Ok(mode) = raw.parse::<OperatingMode>();
	Ok(mode)
}
