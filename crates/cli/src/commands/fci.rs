use desk::{Command, ControlToken};

use crate::cli::{ConnectionArgs, FciAction, FciArgs};
use crate::context::controlled_session;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, StepsData, print_result};

pub async fn execute(
	connection: &ConnectionArgs,
	args: FciArgs,
	format: OutputFormat,
) -> Result<()> {
	let builder = ResultBuilder::new("fci").inputs(connection.inputs(&args.robot));
	let client = connection.client(&args.robot)?;

	let (session, mut steps) = controlled_session(&client).await?;
	let command = match args.action {
		FciAction::Activate => {
			client.enable_external_control(&session).await?;
			Command::EnableExternalControl
		}
		FciAction::Deactivate => {
			client.disable_external_control(&session).await?;
			Command::DisableExternalControl
		}
	};
	steps.push(command.to_string());

	let data = StepsData {
		robot: session.robot().to_string(),
		control_token: session.control_token().map(ControlToken::redacted),
		steps,
	};
	print_result(&builder.data(data).build(), format);
	Ok(())
}
