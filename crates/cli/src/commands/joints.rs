use desk::{Command, ControlToken};

use crate::cli::ConnectionArgs;
use crate::context::controlled_session;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, StepsData, print_result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brakes {
	Open,
	Closed,
}

pub async fn execute(
	connection: &ConnectionArgs,
	robot: &str,
	brakes: Brakes,
	format: OutputFormat,
) -> Result<()> {
	let name = match brakes {
		Brakes::Open => "unlock",
		Brakes::Closed => "lock",
	};
	let builder = ResultBuilder::new(name).inputs(connection.inputs(robot));
	let client = connection.client(robot)?;

	let (session, mut steps) = controlled_session(&client).await?;
	let command = match brakes {
		Brakes::Open => {
			client.unlock_joints(&session).await?;
			Command::UnlockJoints
		}
		Brakes::Closed => {
			client.lock_joints(&session).await?;
			Command::LockJoints
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
