use desk::Command;
use tracing::warn;

use crate::cli::ConnectionArgs;
use crate::context::LOGIN_STEP;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, StepsData, print_result};

pub async fn execute(connection: &ConnectionArgs, robot: &str, format: OutputFormat) -> Result<()> {
	let builder = ResultBuilder::new("reboot").inputs(connection.inputs(robot));
	let client = connection.client(robot)?;

	let session = client.login().await?;
	warn!(robot = client.robot(), "rebooting robot controller");
	client.reboot(&session).await?;

	let data = StepsData {
		robot: session.robot().to_string(),
		control_token: None,
		steps: vec![LOGIN_STEP.to_string(), Command::Reboot.to_string()],
	};
	print_result(&builder.data(data).build(), format);
	Ok(())
}
