use crate::cli::ConnectionArgs;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, StatusData, print_result};

/// Read-only: logs in but never takes control.
pub async fn execute(connection: &ConnectionArgs, robot: &str, format: OutputFormat) -> Result<()> {
	let builder = ResultBuilder::new("status").inputs(connection.inputs(robot));
	let client = connection.client(robot)?;

	let session = client.login().await?;
	let operating_mode = client.operating_mode(&session).await?;
	let joints = client.joint_states(&session).await?;
	let unlocked = !joints.is_empty()
		&& joints.iter().all(|joint| {
			joint
				.brake_status
				.as_deref()
				.is_some_and(|s| s.eq_ignore_ascii_case("open"))
		});

	let data = StatusData {
		robot: session.robot().to_string(),
		operating_mode,
		joints,
		unlocked,
	};
	print_result(&builder.data(data).build(), format);
	Ok(())
}
