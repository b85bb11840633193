mod enable;
mod fci;
mod joints;
mod mode;
mod reboot;
mod status;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
	let Cli {
		connection,
		format,
		command,
		..
	} = cli;

	match command {
		Commands::Enable(args) => enable::execute(&connection, args, format).await,
		Commands::Unlock(args) => {
			joints::execute(&connection, &args.robot, joints::Brakes::Open, format).await
		}
		Commands::Lock(args) => {
			joints::execute(&connection, &args.robot, joints::Brakes::Closed, format).await
		}
		Commands::Fci(args) => fci::execute(&connection, args, format).await,
		Commands::Mode(args) => mode::execute(&connection, args, format).await,
		Commands::Reboot(args) => reboot::execute(&connection, &args.robot, format).await,
		Commands::Status(args) => status::execute(&connection, &args.robot, format).await,
	}
}
