use clap::Parser;
use desk_cli::{
	cli::Cli,
	commands,
	error::DeskCliError,
	logging,
	output::{self, OutputFormat, ResultBuilder},
};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();

	if let Err(err) = commands::dispatch(cli).await {
		handle_error(err, command, format);
		std::process::exit(1);
	}
}

fn handle_error(err: DeskCliError, command: &str, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Always print to stderr for humans
	output::print_error_stderr(&cmd_error);

	// Also emit the JSON envelope with ok=false for scripts
	if format != OutputFormat::Text {
		let result: output::CommandResult<()> =
			ResultBuilder::new(command).error(cmd_error).build();
		output::print_result(&result, format);
	}
}
