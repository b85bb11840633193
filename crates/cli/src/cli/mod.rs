#[cfg(test)]
mod tests;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Args, Parser, Subcommand, ValueEnum};
use desk::DEFAULT_OWNER;

use crate::output::OutputFormat;

/// Root CLI for desk.
#[derive(Parser, Debug)]
#[command(name = "desk")]
#[command(about = "Franka Desk CLI - take control, unlock the joints and enable FCI")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v progress, -vv every request)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: text (default), json, or ndjson
	#[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
	pub format: OutputFormat,

	#[command(flatten)]
	pub connection: ConnectionArgs,

	#[command(subcommand)]
	pub command: Commands,
}

/// How to reach and authenticate against Desk.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
	/// Desk username
	#[arg(long, global = true, env = "FRANKA_DESK_USERNAME", hide_env_values = true)]
	pub username: Option<String>,

	/// Desk password
	#[arg(long, global = true, env = "FRANKA_DESK_PASSWORD", hide_env_values = true)]
	pub password: Option<String>,

	/// Name Desk shows as the owner of the control token
	#[arg(long, global = true, value_name = "NAME", default_value = DEFAULT_OWNER)]
	pub owner: String,

	/// Per-request timeout in milliseconds (default: none)
	#[arg(long, global = true, value_name = "MS")]
	pub timeout_ms: Option<u64>,

	/// Accept Desk's self-signed TLS certificate
	#[arg(long, global = true)]
	pub insecure: bool,

	/// Send requests here instead of https://<ROBOT_IP>
	#[arg(long, global = true, value_name = "URL")]
	pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Take control, unlock the joints and activate FCI.
	Enable(EnableArgs),
	/// Take control and release the joint brakes.
	Unlock(RobotArgs),
	/// Take control and engage the joint brakes.
	Lock(RobotArgs),
	/// Take control and switch FCI on or off.
	Fci(FciArgs),
	/// Take control and change the operating mode.
	Mode(ModeArgs),
	/// Reboot the robot controller.
	Reboot(RobotArgs),
	/// Show operating mode and joint brake states.
	Status(RobotArgs),
}

impl Commands {
	/// Subcommand name used in the output envelope.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Enable(_) => "enable",
			Commands::Unlock(_) => "unlock",
			Commands::Lock(_) => "lock",
			Commands::Fci(_) => "fci",
			Commands::Mode(_) => "mode",
			Commands::Reboot(_) => "reboot",
			Commands::Status(_) => "status",
		}
	}
}

#[derive(Args, Debug, Clone)]
pub struct RobotArgs {
	/// IP address or hostname of the robot
	#[arg(value_name = "ROBOT_IP")]
	pub robot: String,
}

#[derive(Args, Debug, Clone)]
pub struct EnableArgs {
	/// IP address or hostname of the robot
	#[arg(value_name = "ROBOT_IP")]
	pub robot: String,

	/// Reboot the robot and retry once if taking control fails
	#[arg(long)]
	pub reboot_on_failure: bool,

	/// Seconds to wait after the reboot before polling Desk
	#[arg(long, value_name = "SECS", default_value_t = 60, requires = "reboot_on_failure")]
	pub boot_delay: u64,

	/// Give up if the robot is not in execution mode this many seconds after the reboot
	#[arg(long, value_name = "SECS", default_value_t = 300, requires = "reboot_on_failure")]
	pub boot_timeout: u64,
}

#[derive(Args, Debug, Clone)]
pub struct FciArgs {
	/// IP address or hostname of the robot
	#[arg(value_name = "ROBOT_IP")]
	pub robot: String,

	#[arg(value_enum)]
	pub action: FciAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FciAction {
	Activate,
	Deactivate,
}

#[derive(Args, Debug, Clone)]
pub struct ModeArgs {
	/// IP address or hostname of the robot
	#[arg(value_name = "ROBOT_IP")]
	pub robot: String,

	/// Target operating mode, e.g. execution or programming
	#[arg(value_name = "MODE")]
	pub mode: String,
}

/// Help colors matching cargo's.
pub fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
		.valid(AnsiColor::Cyan.on_default())
		.error(AnsiColor::Red.on_default().bold())
}
