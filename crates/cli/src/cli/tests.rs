use clap::Parser;

use super::*;

#[test]
fn parse_enable_command() {
	let cli = Cli::try_parse_from(["desk", "enable", "192.168.1.10"]).unwrap();

	match cli.command {
		Commands::Enable(args) => {
			assert_eq!(args.robot, "192.168.1.10");
			assert!(!args.reboot_on_failure);
			assert_eq!(args.boot_delay, 60);
			assert_eq!(args.boot_timeout, 300);
		}
		_ => panic!("Expected Enable command"),
	}
}

#[test]
fn enable_requires_robot_ip() {
	assert!(Cli::try_parse_from(["desk", "enable"]).is_err());
}

#[test]
fn boot_delay_requires_reboot_flag() {
	assert!(Cli::try_parse_from(["desk", "enable", "10.0.0.2", "--boot-delay", "5"]).is_err());

	let cli = Cli::try_parse_from([
		"desk",
		"enable",
		"10.0.0.2",
		"--reboot-on-failure",
		"--boot-delay",
		"5",
	])
	.unwrap();
	match cli.command {
		Commands::Enable(args) => {
			assert!(args.reboot_on_failure);
			assert_eq!(args.boot_delay, 5);
		}
		_ => panic!("Expected Enable command"),
	}
}

#[test]
fn parse_fci_actions() {
	let cli = Cli::try_parse_from(["desk", "fci", "10.0.0.2", "deactivate"]).unwrap();
	match cli.command {
		Commands::Fci(args) => assert_eq!(args.action, FciAction::Deactivate),
		_ => panic!("Expected Fci command"),
	}

	assert!(Cli::try_parse_from(["desk", "fci", "10.0.0.2", "toggle"]).is_err());
}

#[test]
fn parse_mode_command() {
	let cli = Cli::try_parse_from(["desk", "mode", "10.0.0.2", "programming"]).unwrap();
	match cli.command {
		Commands::Mode(args) => {
			assert_eq!(args.robot, "10.0.0.2");
			assert_eq!(args.mode, "programming");
		}
		_ => panic!("Expected Mode command"),
	}
}

#[test]
fn connection_flags_are_global() {
	let cli = Cli::try_parse_from([
		"desk",
		"status",
		"10.0.0.2",
		"--username",
		"admin",
		"--password",
		"secret",
		"--owner",
		"lab-pc",
		"--timeout-ms",
		"5000",
		"--insecure",
	])
	.unwrap();

	assert_eq!(cli.connection.username.as_deref(), Some("admin"));
	assert_eq!(cli.connection.password.as_deref(), Some("secret"));
	assert_eq!(cli.connection.owner, "lab-pc");
	assert_eq!(cli.connection.timeout_ms, Some(5000));
	assert!(cli.connection.insecure);
	assert_eq!(cli.command.name(), "status");
}

#[test]
fn owner_defaults_to_library_default() {
	let cli = Cli::try_parse_from(["desk", "reboot", "10.0.0.2"]).unwrap();
	assert_eq!(cli.connection.owner, DEFAULT_OWNER);
	assert!(!cli.connection.insecure);
	assert_eq!(cli.connection.base_url, None);
}

#[test]
fn verbose_flag_short_and_long() {
	let cli = Cli::try_parse_from(["desk", "-v", "status", "10.0.0.2"]).unwrap();
	assert_eq!(cli.verbose, 1);

	let cli = Cli::try_parse_from(["desk", "--verbose", "status", "10.0.0.2"]).unwrap();
	assert_eq!(cli.verbose, 1);

	let cli = Cli::try_parse_from(["desk", "-vv", "status", "10.0.0.2"]).unwrap();
	assert_eq!(cli.verbose, 2);
}

#[test]
fn format_flag_parses() {
	let cli = Cli::try_parse_from(["desk", "-f", "json", "status", "10.0.0.2"]).unwrap();
	assert_eq!(cli.format, OutputFormat::Json);

	let cli = Cli::try_parse_from(["desk", "status", "10.0.0.2"]).unwrap();
	assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn cli_definition_is_consistent() {
	use clap::CommandFactory;
	Cli::command().debug_assert();
}
