use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

pub fn init_logging(verbosity: u8) {
	// 0 = warnings only (tolerated Desk errors still show up)
	// 1 (-v) = step-by-step progress from desk and desk-cli
	// 2+ (-vv) = every request, including reqwest/hyper internals
	let filter = match verbosity {
		0 => "warn",
		1 => "warn,desk=info,desk_cli=info",
		_ => "debug",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(verbosity > 1)
		.with_level(true)
		.compact()
		.init();
}
