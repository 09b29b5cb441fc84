use std::process::ExitCode;

use palc::Parser;
use zcradle::cli::*;

fn main() -> ExitCode {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_env_filter(cli.log_level.as_deref().unwrap_or("warn"))
		.with_writer(std::io::stderr)
		.init();

	let cradle = zcradle::Cradle::new(cli.mode.settings());
	let result = match &cli.mode {
		Mode::Repl { .. } => {
			cradle.run_prompt();
			Ok(())
		}
		mode => match mode.path() {
			Some(path) => cradle.run_file(path),
			None => cradle.run_stdin(),
		},
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("error: {e}");
			ExitCode::FAILURE
		}
	}
}
