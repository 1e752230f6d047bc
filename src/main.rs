/*!
 * Command-line interface for treescribe
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use treescribe::command;
use treescribe::config::{Args, Config, UserSettings};
use treescribe::prompt::TerminalPrompter;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let settings = match UserSettings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = Config::resolve(args, settings);

    // Cancellation is a silent, successful exit; everything else that goes
    // wrong surfaces as a single message here.
    match command::run(&config, &TerminalPrompter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error generating the structure: {err}");
            ExitCode::FAILURE
        }
    }
}
