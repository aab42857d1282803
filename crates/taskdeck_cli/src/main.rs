//! taskdeck interactive session shell.
//!
//! # Responsibility
//! - Bootstrap core logging, then run the line-command loop over stdin.
//! - Hold all task state in memory for the lifetime of the session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use taskdeck_core::{core_version, default_log_level, init_logging};

mod shell;

use shell::{parse_command, Command, ParseError, Shell};

fn main() {
    bootstrap_logging();

    println!("taskdeck {} (type `help` for commands)", core_version());

    let stdin = io::stdin();
    let mut shell = Shell::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let quitting = command == Command::Quit;
        println!("{}", shell.execute(command, &today()));
        if quitting {
            break;
        }
    }
}

/// Render-time calendar date, zero-padded `YYYY-MM-DD`.
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

// Logging failures must not block the session; the shell stays usable
// without a log file.
fn bootstrap_logging() {
    let level = std::env::var("TASKDECK_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = std::env::var_os("TASKDECK_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("taskdeck-logs"));

    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    } else {
        log::info!("event=session_start module=cli status=ok version={}", core_version());
    }
}
