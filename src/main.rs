//! Treedupe - Cross-Tree Duplicate File Remover
//!
//! Entry point for the treedupe CLI application.

use clap::Parser;
use treedupe::{
    cli::Cli,
    error::{ExitCode, StructuredError},
};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    // Run the application logic
    match treedupe::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::GeneralError;

            // Report the error. Errors go to stdout: the printed message
            // is part of the tool's output protocol, not a diagnostic.
            if json_errors {
                let structured = StructuredError::new(&err, exit_code);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    println!("{json}");
                } else {
                    println!("[{}] Error: {}", exit_code.code_prefix(), err);
                }
            } else {
                println!("[{}] Error: {}", exit_code.code_prefix(), err);
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
