use cli::{Command, Invoke};
use std::process::ExitCode;

fn main() -> ExitCode {
    let Ok(command) = Command::parse() else {
        return ExitCode::from(2);
    };

    match command.invoke() {
        Ok(outcome) if outcome.is_findings() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(()) => ExitCode::from(2),
    }
}
