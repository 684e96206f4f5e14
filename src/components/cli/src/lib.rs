mod check;
mod help;

pub use check::{CheckCommand, CheckOptions};
use derive_more::IsVariant;
use enum_dispatch::enum_dispatch;
pub use help::HelpCommand;

#[enum_dispatch(Invoke)]
#[derive(Clone, Debug)]
pub enum Command {
    Help(HelpCommand),
    Check(CheckCommand),
}

impl Command {
    pub fn parse() -> Result<Self, ()> {
        Self::parse_args(std::env::args().skip(1))
    }

    /// Asking for help anywhere before `--` wins over every other option.
    pub fn parse_args(args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let args = args.collect::<Vec<_>>();

        let wants_help = args
            .iter()
            .take_while(|arg| *arg != "--")
            .any(|arg| arg == "-h" || arg == "--help");

        if wants_help {
            HelpCommand::parse(args.into_iter()).map(Self::from)
        } else {
            CheckCommand::parse(args.into_iter()).map(Self::from)
        }
    }
}

/// What a successful command found, mapped to the process exit status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum Outcome {
    Clean,
    Findings,
}

#[enum_dispatch]
pub trait Invoke {
    fn invoke(self) -> Result<Outcome, ()>;
}
