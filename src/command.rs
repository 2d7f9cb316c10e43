use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One user action on the stopwatch controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Lap,
    Reset,
    Quit,
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Toggle => write!(f, "toggle"),
            Command::Lap => write!(f, "lap"),
            Command::Reset => write!(f, "reset"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CommandParseError(String);

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown command {:?} (expected start/stop, lap, reset or quit)",
            self.0
        )
    }
}

impl Error for CommandParseError {}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "start" | "stop" | "toggle" => Ok(Command::Toggle),
            "l" | "lap" => Ok(Command::Lap),
            "r" | "reset" => Ok(Command::Reset),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandParseError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("s".parse(), Ok(Command::Toggle));
        assert_eq!("Start".parse(), Ok(Command::Toggle));
        assert_eq!(" stop \n".parse(), Ok(Command::Toggle));
        assert_eq!("L".parse(), Ok(Command::Lap));
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "pause".parse::<Command>().unwrap_err();
        assert_eq!(err, CommandParseError("pause".to_string()));
        assert!(err.to_string().contains("\"pause\""));
        assert!("".parse::<Command>().is_err());
    }
}
