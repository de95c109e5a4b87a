//! Line based input script. Each line is one command; blank lines and lines starting
//! with `#` are skipped.
use std::{
    io::{self, BufRead, Write},
    str::FromStr,
    time::Duration,
};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use battlefront::{Key, Point};

/// Help text listing every command.
pub const HELP: &str = "Available Commands:
    move <x>,<y>      move the pointer to the given device position.
    press             press the primary button.
    release           release the primary button.
    click <x>,<y>     move the pointer, then press and release the primary button.
    key <key>         press and release a key.
    hold <key>        press a key and keep it held.
    lift <key>        release a held key.
    wait <seconds>    let time pass, running a frame every tenth of a second.
    show              print the current screen.
    help              print this message.
    quit              stop reading commands.

Available Keys:
    escape (esc), enter (return), up, down, left, right, r, shift, c";

/// A single scripted action.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Move(Point),
    Press,
    Release,
    Click(Point),
    Key(Key),
    Hold(Key),
    Lift(Key),
    Wait(Duration),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseCommandError {
    #[error("invalid key: {0}, use '?' for the list of keys")]
    Key(String),
    #[error("invalid command \"{0}\". Use '?' for help")]
    Unknown(String),
}

fn parse_key(name: &str) -> Result<Key, ParseCommandError> {
    Ok(match name {
        "escape" | "esc" => Key::Escape,
        "enter" | "return" => Key::Enter,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "r" => Key::R,
        "shift" => Key::Shift,
        "c" => Key::C,
        other => return Err(ParseCommandError::Key(other.to_owned())),
    })
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse a single trimmed, lower case command line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        /// Matcher for commands taking a position.
        static POINTER: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?P<cmd>move|click)\s+
        (?:(?:at|to)\s+)?
        (?P<x>-?[0-9]+(?:\.[0-9]+)?)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+(?:\.[0-9]+)?)$",
            )
            .unwrap()
        });
        static KEY: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(?P<cmd>key|hold|lift)\s+(?P<key>\w+)$").unwrap());
        static WAIT: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^wait\s+(?P<secs>[0-9]+(?:\.[0-9]+)?)s?$").unwrap());

        match line {
            "press" => return Ok(Command::Press),
            "release" => return Ok(Command::Release),
            "show" | "print" => return Ok(Command::Show),
            "?" | "help" | "h" => return Ok(Command::Help),
            "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }
        if let Some(captures) = POINTER.captures(line) {
            // The pattern only admits valid numbers.
            let x = captures["x"].parse().unwrap_or_default();
            let y = captures["y"].parse().unwrap_or_default();
            let point = Point::new(x, y);
            return Ok(match &captures["cmd"] {
                "move" => Command::Move(point),
                _ => Command::Click(point),
            });
        }
        if let Some(captures) = KEY.captures(line) {
            let key = parse_key(&captures["key"])?;
            return Ok(match &captures["cmd"] {
                "key" => Command::Key(key),
                "hold" => Command::Hold(key),
                _ => Command::Lift(key),
            });
        }
        if let Some(captures) = WAIT.captures(line) {
            let secs: f64 = captures["secs"].parse().unwrap_or_default();
            return Duration::try_from_secs_f64(secs)
                .map(Command::Wait)
                .map_err(|_| ParseCommandError::Unknown(line.to_owned()));
        }
        Err(ParseCommandError::Unknown(line.to_owned()))
    }
}

/// Reads commands from a script or from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
    prompt: Option<&'static str>,
}

impl<B> InputReader<B> {
    /// Read without printing a prompt, for script files.
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
            prompt: None,
        }
    }

    /// Print `prompt` before reading each line.
    pub fn interactive(read: B, prompt: &'static str) -> Self {
        Self {
            prompt: Some(prompt),
            ..Self::new(read)
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Read lines until one parses as a command. Returns `None` at the end of input.
    /// Invalid lines are reported and skipped.
    pub fn next_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            if let Some(prompt) = self.prompt {
                print!("{} ", prompt);
                io::stdout().flush()?;
            }
            self.buf.clear();
            if self.read.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            let line = self.buf.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.parse() {
                Ok(cmd) => return Ok(Some(cmd)),
                Err(err) => println!("{}", err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_commands() {
        assert_eq!(
            "click 40,570".parse::<Command>(),
            Ok(Command::Click(Point::new(40.0, 570.0)))
        );
        assert_eq!(
            "move to 12.5 -3".parse::<Command>(),
            Ok(Command::Move(Point::new(12.5, -3.0)))
        );
    }

    #[test]
    fn key_commands() {
        assert_eq!("key esc".parse::<Command>(), Ok(Command::Key(Key::Escape)));
        assert_eq!("hold shift".parse::<Command>(), Ok(Command::Hold(Key::Shift)));
        assert_eq!("lift c".parse::<Command>(), Ok(Command::Lift(Key::C)));
        assert_eq!(
            "key space".parse::<Command>(),
            Err(ParseCommandError::Key("space".to_owned()))
        );
    }

    #[test]
    fn wait_accepts_fractions() {
        assert_eq!(
            "wait 1.5".parse::<Command>(),
            Ok(Command::Wait(Duration::from_millis(1500)))
        );
        assert_eq!("wait 180s".parse::<Command>(), Ok(Command::Wait(Duration::from_secs(180))));
    }

    #[test]
    fn wait_too_long_for_a_duration_is_rejected() {
        assert_eq!(
            "wait 99999999999999999999".parse::<Command>(),
            Err(ParseCommandError::Unknown("wait 99999999999999999999".to_owned()))
        );
        assert_eq!(
            ParseCommandError::Unknown("wait 99999999999999999999".to_owned()).to_string(),
            "invalid command \"wait 99999999999999999999\". Use '?' for help"
        );
    }

    #[test]
    fn reader_skips_comments_and_bad_lines() {
        let script = "# start\n\nCLICK 40, 570\nfly away\nquit\n";
        let mut reader = InputReader::new(script.as_bytes());
        assert_eq!(
            reader.next_command().unwrap(),
            Some(Command::Click(Point::new(40.0, 570.0)))
        );
        assert_eq!(reader.next_command().unwrap(), Some(Command::Quit));
        assert_eq!(reader.next_command().unwrap(), None);
    }
}
