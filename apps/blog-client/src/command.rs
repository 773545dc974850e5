//! Line commands typed at the client prompt.

use cryptoblog_core::domain::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` / `cancel` / `toggle`: show or hide the composer.
    Toggle,
    /// `title|body|author <text>`: replace a field value.
    Set(Field, String),
    Submit,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("type a command, or `help`")]
    Empty,

    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  new | cancel          show or hide the post form
  title <text>          set the title
  body <text>           set the body (\\n starts a new line)
  author <text>         set the author
  submit                validate and publish the post
  refresh               reload the feed
  help                  show this message
  quit                  exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_end_matches(['\r', '\n'])),
            None => (line.trim_end(), ""),
        };

        match word.to_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "new" | "cancel" | "toggle" => Ok(Command::Toggle),
            "title" => Ok(Command::Set(Field::Title, rest.to_string())),
            "body" => Ok(Command::Set(Field::Body, rest.replace("\\n", "\n"))),
            "author" => Ok(Command::Set(Field::Author, rest.to_string())),
            "submit" => Ok(Command::Submit),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(ParseError::Unknown(word.to_string())),
        }
    }
}
