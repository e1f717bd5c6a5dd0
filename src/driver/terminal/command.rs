/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle each of the given words.
    Select(Vec<String>),
    Submit,
    Deselect,
    Shuffle,
    NewGame,
    Help,
    Quit,
    /// Blank line; just redraw.
    Nothing,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Command::Nothing;
        };

        match verb.to_ascii_lowercase().as_str() {
            "select" | "s" => Command::Select(parts.map(|w| w.to_owned()).collect()),
            "submit" | "enter" => Command::Submit,
            "deselect" | "clear" => Command::Deselect,
            "shuffle" => Command::Shuffle,
            "new" => Command::NewGame,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(verb.to_owned()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  select WORD [WORD...]  select or deselect words (alias: s)
  submit                 submit the four selected words
  deselect               clear the selection
  shuffle                shuffle the board
  new                    start a new game
  quit                   leave the game";

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn parse_commands() {
        assert_eq!(
            Command::parse("select bass Trout"),
            Command::Select(vec!["bass".into(), "Trout".into()])
        );
        assert_eq!(Command::parse("  S  kayak "), Command::Select(vec!["kayak".into()]));
        assert_eq!(Command::parse("SUBMIT"), Command::Submit);
        assert_eq!(Command::parse("enter"), Command::Submit);
        assert_eq!(Command::parse("clear"), Command::Deselect);
        assert_eq!(Command::parse("shuffle"), Command::Shuffle);
        assert_eq!(Command::parse("new"), Command::NewGame);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Nothing);
        assert_eq!(Command::parse("dance now"), Command::Unknown("dance".into()));
    }
}
