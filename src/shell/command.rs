//! Line commands understood by the terminal front end

use crate::search::ClickTarget;

pub const HELP: &str = "\
Type to search. Each plain line replaces the contents of the search box.

  :submit          search the current text now
  :pick N          choose suggestion N from the dropdown
  :chip N          choose example query N (shown when nothing was found)
  :cat ID          search a category (see :cats)
  :cats            list categories
  :focus           focus the search box
  :click TARGET    press the pointer on input, dropdown, category, result or outside
  :type TEXT       type TEXT literally, even if it starts with ':'
  :html            print the current page as HTML
  :help            show this help
  :quit            exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(String),
    Submit,
    Pick(usize),
    Chip(usize),
    Category(String),
    ListCategories,
    Focus,
    Click(ClickTarget),
    Html,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Self::Input(line.to_string()));
        };

        if let Some(text) = rest.strip_prefix("type ") {
            return Ok(Self::Input(text.to_string()));
        }

        let mut parts = rest.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).unwrap_or_default();

        match name {
            "submit" | "s" => Ok(Self::Submit),
            "pick" | "p" => parse_index(arg).map(Self::Pick),
            "chip" => parse_index(arg).map(Self::Chip),
            "cat" | "c" if !arg.is_empty() => Ok(Self::Category(arg.to_string())),
            "cat" | "c" | "cats" => Ok(Self::ListCategories),
            "focus" => Ok(Self::Focus),
            "click" => arg.parse().map(Self::Click),
            "html" => Ok(Self::Html),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command ':{}' (try :help)", other)),
        }
    }
}

/// 1-based index from the user
fn parse_index(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a number from 1, got '{}'", arg)),
    }
}
