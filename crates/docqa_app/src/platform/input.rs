use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use docqa_core::SelectedDocument;
use thiserror::Error;

/// One line of terminal input, standing in for a UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    SelectFile(PathBuf),
    SetQuestion(String),
    Upload,
    /// Optionally replace the question, then click Ask.
    Ask(Option<String>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

pub(crate) fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (trimmed.trim_end(), ""),
    };

    match keyword {
        "" => Err(ParseError::Empty),
        "file" | "open" => {
            let path = rest.trim();
            if path.is_empty() {
                return Err(ParseError::MissingArgument("file"));
            }
            Ok(Command::SelectFile(PathBuf::from(path)))
        }
        "question" | "q" => Ok(Command::SetQuestion(rest.to_owned())),
        "upload" => Ok(Command::Upload),
        "ask" if rest.is_empty() => Ok(Command::Ask(None)),
        "ask" => Ok(Command::Ask(Some(rest.to_owned()))),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_owned())),
    }
}

/// Reads the whole file into memory; the display name is the file name.
pub(crate) fn load_document(path: &Path) -> io::Result<SelectedDocument> {
    let content = fs::read(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SelectedDocument::new(name, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("file ./docs/report.pdf"),
            Ok(Command::SelectFile(PathBuf::from("./docs/report.pdf")))
        );
        assert_eq!(parse_command("upload\n"), Ok(Command::Upload));
        assert_eq!(parse_command("ask"), Ok(Command::Ask(None)));
        assert_eq!(
            parse_command("ask who wrote it?"),
            Ok(Command::Ask(Some("who wrote it?".to_string())))
        );
        assert_eq!(parse_command("  quit  "), Ok(Command::Quit));
    }

    #[test]
    fn question_keeps_trailing_text() {
        assert_eq!(
            parse_command("question what is it?  "),
            Ok(Command::SetQuestion("what is it?  ".to_string()))
        );
        assert_eq!(
            parse_command("question"),
            Ok(Command::SetQuestion(String::new()))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_command("file"),
            Err(ParseError::MissingArgument("file"))
        );
        assert_eq!(
            parse_command("delete everything"),
            Err(ParseError::Unknown("delete".to_string()))
        );
    }

    #[test]
    fn loads_document_bytes_and_name() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, b"hello").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.name(), "notes.txt");
        assert_eq!(doc.content().as_ref(), b"hello");

        assert!(load_document(&temp.path().join("missing.txt")).is_err());
    }
}
