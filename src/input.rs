use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::ReportError;

/// Read a design file, without its byte-order mark. `None` if it does not exist.
pub fn read_input(path: &Path) -> Result<Option<String>, ReportError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(strip_bom(text))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ReportError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

pub fn create_placeholder(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Decides whether a missing input file gets replaced by placeholder data.
pub trait PlaceholderPrompt {
    fn confirm(&mut self, missing: &Path) -> io::Result<bool>;
}

/// Asks on the terminal.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl PlaceholderPrompt for StdinPrompt {
    fn confirm(&mut self, missing: &Path) -> io::Result<bool> {
        ask(io::stdin().lock(), io::stdout().lock(), missing)
    }
}

/// Answers without asking (`--yes` / `--no`).
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl PlaceholderPrompt for FixedAnswer {
    fn confirm(&mut self, _missing: &Path) -> io::Result<bool> {
        Ok(self.0)
    }
}

pub fn ask<R: BufRead, W: Write>(mut input: R, mut output: W, missing: &Path) -> io::Result<bool> {
    write!(
        output,
        "Input file '{}' not found. Create a placeholder file for testing? [y/N] ",
        missing.display()
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// `y`, `yes`, `j` and `ja`, in any case.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "j" | "ja"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_input(&dir.path().join("absent.txt")).unwrap(), None);
    }

    #[test]
    fn byte_order_mark_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("designs.txt");
        fs::write(&path, "\u{feff}{ key=\"A\" }").unwrap();
        assert_eq!(read_input(&path).unwrap().as_deref(), Some("{ key=\"A\" }"));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_input(dir.path()),
            Err(ReportError::Read { .. })
        ));
    }

    #[test]
    fn prompt_reads_one_answer() {
        let mut shown = Vec::new();
        let yes = ask("J\n".as_bytes(), &mut shown, Path::new("in.txt")).unwrap();
        assert!(yes);
        assert!(String::from_utf8(shown).unwrap().contains("'in.txt' not found"));

        assert!(!ask("n\n".as_bytes(), io::sink(), Path::new("in.txt")).unwrap());
        assert!(!ask("".as_bytes(), io::sink(), Path::new("in.txt")).unwrap());
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Yes", " j ", "JA\n"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
        for answer in ["", "n", "nein", "maybe"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }
}
