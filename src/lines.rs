//! Blank-line stripping for design files.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use crate::fsutil::replace_file;

/// Copy `reader` to `writer` without lines that are empty or whitespace-only.
///
/// Kept lines keep their own terminator (`\n`, `\r\n` or none on the last
/// line). Returns the number of dropped lines.
pub fn strip_empty_lines<R: BufRead, W: Write + ?Sized>(mut reader: R, writer: &mut W) -> io::Result<usize> {
    let mut line = String::new();
    let mut dropped = 0;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            dropped += 1;
        } else {
            writer.write_all(line.as_bytes())?;
        }
    }
    writer.flush()?;
    Ok(dropped)
}

/// Both paths name the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening '{}'", path.display()))?;
    Ok(BufReader::new(file))
}

/// stdin → stdout, file → stdout, file → file, or file rewritten in place when
/// both paths point to the same file.
pub fn run(input: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let dropped = match (input, output) {
        (None, _) => {
            let stdout = io::stdout();
            strip_empty_lines(io::stdin().lock(), &mut BufWriter::new(stdout.lock()))
                .context("filtering stdin")?
        }
        (Some(input), None) => {
            let stdout = io::stdout();
            strip_empty_lines(open(input)?, &mut BufWriter::new(stdout.lock()))
                .with_context(|| format!("filtering '{}'", input.display()))?
        }
        (Some(input), Some(output)) if same_file(input, output) => {
            let reader = open(input)?;
            let mut dropped = 0;
            replace_file(input, |w| {
                dropped = strip_empty_lines(reader, w)?;
                Ok(())
            })
            .with_context(|| format!("rewriting '{}' in place", input.display()))?;
            info!(path = %input.display(), "rewrote in place");
            dropped
        }
        (Some(input), Some(output)) => {
            let reader = open(input)?;
            let file = File::create(output)
                .with_context(|| format!("creating '{}'", output.display()))?;
            strip_empty_lines(reader, &mut BufWriter::new(file))
                .with_context(|| format!("writing '{}'", output.display()))?
        }
    };
    debug!(dropped, "empty lines removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(text: &str) -> (String, usize) {
        let mut out = Vec::new();
        let dropped = strip_empty_lines(text.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), dropped)
    }

    #[test]
    fn drops_blank_and_whitespace_lines() {
        assert_eq!(strip("a\n\n  \t\nb\n"), ("a\nb\n".to_string(), 2));
    }

    #[test]
    fn keeps_line_terminators() {
        assert_eq!(strip("a\r\n\r\nb"), ("a\r\nb".to_string(), 1));
        assert_eq!(strip("  indented  \n"), ("  indented  \n".to_string(), 0));
    }

    #[test]
    fn empty_input() {
        assert_eq!(strip(""), (String::new(), 0));
        assert_eq!(strip("\n\n"), (String::new(), 2));
    }

    #[test]
    fn file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "{\n\n key=\"A\"\n\n}\n").unwrap();

        run(Some(&input), Some(&output)).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "{\n key=\"A\"\n}\n");
        assert_eq!(fs::read_to_string(&input).unwrap(), "{\n\n key=\"A\"\n\n}\n");
    }

    #[test]
    fn same_path_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("designs.txt");
        fs::write(&path, "a\n\nb\n").unwrap();
        let alias = dir.path().join(".").join("designs.txt");

        run(Some(&path), Some(&alias)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
        let names: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let output = dir.path().join("out.txt");
        assert!(run(Some(&missing), Some(&output)).is_err());
        assert!(!output.exists());
    }
}
