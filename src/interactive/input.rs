use anyhow::Result;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};

/// A line-oriented input. `Ok(None)` means the user is done (EOF or Ctrl-C).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn remember(&mut self, _line: &str) {}
}

pub struct EditorSource {
    editor: rustyline::DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: rustyline::DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

pub struct StdioSource<R> {
    reader: R,
}

impl<R: BufRead> StdioSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StdioSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Reads notes until a lone `.` line, two empty lines in a row, or end of
/// input. Single empty lines stay inside the notes. `Ok(None)` on end of input
/// before any text was entered.
pub fn read_notes(source: &mut dyn LineSource) -> Result<Option<String>> {
    let mut lines: Vec<String> = Vec::new();
    loop {
        let prompt = if lines.is_empty() { "notes> " } else { "  ...> " };
        let Some(line) = source.read_line(prompt)? else {
            break;
        };
        if line.trim() == "." {
            if lines.is_empty() {
                eprintln!("{NOTES_REQUIRED}");
                continue;
            }
            break;
        }
        if line.trim().is_empty() {
            match lines.last() {
                None => {
                    eprintln!("{NOTES_REQUIRED}");
                    continue;
                }
                Some(previous) if previous.trim().is_empty() => break,
                Some(_) => {}
            }
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Ok(None);
    }
    Ok(Some(lines.join("\n")))
}

pub const NOTES_HINT: &str = "finish notes with a line containing only '.' or two empty lines";

const NOTES_REQUIRED: &str =
    "notes are required (finish with a line containing only '.' or two empty lines)";
