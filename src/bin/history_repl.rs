//! `history_repl` — drive an [`EditBuffer`] from a command script
//!
//! Reads one command per line from stdin and applies it to a buffer,
//! printing undo/redo state changes as they happen.
//!
//! # Usage
//!
//! ```bash
//! printf 'type hello\nundo\nprint\n' | cargo run --bin history_repl
//! RUST_LOG=edit_history=debug cargo run --bin history_repl -- --max-depth 10
//! ```

use edit_history::{EditBuffer, Error, HistoryConfig, HistoryState};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "history_repl - scripted undo/redo driver

USAGE:
    history_repl [OPTIONS] < script

OPTIONS:
    -h, --help              Print this help message and exit
    --max-depth <N>         Maximum undo groups to keep (default: 1000)
    --no-merge              Record every edit as its own undo step
    --quiet                 Do not print state changes

COMMANDS (one per line, \\n in text is a line break):
    type <text>                     Insert at the cursor
    insert <offset> <text>          Insert at an offset
    delete <offset> <len>           Delete characters
    replace <offset> <len> <text>   Replace characters
    cursor <offset>                 Move the cursor
    backspace                       Delete before the cursor
    commit                          Close the current undo group
    undo | redo                     Walk the history
    print                           Show the text
    state                           Show undo/redo availability
";

/// Command-line configuration.
#[derive(Debug, Default)]
struct Config {
    history: HistoryConfig,
    quiet: bool,
}

/// Result of CLI parsing.
enum ParseResult {
    Config(Config),
    Help,
    Error(String),
}

impl Config {
    fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--max-depth" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error("--max-depth requires a value".to_string());
                        }
                    };
                    match value.parse::<usize>() {
                        Ok(n) if n > 0 => config.history.max_depth = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --max-depth value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--no-merge" => config.history.merge_edits = false,
                "--quiet" => config.quiet = true,

                other => return ParseResult::Error(format!("Unknown argument: {other}")),
            }
        }

        ParseResult::Config(config)
    }
}

// ============================================================================
// Script Commands
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Type(String),
    Insert(usize, String),
    Delete(usize, usize),
    Replace(usize, usize, String),
    Cursor(usize),
    Backspace,
    Commit,
    Undo,
    Redo,
    Print,
    State,
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn parse_number(word: Option<&str>, what: &str) -> Result<usize, String> {
    let word = word.ok_or_else(|| format!("missing {what}"))?;
    word.parse()
        .map_err(|_| format!("invalid {what}: {word}"))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
    match name {
        "type" => Ok(Command::Type(unescape(rest))),
        "insert" => {
            let (offset, text) = rest.split_once(' ').unwrap_or((rest, ""));
            Ok(Command::Insert(
                parse_number(Some(offset), "offset")?,
                unescape(text),
            ))
        }
        "delete" => {
            let mut words = rest.split_whitespace();
            let offset = parse_number(words.next(), "offset")?;
            let len = parse_number(words.next(), "length")?;
            Ok(Command::Delete(offset, len))
        }
        "replace" => {
            let mut parts = rest.splitn(3, ' ');
            let offset = parse_number(parts.next(), "offset")?;
            let len = parse_number(parts.next(), "length")?;
            Ok(Command::Replace(
                offset,
                len,
                unescape(parts.next().unwrap_or("")),
            ))
        }
        "cursor" => Ok(Command::Cursor(parse_number(Some(rest.trim()), "offset")?)),
        "backspace" => Ok(Command::Backspace),
        "commit" => Ok(Command::Commit),
        "undo" => Ok(Command::Undo),
        "redo" => Ok(Command::Redo),
        "print" => Ok(Command::Print),
        "state" => Ok(Command::State),
        other => Err(format!("unknown command: {other}")),
    }
}

/// End of the `len` characters at `offset`.
fn range_end(buffer: &EditBuffer, offset: usize, len: usize) -> edit_history::Result<usize> {
    offset.checked_add(len).ok_or(Error::OutOfBounds {
        offset,
        len: buffer.document().len_chars(),
    })
}

fn run_command(buffer: &mut EditBuffer, command: Command, out: &mut impl Write) -> edit_history::Result<()> {
    match command {
        Command::Type(text) => buffer.insert(&text),
        Command::Insert(offset, text) => buffer.insert_at(offset, &text)?,
        Command::Delete(offset, len) => {
            let end = range_end(buffer, offset, len)?;
            buffer.delete_range(offset, end)?;
        }
        Command::Replace(offset, len, text) => {
            let end = range_end(buffer, offset, len)?;
            buffer.replace_range(offset, end, &text)?;
        }
        Command::Cursor(offset) => buffer.set_cursor(offset),
        Command::Backspace => buffer.delete_backward()?,
        Command::Commit => buffer.commit(),
        Command::Undo => buffer.undo()?,
        Command::Redo => buffer.redo()?,
        Command::Print => writeln!(out, "{:?}", buffer.text())?,
        Command::State => {
            let history = buffer.history();
            writeln!(
                out,
                "groups={} pointer={:?} undo={} redo={}",
                history.len(),
                history.pointer(),
                history.undo_label().unwrap_or_else(|| "-".to_string()),
                history.redo_label().unwrap_or_else(|| "-".to_string()),
            )?;
        }
    }
    Ok(())
}

fn format_state(state: &HistoryState) -> String {
    format!(
        "[{:?}] undo={} redo={}",
        state.change,
        state.undo_label.as_deref().unwrap_or("-"),
        state.redo_label.as_deref().unwrap_or("-"),
    )
}

fn run(config: Config) -> edit_history::Result<()> {
    let mut buffer = EditBuffer::with_config(config.history);
    if !config.quiet {
        buffer.set_listener(|state: &HistoryState| println!("{}", format_state(state)));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let result = parse_command(line)
            .map_err(|msg| format!("line {}: {msg}", number + 1))
            .and_then(|command| {
                run_command(&mut buffer, command, &mut out)
                    .map_err(|err| format!("line {}: {err}", number + 1))
            });
        if let Err(msg) = result {
            tracing::warn!("{msg}");
            writeln!(out, "error: {msg}")?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if let Err(err) = run(config) {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        ParseResult::Help => print!("{HELP_TEXT}"),
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("history_repl")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let ParseResult::Config(config) = Config::from_args(args(&["--max-depth", "7", "--no-merge"]))
        else {
            panic!("expected config");
        };
        assert_eq!(config.history.max_depth, 7);
        assert!(!config.history.merge_edits);
        assert!(matches!(Config::from_args(args(&["--help"])), ParseResult::Help));
        assert!(matches!(
            Config::from_args(args(&["--max-depth", "0"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("type a\\nb"), Ok(Command::Type("a\nb".to_string())));
        assert_eq!(
            parse_command("insert 3 two words"),
            Ok(Command::Insert(3, "two words".to_string()))
        );
        assert_eq!(parse_command("delete 1 2"), Ok(Command::Delete(1, 2)));
        assert_eq!(
            parse_command("replace 0 5 hi there"),
            Ok(Command::Replace(0, 5, "hi there".to_string()))
        );
        assert_eq!(parse_command("undo"), Ok(Command::Undo));
        assert!(parse_command("delete x 2").is_err());
        assert!(parse_command("explode").is_err());
    }

    #[test]
    fn test_run_script() {
        let mut buffer = EditBuffer::new();
        let mut out = Vec::new();
        for line in ["type hello", "type  world", "backspace", "undo", "print"] {
            run_command(&mut buffer, parse_command(line).unwrap(), &mut out).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "\"hello world\"\n");

        let err = run_command(&mut buffer, Command::Redo, &mut Vec::new())
            .and_then(|()| run_command(&mut buffer, Command::Redo, &mut Vec::new()));
        assert!(matches!(err, Err(Error::NoHistory(_))));
    }

    #[test]
    fn test_huge_length_is_out_of_bounds() {
        let mut buffer = EditBuffer::with_text("abc");
        let command = parse_command(&format!("delete 1 {}", usize::MAX)).unwrap();
        let err = run_command(&mut buffer, command, &mut Vec::new());
        assert!(matches!(err, Err(Error::OutOfBounds { offset: 1, len: 3 })));

        let err = run_command(
            &mut buffer,
            Command::Replace(2, usize::MAX, "x".to_string()),
            &mut Vec::new(),
        );
        assert!(matches!(err, Err(Error::OutOfBounds { offset: 2, .. })));
        assert_eq!(buffer.text(), "abc");
        assert!(!buffer.can_undo());
    }
}
