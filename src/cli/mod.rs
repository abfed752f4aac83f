pub mod context;
pub mod person_commands;

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::directory::Directory;
use crate::error::{PhonelistError, PhonelistResult};
use context::CLIContext;

pub const BANNER: &str = "Welcome to the address list!";
pub const PROMPT: &str = "command: ";
pub const FAREWELL: &str = "Bye!";

const HELP: [&str; 5] = [
    "Commands: ",
    "exit         - quit the program ",
    "help         - print this help",
    "list         - list all adresses",
    "show /name/  - show all addresses matching /name/",
];

/// A parsed line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Help,
    List,
    Show(Option<&'a str>),
    Unknown(&'a str),
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Exit,
}

/// Tokenizes on whitespace and dispatches on the first token.
/// Blank input yields None.
pub fn parse_command(input: &str) -> Option<Command<'_>> {
    let mut tokens = input.split_whitespace();
    let command = match tokens.next()? {
        "exit" => Command::Exit,
        "help" => Command::Help,
        "list" => Command::List,
        "show" => Command::Show(tokens.next()),
        other => Command::Unknown(other),
    };
    Some(command)
}

pub fn help_text() -> String {
    HELP.iter().map(|line| format!("  {}\n", line)).collect()
}

/// Renders a command against the directory without touching the console.
pub fn execute(directory: &Directory, command: Command<'_>) -> Outcome {
    match command {
        Command::Exit => Outcome::Exit,
        Command::Help => Outcome::Print(help_text()),
        Command::List => Outcome::Print(person_commands::list(directory)),
        Command::Show(query) => match person_commands::show(directory, query) {
            Ok(out) => Outcome::Print(out),
            Err(e) => Outcome::Print(format!("  {}\n", e)),
        },
        Command::Unknown(token) => Outcome::Print(format!("  Unknown command: {}\n", token)),
    }
}

/// Loads the directory at `path` and prints every load warning to `output`.
pub fn load<W: Write>(path: &Path, mut output: W) -> PhonelistResult<Directory> {
    let report = Directory::load(path)?;
    for warning in &report.warnings {
        writeln!(output, "{}", warning)?;
    }
    Ok(report.directory)
}

/// Message printed on stderr when the directory cannot be loaded.
pub fn load_failure(path: &Path, error: &PhonelistError) -> String {
    format!("Error: could not load {}: {}", path.display(), error)
}

/// Run the interactive REPL until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(directory: &Directory, input: R, output: W) -> io::Result<W> {
    let mut ctx = CLIContext::new(directory, input, output);
    ctx.println(BANNER)?;
    ctx.print(&help_text())?;
    repl_loop(&mut ctx)?;
    ctx.println(FAREWELL)?;
    Ok(ctx.into_output())
}

fn repl_loop<R: BufRead, W: Write>(ctx: &mut CLIContext<'_, R, W>) -> io::Result<()> {
    while let Some(input) = ctx.read_line(PROMPT)? {
        let Some(command) = parse_command(&input) else {
            continue;
        };
        debug!(?command, "dispatching");

        match execute(ctx.directory, command) {
            Outcome::Exit => break,
            Outcome::Print(text) => ctx.print(&text)?,
        }
    }
    Ok(())
}
