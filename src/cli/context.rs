use std::io::{self, BufRead, Write};

use crate::directory::Directory;
use crate::input;

/// Everything a command loop needs: the directory to query and the console.
pub struct CLIContext<'a, R, W> {
    pub directory: &'a Directory,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> CLIContext<'a, R, W> {
    pub fn new(directory: &'a Directory, input: R, output: W) -> Self {
        Self {
            directory,
            input,
            output,
        }
    }

    /// Prompt and read a line. Returns None on EOF.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        input::read_line_lossy(&mut self.input)
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    pub fn println(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
