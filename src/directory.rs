use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PhonelistError, PhonelistResult};
use crate::input;
use crate::model::Person;
use crate::record::{self, FieldWarning};

/// Something that went wrong on one line of the input file.
#[derive(Debug)]
pub enum LoadWarning {
    /// A field was dropped; the person was still added.
    Field { line: usize, warning: FieldWarning },
    /// The whole line was skipped.
    Record { line: usize, error: PhonelistError },
}

impl LoadWarning {
    /// 1-based line number in the input.
    pub fn line(&self) -> usize {
        match self {
            LoadWarning::Field { line, .. } | LoadWarning::Record { line, .. } => *line,
        }
    }

    /// Operator-facing message, printed after `VARNING: `.
    pub fn message(&self) -> String {
        match self {
            LoadWarning::Field { warning, .. } => warning.to_string(),
            LoadWarning::Record { line, error } => format!("ignorerar rad {}: {}", line, error),
        }
    }
}

/// The full operator line, `VARNING: {message}`.
impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VARNING: {}", self.message())
    }
}

/// Every person from the input file, in file order.
#[derive(Debug, Default)]
pub struct Directory {
    people: Vec<Person>,
}

/// A loaded directory and the problems met while building it.
#[derive(Debug)]
pub struct LoadReport {
    pub directory: Directory,
    pub warnings: Vec<LoadWarning>,
}

impl Directory {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Reads the whole file at `path`. The file is closed before this returns.
    pub fn load(path: &Path) -> PhonelistResult<LoadReport> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PhonelistError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => PhonelistError::Io(e),
        })?;
        debug!(path = %path.display(), "loading directory");
        Self::from_reader(BufReader::new(file))
    }

    /// Builds a directory from any line source, one person per line.
    pub fn from_reader<R: BufRead>(mut reader: R) -> PhonelistResult<LoadReport> {
        let mut people = Vec::new();
        let mut warnings = Vec::new();
        let mut line_no = 0;

        while let Some(line) = input::read_line_lossy(&mut reader)? {
            line_no += 1;
            if line.trim().is_empty() {
                debug!(line = line_no, "skipping blank line");
                continue;
            }

            match record::parse_record(&line) {
                Ok(parsed) => {
                    for warning in parsed.warnings {
                        debug!(line = line_no, %warning, "dropped field");
                        warnings.push(LoadWarning::Field {
                            line: line_no,
                            warning,
                        });
                    }
                    people.push(parsed.person);
                }
                Err(error) => {
                    debug!(line = line_no, %error, "skipping record");
                    warnings.push(LoadWarning::Record {
                        line: line_no,
                        error,
                    });
                }
            }
        }

        info!(people = people.len(), warnings = warnings.len(), "directory loaded");
        Ok(LoadReport {
            directory: Self { people },
            warnings,
        })
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
