use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::r#trait::{ensure_single_line, WinnerLog, WinnerLogError};

/// Winner log backed by a plain text file, one name per line.
///
/// The file is opened in append mode (created if absent) for the duration of
/// a single write and closed again before `append` returns, on success and on
/// error alike.
#[derive(Debug, Clone)]
pub struct FileWinnerLog {
    path: PathBuf,
}

impl FileWinnerLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> WinnerLogError {
        WinnerLogError::io(&self.path, source)
    }
}

impl WinnerLog for FileWinnerLog {
    fn append(&self, name: &str) -> Result<(), WinnerLogError> {
        ensure_single_line(name)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{name}").map_err(|e| self.io_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), winner = name, "winner appended");
        Ok(())
    }

    fn entries(&self) -> Result<Vec<String>, WinnerLogError> {
        let mut contents = String::new();
        match File::open(&self.path) {
            Ok(mut file) => {
                file.read_to_string(&mut contents)
                    .map_err(|e| self.io_error(e))?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(self.io_error(e)),
        }

        Ok(contents.lines().map(str::to_string).collect())
    }
}
