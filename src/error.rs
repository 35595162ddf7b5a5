use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The backing file could not be opened. Nothing was parsed.
    #[error("failed to open {}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A line could not be read, e.g. because it was not valid UTF-8. `path` is `None` when
    /// the lines came from a reader rather than a file.
    #[error("failed to read line {line}{}", in_file(.path.as_deref()))]
    ReadFailure {
        path: Option<PathBuf>,
        line: usize,
        #[source]
        source: io::Error,
    },
}

fn in_file(path: Option<&Path>) -> String {
    path.map(|p| format!(" of {}", p.display())).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_names_the_path() {
        let error = Error::ResourceUnavailable {
            path: PathBuf::from("db/missing.ini"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert_eq!(error.to_string(), "failed to open db/missing.ini");
        assert!(error.source().is_some());
    }

    #[test]
    fn read_failure_names_the_file_when_known() {
        let error = Error::ReadFailure {
            path: Some(PathBuf::from("db/session.ini")),
            line: 2,
            source: io::Error::from(io::ErrorKind::InvalidData),
        };
        assert_eq!(error.to_string(), "failed to read line 2 of db/session.ini");

        let error = Error::ReadFailure {
            path: None,
            line: 2,
            source: io::Error::from(io::ErrorKind::InvalidData),
        };
        assert_eq!(error.to_string(), "failed to read line 2");
    }
}
