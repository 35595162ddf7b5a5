use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const EXTENSION: &str = "ini";

/// Builds `<location>/<name>.ini`.
///
/// `location` is joined as a directory, so `db` and `db/` resolve to the same file; it is
/// never glued onto the name as a string prefix.
#[must_use]
pub fn resolve(name: &str, location: &Path) -> PathBuf {
    location.join(format!("{name}.{EXTENSION}"))
}

pub fn open(path: &Path) -> Result<Lines<BufReader<File>>, Error> {
    let file = File::open(path).map_err(|source| Error::ResourceUnavailable {
        path: path.to_owned(),
        source,
    })?;

    Ok(BufReader::new(file).lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_appends_extension() {
        assert_eq!(
            resolve("XDF_Op_TigerTrap", Path::new("db/")),
            PathBuf::from("db/XDF_Op_TigerTrap.ini")
        );
        assert_eq!(
            resolve("settings", Path::new("conf")),
            PathBuf::from("conf/settings.ini")
        );
        assert_eq!(
            resolve("v1.2", Path::new("db")),
            PathBuf::from("db/v1.2.ini")
        );
        assert_eq!(
            resolve("x", Path::new("db")),
            resolve("x", Path::new("db/"))
        );
    }

    #[test]
    fn missing_file_is_unavailable() {
        let result = open(Path::new("does/not/exist.ini"));

        assert!(matches!(result, Err(Error::ResourceUnavailable { .. })));
    }
}
