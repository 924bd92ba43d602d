use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use camino_tempfile::Utf8TempDir;
use tracing::{debug, warn};

const PREFIX: &str = ".lt";

/// A fresh, empty directory that is removed, with everything inside it, when
/// this value goes out of scope.
#[derive(Debug)]
pub struct TempDirectory {
    path: Utf8PathBuf,
    // Only `None` once `close` has taken it.
    dir: Option<Utf8TempDir>,
}

impl TempDirectory {
    /// Creates a directory under the system temporary directory.
    pub fn new() -> io::Result<Self> {
        let dir = camino_tempfile::Builder::new().prefix(PREFIX).tempdir()?;
        Ok(Self::created(dir))
    }

    /// Creates a directory inside `parent`, which must already exist.
    pub fn new_in(parent: impl AsRef<Utf8Path>) -> io::Result<Self> {
        let dir = camino_tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir_in(parent.as_ref())?;
        Ok(Self::created(dir))
    }

    fn created(dir: Utf8TempDir) -> Self {
        debug!("Created temporary directory {}", dir.path());
        Self {
            path: dir.path().to_owned(),
            dir: Some(dir),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Removes the directory now, reporting failures instead of logging them.
    pub fn close(mut self) -> io::Result<()> {
        match self.dir.take() {
            Some(dir) => remove(dir),
            None => Ok(()),
        }
    }
}

impl Drop for TempDirectory {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take()
            && let Err(err) = remove(dir)
        {
            warn!("Failed to remove temporary directory {}: {err}", self.path);
        }
    }
}

fn remove(dir: Utf8TempDir) -> io::Result<()> {
    let path = dir.path().to_owned();
    dir.close()?;
    debug!("Removed temporary directory {path}");
    Ok(())
}

/// Runs `f` with the path of a fresh temporary directory.
///
/// The directory is removed recursively whether `f` succeeds, returns an
/// error, or panics. A failure to remove it is only reported when `f`
/// succeeded; otherwise the error from `f` wins and the failure is logged.
pub fn temp_directory<T, E, F>(f: F) -> Result<T, E>
where
    F: FnOnce(&Utf8Path) -> Result<T, E>,
    E: From<io::Error>,
{
    let dir = TempDirectory::new()?;
    let value = f(dir.path())?;
    dir.close()?;
    Ok(value)
}
