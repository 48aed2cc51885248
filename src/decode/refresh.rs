//! Best-effort refresh of a decode table from a remote copy.

use super::table::{version_line, DriverVersionTable};
use crate::error::RefreshError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Where a refreshable table comes from and where it is kept.
pub trait TableUpdater {
    /// Full text of the latest remote table.
    fn fetch_latest(&self) -> Result<String, RefreshError>;

    /// Schema version of the locally stored table, if there is one.
    fn local_version(&self) -> Option<u32>;

    /// Replace the locally stored table with `contents`.
    fn replace_local(&self, contents: &str) -> Result<(), RefreshError>;
}

#[derive(Debug)]
pub enum RefreshOutcome {
    UpToDate { local: Option<u32>, remote: u32 },
    Updated { version: u32, table: DriverVersionTable },
}

/// Fetch the remote table and install it when its version is newer.
///
/// The remote text is parsed before the local copy is touched, so a broken
/// download never replaces a working table.
pub fn refresh(updater: &dyn TableUpdater) -> Result<RefreshOutcome, RefreshError> {
    let latest = updater.fetch_latest()?;
    let remote = version_line(&latest).ok_or(RefreshError::MissingVersion)?;
    let local = updater.local_version();
    debug!(?local, remote, "checked remote decode table version");

    if local.is_some_and(|local| remote <= local) {
        return Ok(RefreshOutcome::UpToDate { local, remote });
    }

    let table = DriverVersionTable::from_reader(latest.as_bytes())?;
    updater.replace_local(&latest)?;
    info!(version = remote, entries = table.len(), "installed updated decode table");
    Ok(RefreshOutcome::Updated { version: remote, table })
}

/// Downloads over HTTP and keeps the table as a file on disk.
pub struct HttpTableUpdater {
    url: String,
    path: PathBuf,
    client: reqwest::blocking::Client,
}

impl HttpTableUpdater {
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>, timeout: Duration) -> Result<Self, RefreshError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            path: path.into(),
            client,
        })
    }
}

impl TableUpdater for HttpTableUpdater {
    fn fetch_latest(&self) -> Result<String, RefreshError> {
        let text = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(text)
    }

    fn local_version(&self) -> Option<u32> {
        DriverVersionTable::load(&self.path)
            .ok()
            .and_then(|table| table.version())
    }

    fn replace_local(&self, contents: &str) -> Result<(), RefreshError> {
        replace_file(&self.path, contents)
    }
}

/// Write `contents` next to `path` as `<stem>_new.<ext>`, then swap it in.
pub fn replace_file(path: &Path, contents: &str) -> Result<(), RefreshError> {
    let staged = staging_path(path);
    if staged.exists() {
        std::fs::remove_file(&staged)?;
    }
    std::fs::write(&staged, contents)?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    std::fs::rename(&staged, path)?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_new.{}", stem, ext.to_string_lossy()),
        None => format!("{}_new", stem),
    };
    path.with_file_name(name)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory updater for tests.
    pub(crate) struct StubUpdater {
        pub remote: Result<String, ()>,
        pub local: Option<u32>,
        pub replaced: RefCell<Option<String>>,
    }

    impl StubUpdater {
        pub(crate) fn new(remote: &str, local: Option<u32>) -> Self {
            Self {
                remote: Ok(remote.to_string()),
                local,
                replaced: RefCell::new(None),
            }
        }

        pub(crate) fn offline(local: Option<u32>) -> Self {
            Self {
                remote: Err(()),
                local,
                replaced: RefCell::new(None),
            }
        }
    }

    impl TableUpdater for StubUpdater {
        fn fetch_latest(&self) -> Result<String, RefreshError> {
            self.remote.clone().map_err(|()| {
                RefreshError::Io(std::io::Error::new(std::io::ErrorKind::NotConnected, "offline"))
            })
        }

        fn local_version(&self) -> Option<u32> {
            self.local
        }

        fn replace_local(&self, contents: &str) -> Result<(), RefreshError> {
            *self.replaced.borrow_mut() = Some(contents.to_string());
            Ok(())
        }
    }

    const REMOTE: &str = "version,5\n31.0.12027.9001,22.12.2 (WHQL)\n";

    #[test]
    fn newer_remote_is_installed() {
        let stub = StubUpdater::new(REMOTE, Some(4));
        match refresh(&stub).unwrap() {
            RefreshOutcome::Updated { version, table } => {
                assert_eq!(version, 5);
                assert_eq!(table.get("31.0.12027.9001"), Some("22.12.2 (WHQL)"));
            }
            other => panic!("expected update, got {:?}", other),
        }
        assert_eq!(stub.replaced.borrow().as_deref(), Some(REMOTE));
    }

    #[test]
    fn missing_local_table_is_bootstrapped() {
        let stub = StubUpdater::new(REMOTE, None);
        assert!(matches!(refresh(&stub).unwrap(), RefreshOutcome::Updated { version: 5, .. }));
    }

    #[test]
    fn same_or_older_remote_is_ignored() {
        for local in [5, 9] {
            let stub = StubUpdater::new(REMOTE, Some(local));
            assert!(matches!(refresh(&stub).unwrap(), RefreshOutcome::UpToDate { remote: 5, .. }));
            assert!(stub.replaced.borrow().is_none());
        }
    }

    #[test]
    fn remote_without_version_line_fails() {
        let stub = StubUpdater::new("31.0.12027.9001,22.12.2\n", Some(1));
        assert!(matches!(refresh(&stub), Err(RefreshError::MissingVersion)));
        assert!(stub.replaced.borrow().is_none());
    }

    #[test]
    fn offline_fetch_fails_without_replacing() {
        let stub = StubUpdater::offline(Some(1));
        assert!(refresh(&stub).is_err());
        assert!(stub.replaced.borrow().is_none());
    }

    #[test]
    fn replace_file_swaps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("driverDecodeAMD.csv");
        std::fs::write(&path, "version,1\n").unwrap();

        replace_file(&path, "version,2\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "version,2\n");
        assert!(!dir.path().join("driverDecodeAMD_new.csv").exists());
    }
}
