//! Filesystem capability used by the file sink and the startup lifecycle
//!
//! Everything the logger does to disk goes through [`FileSystem`], so tests can
//! swap the real OS for [`MemoryFileSystem`].

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

/// Permission bits used when the file sink creates a log file
pub const DEFAULT_LOG_FILE_MODE: u32 = 0o644;

/// What the logger needs to know about an existing path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub is_dir: bool,
    pub len: u64,
    pub modified: SystemTime,
    /// Unix permission bits; [`DEFAULT_LOG_FILE_MODE`] where the platform has none
    pub permissions: u32,
}

pub trait FileSystem: Send + Sync + fmt::Debug {
    /// Open `path` for appending, creating it if absent
    fn open_append(&self, path: &Path) -> io::Result<Box<dyn Write + Send>>;

    /// `Ok(None)` when nothing exists at `path`
    fn stat(&self, path: &Path) -> io::Result<Option<FileStat>>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate `path` with `permissions` and write `bytes`
    fn write(&self, path: &Path, bytes: &[u8], permissions: u32) -> io::Result<()>;
}

/// The process's real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> Arc<dyn FileSystem> {
        Arc::new(Self)
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(_metadata: &fs::Metadata) -> u32 {
    DEFAULT_LOG_FILE_MODE
}

#[cfg(unix)]
fn with_mode(options: &mut OpenOptions, mode: u32) -> &mut OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(mode)
}

#[cfg(not(unix))]
fn with_mode(options: &mut OpenOptions, _mode: u32) -> &mut OpenOptions {
    options
}

impl FileSystem for OsFileSystem {
    fn open_append(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        let file = with_mode(&mut options, DEFAULT_LOG_FILE_MODE).open(path)?;
        Ok(Box::new(file))
    }

    fn stat(&self, path: &Path) -> io::Result<Option<FileStat>> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(Some(FileStat {
                is_dir: metadata.is_dir(),
                len: metadata.len(),
                modified: metadata.modified()?,
                permissions: permission_bits(&metadata),
            })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, bytes: &[u8], permissions: u32) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.create(true).write(true).truncate(true);
        let mut file = with_mode(&mut options, permissions).open(path)?;
        file.write_all(bytes)?;
        file.flush()
    }
}

#[derive(Debug, Clone)]
struct MemoryFile {
    data: Vec<u8>,
    modified: SystemTime,
    permissions: u32,
}

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, MemoryFile>,
    dirs: HashSet<PathBuf>,
}

impl MemoryState {
    fn dir_exists(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || path.parent().is_none() || self.dirs.contains(path)
    }

    fn require_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !self.dir_exists(parent) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory '{}' does not exist", parent.display()),
            )),
            _ => Ok(()),
        }
    }
}

/// In-memory filesystem for tests
///
/// Clones share the same state. Writes can be switched off with
/// [`MemoryFileSystem::set_read_only`] to exercise failure paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    state: Arc<Mutex<MemoryState>>,
    read_only: Arc<AtomicBool>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every mutating call fail with `PermissionDenied`
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Seed a file, creating its parent directories
    pub fn insert_file(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.insert_file_with(path, bytes, SystemTime::now(), DEFAULT_LOG_FILE_MODE);
    }

    pub fn insert_file_with(
        &self,
        path: impl Into<PathBuf>,
        bytes: impl Into<Vec<u8>>,
        modified: SystemTime,
        permissions: u32,
    ) {
        let path = path.into();
        let mut state = self.state.lock();
        if let Some(parent) = path.parent() {
            for ancestor in parent.ancestors() {
                if !ancestor.as_os_str().is_empty() {
                    state.dirs.insert(ancestor.to_path_buf());
                }
            }
        }
        state.files.insert(
            path,
            MemoryFile {
                data: bytes.into(),
                modified,
                permissions,
            },
        );
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state
            .lock()
            .files
            .get(path.as_ref())
            .map(|file| file.data.clone())
    }

    pub fn contents_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.contents(path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn permissions(&self, path: impl AsRef<Path>) -> Option<u32> {
        self.state
            .lock()
            .files
            .get(path.as_ref())
            .map(|file| file.permissions)
    }

    /// Every file path, sorted
    pub fn files(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.state.lock().files.keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().dirs.contains(path.as_ref())
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("'{}' is read-only", path.display()),
            ));
        }
        Ok(())
    }
}

/// Append handle into a [`MemoryFileSystem`] file
struct MemoryAppender {
    state: Arc<Mutex<MemoryState>>,
    read_only: Arc<AtomicBool>,
    path: PathBuf,
}

impl Write for MemoryAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("'{}' is read-only", self.path.display()),
            ));
        }
        let mut state = self.state.lock();
        let file = state.files.get_mut(&self.path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' was removed while open", self.path.display()),
            )
        })?;
        file.data.extend_from_slice(buf);
        file.modified = SystemTime::now();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn open_append(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        let mut state = self.state.lock();
        if state.dirs.contains(path) {
            return Err(io::Error::other(format!("'{}' is a directory", path.display())));
        }
        if !state.files.contains_key(path) {
            self.check_writable(path)?;
            state.require_parent(path)?;
            state.files.insert(
                path.to_path_buf(),
                MemoryFile {
                    data: Vec::new(),
                    modified: SystemTime::now(),
                    permissions: DEFAULT_LOG_FILE_MODE,
                },
            );
        }

        Ok(Box::new(MemoryAppender {
            state: Arc::clone(&self.state),
            read_only: Arc::clone(&self.read_only),
            path: path.to_path_buf(),
        }))
    }

    fn stat(&self, path: &Path) -> io::Result<Option<FileStat>> {
        let state = self.state.lock();
        if let Some(file) = state.files.get(path) {
            return Ok(Some(FileStat {
                is_dir: false,
                len: file.data.len() as u64,
                modified: file.modified,
                permissions: file.permissions,
            }));
        }
        if state.dirs.contains(path) {
            return Ok(Some(FileStat {
                is_dir: true,
                len: 0,
                modified: SystemTime::UNIX_EPOCH,
                permissions: 0o755,
            }));
        }
        Ok(None)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        let mut state = self.state.lock();
        let mut ancestors: Vec<&Path> = path
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        ancestors.reverse();
        for ancestor in ancestors {
            if state.files.contains_key(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("'{}' exists and is not a directory", ancestor.display()),
                ));
            }
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        self.state
            .lock()
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("'{}' does not exist", path.display()),
                )
            })
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.contents(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' does not exist", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, bytes: &[u8], permissions: u32) -> io::Result<()> {
        self.check_writable(path)?;
        let mut state = self.state.lock();
        state.require_parent(path)?;
        if state.dirs.contains(path) {
            return Err(io::Error::other(format!("'{}' is a directory", path.display())));
        }
        state.files.insert(
            path.to_path_buf(),
            MemoryFile {
                data: bytes.to_vec(),
                modified: SystemTime::now(),
                permissions,
            },
        );
        Ok(())
    }
}
