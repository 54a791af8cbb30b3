//! File-based locking for single-session safety.
//!
//! Cross-platform (fs2) advisory lock on a sidecar file next to the wordbook:
//! `<wordbook path>.lock`. Один shell на файл: второй процесс получит ошибку
//! сразу, без ожидания. Lock is released on Drop.

use fs2::FileExt;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use crate::consts::LOCK_SUFFIX;

#[derive(Debug)]
pub struct LockGuard {
    file: std::fs::File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // ошибки unlock на drop игнорируем
        let _ = self.file.unlock();
    }
}

/// `<wordbook>.lock` for a given wordbook path.
pub fn lock_file_path(wordbook: &Path) -> PathBuf {
    let mut s: OsString = wordbook.as_os_str().to_owned();
    s.push(LOCK_SUFFIX);
    PathBuf::from(s)
}

fn open_lock_file(path: &Path) -> io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(path)
}

/// Try to take the exclusive session lock. Fails immediately if another
/// session holds it (`ErrorKind::WouldBlock` on most platforms).
pub fn try_acquire_exclusive_lock(wordbook: &Path) -> io::Result<LockGuard> {
    let path = lock_file_path(wordbook);
    let file = open_lock_file(&path)?;
    file.try_lock_exclusive()?;
    Ok(LockGuard { file })
}
