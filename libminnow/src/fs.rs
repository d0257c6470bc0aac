//! Filesystem syscall wrappers
//!
//! Provides safe wrappers around file-related system calls:
//! - openat: Open a file relative to a directory descriptor
//! - read: Read data from a file descriptor
//! - close: Close a file descriptor (re-exported from io)

use crate::errno::Errno;
use crate::syscall::{nr, raw};
use crate::types::Fd;

// Re-export close from io module for convenience
pub use crate::io::close;

/// Open flags (POSIX compatible)
pub const O_RDONLY: u32 = 0;
pub const O_WRONLY: u32 = 1;
pub const O_RDWR: u32 = 2;

/// The "current directory" sentinel for `openat`'s dirfd argument. Directory
/// descriptors are not tracked in minnow userspace; callers thread this
/// sentinel through explicitly instead of relying on an implicit global.
pub const AT_FDCWD: i64 = -100;

/// Open a file and return a file descriptor.
///
/// # Arguments
/// * `dirfd` - Directory the path is resolved against (`AT_FDCWD` for the
///   current directory)
/// * `path` - Path to the file (null-terminated)
/// * `flags` - Open flags (O_RDONLY, O_WRONLY, O_RDWR)
///
/// # Returns
/// File descriptor on success, Errno on failure.
///
/// # Example
/// ```ignore
/// let fd = openat(AT_FDCWD, "test.txt\0", O_RDONLY)?;
/// ```
#[inline]
pub fn openat(dirfd: i64, path: &str, flags: u32) -> Result<Fd, Errno> {
    let ret = unsafe {
        raw::syscall3(
            nr::OPENAT,
            dirfd as u64,
            path.as_ptr() as u64,
            flags as u64,
        ) as i64
    };
    Errno::from_syscall(ret).map(Fd::from_raw)
}

/// Read from a file descriptor into a buffer.
///
/// Issues a single bounded read; a return of 0 means end-of-file.
///
/// # Returns
/// Number of bytes read on success, Errno on failure.
#[inline]
pub fn read(fd: Fd, buf: &mut [u8]) -> Result<usize, Errno> {
    let ret = unsafe {
        raw::syscall3(
            nr::READ,
            fd.raw(),
            buf.as_mut_ptr() as u64,
            buf.len() as u64,
        ) as i64
    };
    Errno::from_syscall(ret).map(|n| n as usize)
}
