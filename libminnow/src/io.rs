//! I/O syscall wrappers

use crate::fmt;
use crate::syscall::{nr, raw};
use crate::types::Fd;

/// Write bytes to a file descriptor.
///
/// Issues exactly one write call with the slice's pointer and length.
/// A short write is not detected or retried.
///
/// # Returns
/// Number of bytes written on success, negative errno on error.
#[inline]
pub fn write(fd: Fd, buf: &[u8]) -> i64 {
    unsafe { raw::syscall3(nr::WRITE, fd.raw(), buf.as_ptr() as u64, buf.len() as u64) as i64 }
}

/// Read bytes from a file descriptor.
///
/// # Returns
/// Number of bytes read on success, negative errno on error.
#[inline]
pub fn read(fd: Fd, buf: &mut [u8]) -> i64 {
    unsafe { raw::syscall3(nr::READ, fd.raw(), buf.as_mut_ptr() as u64, buf.len() as u64) as i64 }
}

/// Close a file descriptor.
///
/// # Returns
/// 0 on success, negative errno on error.
#[inline]
pub fn close(fd: Fd) -> i64 {
    unsafe { raw::syscall1(nr::CLOSE, fd.raw()) as i64 }
}

/// Standard output writer
pub struct Stdout;

impl Stdout {
    /// Write bytes to stdout
    #[inline]
    pub fn write(&self, buf: &[u8]) -> i64 {
        write(Fd::STDOUT, buf)
    }

    /// Write a string to stdout
    #[inline]
    pub fn write_str(&self, s: &str) -> i64 {
        self.write(s.as_bytes())
    }
}

/// Get a handle to stdout
#[inline]
pub fn stdout() -> Stdout {
    Stdout
}

/// Print a string to stdout (convenience function)
#[inline]
pub fn print(s: &str) {
    stdout().write_str(s);
}

/// Print a string to stdout with newline (convenience function)
#[inline]
pub fn println(s: &str) {
    stdout().write_str(s);
    stdout().write(b"\n");
}

/// Print an unsigned value in decimal.
#[inline]
pub fn print_u64(value: u64) {
    let mut buf = [0u8; fmt::U64_DEC_LEN];
    print(fmt::u64_to_dec(value, &mut buf));
}

/// Print a signed value in decimal.
#[inline]
pub fn print_i64(value: i64) {
    let mut buf = [0u8; fmt::I64_DEC_LEN];
    print(fmt::i64_to_dec(value, &mut buf));
}
