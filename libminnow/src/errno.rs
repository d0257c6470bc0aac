//! POSIX errno values
//!
//! These match Linux errno values for compatibility with the minnow kernel,
//! which returns them negated in the syscall result register.

/// Error numbers returned by syscalls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum Errno {
    /// Operation not permitted
    EPERM = 1,
    /// No such file or directory
    ENOENT = 2,
    /// No such process
    ESRCH = 3,
    /// Interrupted system call
    EINTR = 4,
    /// I/O error
    EIO = 5,
    /// Bad file descriptor
    EBADF = 9,
    /// No child processes
    ECHILD = 10,
    /// Resource temporarily unavailable
    EAGAIN = 11,
    /// Out of memory
    ENOMEM = 12,
    /// Permission denied
    EACCES = 13,
    /// Bad address
    EFAULT = 14,
    /// Device or resource busy
    EBUSY = 16,
    /// File exists
    EEXIST = 17,
    /// Not a directory
    ENOTDIR = 20,
    /// Is a directory
    EISDIR = 21,
    /// Invalid argument
    EINVAL = 22,
    /// Too many open files
    EMFILE = 24,
    /// No space left on device
    ENOSPC = 28,
    /// Function not implemented
    ENOSYS = 38,
}

impl Errno {
    /// Convert a raw syscall return value to Result
    ///
    /// Syscalls return negative errno on error, non-negative on success.
    pub fn from_syscall(ret: i64) -> Result<u64, Errno> {
        if ret >= 0 {
            Ok(ret as u64)
        } else {
            Err(Errno::from_raw(-ret))
        }
    }

    /// Convert raw errno value to Errno enum
    pub fn from_raw(val: i64) -> Errno {
        match val {
            1 => Errno::EPERM,
            2 => Errno::ENOENT,
            3 => Errno::ESRCH,
            4 => Errno::EINTR,
            5 => Errno::EIO,
            9 => Errno::EBADF,
            10 => Errno::ECHILD,
            11 => Errno::EAGAIN,
            12 => Errno::ENOMEM,
            13 => Errno::EACCES,
            14 => Errno::EFAULT,
            16 => Errno::EBUSY,
            17 => Errno::EEXIST,
            20 => Errno::ENOTDIR,
            21 => Errno::EISDIR,
            24 => Errno::EMFILE,
            28 => Errno::ENOSPC,
            38 => Errno::ENOSYS,
            _ => Errno::EINVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_values_pass_through() {
        assert_eq!(Errno::from_syscall(0), Ok(0));
        assert_eq!(Errno::from_syscall(3), Ok(3));
        assert_eq!(Errno::from_syscall(i64::MAX), Ok(i64::MAX as u64));
    }

    #[test]
    fn negative_values_decode_to_errno() {
        assert_eq!(Errno::from_syscall(-2), Err(Errno::ENOENT));
        assert_eq!(Errno::from_syscall(-10), Err(Errno::ECHILD));
        assert_eq!(Errno::from_syscall(-38), Err(Errno::ENOSYS));
    }

    #[test]
    fn unknown_errno_maps_to_einval() {
        assert_eq!(Errno::from_raw(9999), Errno::EINVAL);
    }
}
