//! Process management syscall wrappers

use crate::errno::Errno;
use crate::syscall::{nr, raw};
use crate::types::Pid;

/// Pid filter for [`wait4`] meaning "any child".
pub const ANY_CHILD: i64 = -1;

/// Exit the current process with the given exit code.
///
/// This function never returns.
#[inline]
pub fn exit(code: i32) -> ! {
    unsafe {
        raw::syscall1(nr::EXIT, code as u64);
    }
    // Should never reach here, but need this for the ! return type
    loop {
        core::hint::spin_loop();
    }
}

/// Get the current process ID.
///
/// Always a fresh query; pids must be re-read after [`fork`] because the
/// child and parent observe different values from the same call site.
#[inline]
pub fn getpid() -> Pid {
    Pid::from_raw(unsafe { raw::syscall0(nr::GETPID) })
}

/// Get the parent process ID.
#[inline]
pub fn getppid() -> Pid {
    Pid::from_raw(unsafe { raw::syscall0(nr::GETPPID) })
}

/// The two sides of a successful fork.
///
/// One logical call returns twice, once in each address space; the single
/// return value is the only thing distinguishing the two continuations, so
/// it is decoded into a tag immediately and never kept as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkOutcome {
    /// Running in the newly created process.
    Child,
    /// Running in the original process; carries the child's pid.
    Parent(Pid),
}

impl ForkOutcome {
    /// Decode the raw fork return value: 0 in the child, the child's pid in
    /// the parent, negated errno on failure.
    pub fn decode(ret: i64) -> Result<ForkOutcome, Errno> {
        match Errno::from_syscall(ret)? {
            0 => Ok(ForkOutcome::Child),
            pid => Ok(ForkOutcome::Parent(Pid::from_raw(pid))),
        }
    }
}

/// Create a child process.
#[inline]
pub fn fork() -> Result<ForkOutcome, Errno> {
    let ret = unsafe { raw::syscall0(nr::FORK) as i64 };
    ForkOutcome::decode(ret)
}

/// A reaped child: which pid exited and the status word the kernel wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOutcome {
    pub pid: Pid,
    pub status: i32,
}

impl WaitOutcome {
    /// The child's exit code. The minnow kernel stores the code directly in
    /// the status word.
    pub fn exit_code(&self) -> i32 {
        self.status
    }
}

/// Wait for a child process to exit.
///
/// Blocks until a matching child has exited; there is no timeout and no
/// cancellation. The status-out pointer required by the kernel ABI is a
/// local owned by this wrapper.
///
/// # Arguments
/// * `pid_filter` - A specific child pid, or [`ANY_CHILD`]
/// * `options` - Wait options (0 for a plain blocking wait)
#[inline]
pub fn wait4(pid_filter: i64, options: u32) -> Result<WaitOutcome, Errno> {
    let mut status: i32 = 0;
    let ret = unsafe {
        raw::syscall3(
            nr::WAIT4,
            pid_filter as u64,
            &mut status as *mut i32 as u64,
            options as u64,
        ) as i64
    };
    let pid = Errno::from_syscall(ret)?;
    Ok(WaitOutcome {
        pid: Pid::from_raw(pid),
        status,
    })
}
