//! Minnow Userspace System Call Library
//!
//! This library provides safe(r) wrappers around minnow kernel syscalls,
//! allowing userspace programs to interact with the kernel without writing
//! raw inline assembly.
//!
//! Every syscall returns a single machine word. Negative values are negated
//! errnos, non-negative values are the success payload (a descriptor, byte
//! count, or pid depending on the call). The wrappers here decode that word
//! into `Result` and sum types at the call site so a bare integer never
//! leaks past the decode point.
//!
//! # Usage
//!
//! ```rust,ignore
//! #![no_std]
//! #![no_main]
//!
//! use libminnow::io;
//! use libminnow::process::exit;
//!
//! #[no_mangle]
//! pub extern "C" fn _start() -> ! {
//!     io::print("Hello from minnow!\n");
//!     exit(0);
//! }
//! ```

#![cfg_attr(not(test), no_std)]

// Re-export the common handle types
pub use errno::Errno;
pub use types::{Fd, Pid};

pub mod errno;
pub mod fmt;
pub mod fs;
pub mod io;
pub mod process;
pub mod syscall;
pub mod types;
