//! Fork/wait scenario
//!
//! Exercises the full process lifecycle from userspace:
//! - Print own pid and ppid before the fork
//! - Fork, then branch on the decoded outcome
//! - Child re-queries its identity and exits with code 42
//! - Parent waits for any child and reports the reaped pid and status
//!
//! The child deliberately exits with a fixed nonzero code so the parent can
//! tell it observed this child's status and not a stale one, and the parent
//! deliberately waits for "any child" rather than the specific pid.

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use libminnow::io;
use libminnow::process::{self, ForkOutcome, ANY_CHILD};

const CHILD_EXIT_CODE: i32 = 42;

#[no_mangle]
pub extern "C" fn _start() -> ! {
    io::print("=== minnow fork test ===\n");

    io::print("initial process pid: ");
    io::print_u64(process::getpid().raw());
    io::print("\n");

    io::print("initial process ppid: ");
    io::print_u64(process::getppid().raw());
    io::print("\n");

    io::print("about to fork...\n");

    match process::fork() {
        Ok(ForkOutcome::Child) => {
            io::print("CHILD: i am the child process\n");

            // Pre-fork values are stale here; the post-fork ppid is the
            // property under test.
            io::print("CHILD: my pid is: ");
            io::print_u64(process::getpid().raw());
            io::print("\n");
            io::print("CHILD: my parent pid is: ");
            io::print_u64(process::getppid().raw());
            io::print("\n");

            io::print("CHILD: exiting with code 42\n");
            process::exit(CHILD_EXIT_CODE);
        }
        Ok(ForkOutcome::Parent(child)) => {
            io::print("PARENT: fork successful, child pid is: ");
            io::print_u64(child.raw());
            io::print("\n");
            io::print("PARENT: my pid is: ");
            io::print_u64(process::getpid().raw());
            io::print("\n");

            io::print("PARENT: waiting for child to exit...\n");
            match process::wait4(ANY_CHILD, 0) {
                Ok(reaped) => {
                    io::print("PARENT: child ");
                    io::print_u64(reaped.pid.raw());
                    io::print(" exited with status: ");
                    io::print_i64(reaped.exit_code() as i64);
                    io::print("\n");
                }
                // Non-fatal; the scenario still runs to completion.
                Err(_) => io::print("PARENT: wait failed or no children\n"),
            }

            io::print("PARENT: all done\n");
            process::exit(0);
        }
        Err(_) => {
            io::print("ERROR: fork failed\n");
            process::exit(1);
        }
    }
}

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    io::print("fork_test: panic\n");
    process::exit(1);
}
