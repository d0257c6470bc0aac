//! Raw syscall primitives for minnow
//!
//! This module provides the low-level syscall interface using `ecall`.
//! All syscalls follow the RISC-V calling convention:
//! - Syscall number in A7
//! - Arguments in A0, A1, A2, A3
//! - Return value read back from A0

/// Syscall numbers matching the minnow kernel's dispatch table.
/// These follow the Linux RISC-V numbering.
pub mod nr {
    pub const OPENAT: u64 = 56;
    pub const CLOSE: u64 = 57;
    pub const READ: u64 = 63;
    pub const WRITE: u64 = 64;
    pub const EXIT: u64 = 93;
    pub const GETPID: u64 = 172;
    pub const GETPPID: u64 = 173;
    pub const FORK: u64 = 220;
    pub const WAIT4: u64 = 260;
}

/// Raw syscall functions - use higher-level wrappers when possible
pub mod raw {
    /// The one routine that touches the trap instruction. Unused argument
    /// registers are cleared, per the kernel ABI. The default `asm!` memory
    /// clobber stays in place so the compiler cannot reorder loads or stores
    /// across the trap.
    #[cfg(target_arch = "riscv64")]
    #[inline(always)]
    pub unsafe fn syscall4(num: u64, a0: u64, a1: u64, a2: u64, a3: u64) -> u64 {
        let ret: u64;
        core::arch::asm!(
            "ecall",
            in("a7") num,
            inlateout("a0") a0 => ret,
            inlateout("a1") a1 => _,
            inlateout("a2") a2 => _,
            inlateout("a3") a3 => _,
            options(nostack),
        );
        ret
    }

    /// Host stand-in so the pure decode and formatting logic above this
    /// layer can be unit tested off-target. Never reached by those tests.
    #[cfg(not(target_arch = "riscv64"))]
    #[inline(always)]
    pub unsafe fn syscall4(num: u64, _a0: u64, _a1: u64, _a2: u64, _a3: u64) -> u64 {
        unimplemented!("minnow syscall {} requires a riscv64 target", num)
    }

    #[inline(always)]
    pub unsafe fn syscall0(num: u64) -> u64 {
        syscall4(num, 0, 0, 0, 0)
    }

    #[inline(always)]
    pub unsafe fn syscall1(num: u64, a0: u64) -> u64 {
        syscall4(num, a0, 0, 0, 0)
    }

    #[inline(always)]
    pub unsafe fn syscall2(num: u64, a0: u64, a1: u64) -> u64 {
        syscall4(num, a0, a1, 0, 0)
    }

    #[inline(always)]
    pub unsafe fn syscall3(num: u64, a0: u64, a1: u64, a2: u64) -> u64 {
        syscall4(num, a0, a1, a2, 0)
    }
}
