//! Pure-computation scenario with a recognizable result.
//!
//! Mixes two ASCII-derived constants into 0x9794 (38804 decimal). The exact
//! value proves the program actually executed rather than the loader handing
//! back a default register.

#![no_std]
#![no_main]

use core::panic::PanicInfo;

#[no_mangle]
pub extern "C" fn _start() -> i32 {
    let magic: u32 = 0x4845_4C4C; // "HELL"
    let world: u32 = 0x4F4F_4F4F; // "OOOO"

    // 0x4845 + 0x4F4F = 0x9794
    ((magic >> 16) + (world & 0xFFFF)) as i32
}

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    loop {}
}
