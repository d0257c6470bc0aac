//! Smallest syscall-using program: one write, then return from the entry
//! point. Scenarios that never call exit hand their return value back to the
//! loader.

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use libminnow::io;

#[no_mangle]
pub extern "C" fn _start() -> i32 {
    io::print("hello world from minnow userspace\n");
    0
}

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    io::print("hello_world: panic\n");
    libminnow::process::exit(1);
}
