// src/panic.rs
//! Panic support for freestanding builds.
//!
//! No code path in this crate can panic; the handler only satisfies the
//! link requirement of the no_std staticlib/cdylib targets.

use core::panic::PanicInfo;

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    loop {
        core::hint::spin_loop();
    }
}
