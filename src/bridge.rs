// src/bridge.rs
//! C ABI export surface.
//!
//! These are the symbols the foreign runtime binds by name. Each export
//! takes an integer-encoded address and returns the same address as a
//! typed pointer. Nothing is validated, retained, or dereferenced here;
//! any fault from later use of the returned pointer occurs in the caller,
//! which remains the sole authority on address validity and lifetime.

use core::ffi::c_void;

use crate::addr::RawAddr;

/// Reinterpret `ptr` as an opaque pointer.
///
/// The returned pointer denotes exactly the address `ptr`, including a
/// null pointer for `ptr == 0`.
#[unsafe(no_mangle)]
pub extern "C" fn cast_to_void_ptr(ptr: u64) -> *mut c_void {
    // Safety: producing the pointer value has no side effects; the caller
    // owns the address and everything reachable through it.
    unsafe { RawAddr::new(ptr).as_opaque() }
}

/// Reinterpret `ptr` as a pointer to an 8-bit unsigned element.
#[unsafe(no_mangle)]
pub extern "C" fn cast_to_uint8_ptr(ptr: u64) -> *mut u8 {
    // Safety: see cast_to_void_ptr.
    unsafe { RawAddr::new(ptr).as_byte_ptr() }
}

/// Reinterpret `ptr` as a pointer to a 16-bit signed element.
#[unsafe(no_mangle)]
pub extern "C" fn cast_to_int16_ptr(ptr: u64) -> *mut i16 {
    // Safety: see cast_to_void_ptr.
    unsafe { RawAddr::new(ptr).as_i16_ptr() }
}
