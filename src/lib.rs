// src/lib.rs
//! addr_bridge - FFI 境界のアドレス再解釈ブリッジ
//!
//! 外部ランタイムが整数としてエンコードしたメモリアドレスを、
//! 型付きポインタとして再解釈するための最小ブリッジです。
//! メモリの確保・解放・参照は一切行わず、アドレスの有効性は
//! 呼び出し元が全面的に保証します。

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod addr;
pub mod bridge;

#[cfg(not(test))]
mod panic;

pub use addr::RawAddr;
