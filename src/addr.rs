// src/addr.rs
//! 型安全な生アドレス表現
//!
//! 外部ランタイムから渡される 64 ビット整数アドレスを、
//! `u64` の直接使用を避けて型安全に扱うための専用型を提供します。
//!
//! # 設計原則
//!
//! - アドレスの所有権を持たない（確保・解放は呼び出し元の責任）
//! - 検証は行わない（有効性・アラインメントは呼び出し元が保証）
//! - New Type パターンによる型安全性の確保
//! - ポインタへの変換点を unsafe として明示

use core::ffi::c_void;
use core::fmt;

/// 生メモリアドレス（型安全性を保証）
///
/// # 設計意図
///
/// - `u64` と一般の整数値の混同を防止
/// - 整数の保持は常に安全であり、ポインタの生成のみを unsafe とする
/// - 参照先のメモリは一切保持・解放しない
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawAddr(u64);

impl RawAddr {
    /// アドレスを作成
    ///
    /// 整数値を保持するだけであり、検証は行いません。
    /// 有効性の保証はポインタへ変換する時点で呼び出し元が負います。
    #[inline]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// ゼロアドレスを取得
    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// アドレス値を取得
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// ヌルアドレスかチェック
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// 型 T のアラインメントに揃っているか確認
    ///
    /// 情報提供のみであり、ポインタへの変換の可否には影響しません。
    #[inline]
    pub const fn is_aligned_for<T>(&self) -> bool {
        self.0 % (core::mem::align_of::<T>() as u64) == 0
    }

    /// オフセットを加算
    #[inline]
    pub fn checked_add(&self, offset: u64) -> Option<Self> {
        self.0.checked_add(offset).map(Self)
    }

    /// オフセットを減算
    #[inline]
    pub fn checked_sub(&self, offset: u64) -> Option<Self> {
        self.0.checked_sub(offset).map(Self)
    }

    /// ミュータブルポインタへ変換
    ///
    /// # Safety
    ///
    /// - このアドレスが有効なメモリ領域を指していること
    /// - 型 T のアラインメント要件を満たしていること
    /// - 参照先の生存期間を呼び出し元が管理していること
    #[inline]
    pub unsafe fn as_mut_ptr<T>(&self) -> *mut T {
        self.0 as *mut T
    }

    /// 不透明ポインタへ変換
    ///
    /// 要素型を持たないポインタを返します。再解釈や受け渡しにのみ
    /// 使用できます。
    ///
    /// # Safety
    ///
    /// [`RawAddr::as_mut_ptr`] と同じ条件が適用されます。
    #[inline]
    pub unsafe fn as_opaque(&self) -> *mut c_void {
        unsafe { self.as_mut_ptr() }
    }

    /// バイトポインタへ変換
    ///
    /// # Safety
    ///
    /// [`RawAddr::as_mut_ptr`] と同じ条件が適用されます。
    #[inline]
    pub unsafe fn as_byte_ptr(&self) -> *mut u8 {
        unsafe { self.as_mut_ptr() }
    }

    /// 16 ビット符号付き整数ポインタへ変換
    ///
    /// # Safety
    ///
    /// [`RawAddr::as_mut_ptr`] と同じ条件が適用されます。
    /// 参照先を使用する場合、アドレスは 2 バイト境界に
    /// 揃っている必要があります。
    #[inline]
    pub unsafe fn as_i16_ptr(&self) -> *mut i16 {
        unsafe { self.as_mut_ptr() }
    }
}

impl From<u64> for RawAddr {
    #[inline]
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl From<RawAddr> for u64 {
    #[inline]
    fn from(addr: RawAddr) -> Self {
        addr.as_u64()
    }
}

impl fmt::Display for RawAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawAddr({:#x})", self.0)
    }
}
