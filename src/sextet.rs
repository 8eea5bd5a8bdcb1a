use crate::macros::assert_unchecked;

/// 6bit 値 (`0..=0x3F`)。パスワード 1 文字が保持する情報の単位。
///
/// セクステット列の末尾要素はフォーマット指定子を兼ねる
/// ([`Format`](crate::Format) を参照)。
#[repr(transparent)]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Sextet(u8);

impl Sextet {
    /// 最小値。
    pub const MIN: Self = Self(0);

    /// 最大値。
    pub const MAX: Self = Self(0x3F);

    /// 引数が値域内にあるかどうかを返す。
    pub const fn in_range(inner: u8) -> bool {
        inner <= Self::MAX.0
    }

    /// `u8` から `Sextet` を作る。引数が値域外なら `None` を返す。
    pub const fn new(inner: u8) -> Option<Self> {
        if Self::in_range(inner) {
            Some(Self(inner))
        } else {
            None
        }
    }

    /// `u8` から `Sextet` を作る。
    ///
    /// # Safety
    ///
    /// `inner` は `0..=0x3F` の範囲内になければならない。
    pub const unsafe fn new_unchecked(inner: u8) -> Self {
        assert_unchecked!(Self::in_range(inner));
        Self(inner)
    }

    /// 内部値を返す。
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 全ての値を昇順で返す。
    pub fn all(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + std::iter::FusedIterator
    {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

macro_rules! impl_primitive_from_sextet {
    ($($ty:ty)*) => {
        $(
            impl From<Sextet> for $ty {
                fn from(x: Sextet) -> Self {
                    Self::from(x.get())
                }
            }
        )*
    };
}

impl_primitive_from_sextet!(i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! impl_fmt_traits {
    ($($trait:ident),*) => {
        $(
            impl std::fmt::$trait for Sextet {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::$trait::fmt(&self.0, f)
                }
            }
        )*
    };
}

impl_fmt_traits!(Binary, Debug, Display, LowerExp, LowerHex, Octal, UpperExp, UpperHex);
