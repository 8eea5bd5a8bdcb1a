/// 呼び出し側が成立を保証する条件の assert。
///
/// debug ビルドでは通常の `assert!` として働き、release ビルドでは
/// 最適化ヒントになる。条件が成立しない場合の動作は未定義。
macro_rules! assert_unchecked {
    ($cond:expr $(,)?) => {{
        debug_assert!($cond);
        if !($cond) {
            ::std::hint::unreachable_unchecked();
        }
    }};
}

pub(crate) use assert_unchecked;
