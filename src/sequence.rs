use thiserror::Error;

use crate::sextet::Sextet;

/// セクステット列のフォーマット。列の末尾のセクステットで識別される。
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// 各セクステットがフィールド 2 マス分をそのまま保持する形式。
    Plain = 0,
    /// (マス値, 繰り返し数-1) のペアの並びで保持する形式。
    Rle = 2,
}

impl Format {
    /// フォーマット指定子のセクステットから `Format` を作る。
    /// 指定子として無効な値に対しては `None` を返す。
    pub const fn from_sextet(sextet: Sextet) -> Option<Self> {
        match sextet.get() {
            0 => Some(Self::Plain),
            2 => Some(Self::Rle),
            _ => None,
        }
    }

    /// 対応するフォーマット指定子のセクステットを返す。
    pub const fn to_sextet(self) -> Sextet {
        // 判別値は定義により 0 または 2。
        unsafe { Sextet::new_unchecked(self as u8) }
    }
}

/// セクステット列のフォーマットが解釈できない場合のエラー。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid format")]
pub struct FormatError;

/// パスワードをデコードして得られるセクステット列。
///
/// 有効な列は末尾にフォーマット指定子を持つが、デコード結果が
/// 常に有効とは限らない(空列にもなりうる)ため、構築自体は制限しない。
#[repr(transparent)]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SextetSequence(Vec<Sextet>);

impl SextetSequence {
    /// 空のセクステット列を作る。
    pub fn new() -> Self {
        Self::default()
    }

    /// 内部バッファを返す。
    pub fn into_inner(self) -> Vec<Sextet> {
        self.0
    }

    /// 列全体を含むスライスを返す。
    pub fn as_slice(&self) -> &[Sextet] {
        self.0.as_slice()
    }

    /// 要素数を返す。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 空かどうかを返す。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 列のフォーマットを返す。
    ///
    /// 末尾要素がフォーマット指定子として無効な場合、および空列の場合はエラー。
    pub fn format(&self) -> Result<Format, FormatError> {
        self.0
            .last()
            .and_then(|&sextet| Format::from_sextet(sextet))
            .ok_or(FormatError)
    }

    /// この列がフィールド何マス分の情報を保持しているかを返す。
    ///
    /// 元のフィールド面積が奇数だった場合は偶数に切り上げられる。
    pub fn cell_count(&self) -> Result<usize, FormatError> {
        match self.format()? {
            Format::Plain => Ok((self.len() - 1) * 2),
            Format::Rle => {
                let units: usize = self
                    .0
                    .iter()
                    .skip(1)
                    .step_by(2)
                    .map(|&run| usize::from(run.get()) + 1)
                    .sum();
                Ok(units * 2)
            }
        }
    }

    /// 列を正規化する: プレーン展開してから RLE し直し、短くなる方を返す。
    ///
    /// ぷよポップのパスワードは RLE の方が短い場合でもたまにプレーンで
    /// 吐き出すことがある。一方ぷよ７側は再エンコードしたときに元の
    /// パスワードへ戻らなければならないので、入力のフォーマットを信用せず
    /// 一旦プレーンに戻してから RLE し直す。同長ならプレーンを優先する。
    ///
    /// フォーマットが解釈できない列はそのまま返す。
    pub fn normalized(&self) -> Self {
        let Ok(format) = self.format() else {
            return self.clone();
        };

        let plain: Vec<Sextet> = match format {
            Format::Plain => self.0.clone(),
            Format::Rle => {
                let mut plain = Vec::new();
                for pair in self.0[..self.len() - 1].chunks_exact(2) {
                    let run = usize::from(pair[1].get()) + 1;
                    plain.extend(std::iter::repeat(pair[0]).take(run));
                }
                plain.push(Format::Plain.to_sextet());
                plain
            }
        };

        let data = &plain[..plain.len() - 1];
        let Some((&first, rest)) = data.split_first() else {
            return Self(plain);
        };

        let mut rle: Vec<Sextet> = Vec::new();
        let mut previous = first;
        let mut count: usize = 1;

        for &sextet in rest {
            if sextet == previous && count < 64 {
                count += 1;
                continue;
            }
            // RLE で長さがプレーン以下にならなさそうならプレーンを返す
            // (最後にもう 1 ペアとフォーマット指定子を挿入するので長めに見積もる)。
            if rle.len() + 5 > plain.len() {
                return Self(plain);
            }
            push_run(&mut rle, previous, count);
            previous = sextet;
            count = 1;
        }
        push_run(&mut rle, previous, count);
        rle.push(Format::Rle.to_sextet());

        // 同長ならプレーン優先。
        if rle.len() >= plain.len() {
            return Self(plain);
        }
        Self(rle)
    }
}

fn push_run(rle: &mut Vec<Sextet>, sextet: Sextet, count: usize) {
    rle.push(sextet);
    // ランは 64 で打ち切られるので count - 1 は 0..=63。
    rle.push(unsafe { Sextet::new_unchecked((count - 1) as u8) });
}

impl From<Vec<Sextet>> for SextetSequence {
    fn from(inner: Vec<Sextet>) -> Self {
        Self(inner)
    }
}

impl FromIterator<Sextet> for SextetSequence {
    fn from_iter<I: IntoIterator<Item = Sextet>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::ops::Deref for SextetSequence {
    type Target = [Sextet];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[Sextet]> for SextetSequence {
    fn as_ref(&self) -> &[Sextet] {
        self
    }
}

impl IntoIterator for SextetSequence {
    type Item = Sextet;
    type IntoIter = std::vec::IntoIter<Sextet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SextetSequence {
    type Item = &'a Sextet;
    type IntoIter = std::slice::Iter<'a, Sextet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use super::*;

    fn seq(bytes: &[u8]) -> SextetSequence {
        bytes
            .iter()
            .map(|&b| Sextet::new(b).unwrap())
            .collect()
    }

    /// 正規化を挟まない素のプレーン展開の長さ。
    fn plain_len(s: &SextetSequence) -> usize {
        match s.format().unwrap() {
            Format::Plain => s.len(),
            Format::Rle => s.cell_count().unwrap() / 2 + 1,
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(seq(&[1, 2, 0]).format(), Ok(Format::Plain));
        assert_eq!(seq(&[5, 9, 2]).format(), Ok(Format::Rle));
        assert_eq!(seq(&[0, 0, 3]).format(), Err(FormatError));
        assert_eq!(SextetSequence::new().format(), Err(FormatError));
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(seq(&[1, 2, 0]).cell_count(), Ok(4));
        assert_eq!(seq(&[5, 9, 2]).cell_count(), Ok(20));
        assert_eq!(seq(&[0]).cell_count(), Ok(0));
        assert_eq!(seq(&[7, 63, 3, 0, 2]).cell_count(), Ok(130));
        assert_eq!(seq(&[1, 1]).cell_count(), Err(FormatError));
    }

    #[test]
    fn test_normalized_compressible_plain() {
        // 同値 40 個のプレーンは 1 ペアの RLE になる。
        let mut bytes = vec![7; 40];
        bytes.push(0);
        assert_equal(seq(&bytes).normalized(), seq(&[7, 39, 2]));
    }

    #[test]
    fn test_normalized_run_cap() {
        // 65 マス単位以上の繰り返しは 64 ごとに分割される。
        let mut bytes = vec![3; 70];
        bytes.push(0);
        assert_equal(seq(&bytes).normalized(), seq(&[3, 63, 3, 5, 2]));
    }

    #[test]
    fn test_normalized_incompressible() {
        // ラン長 1 ばかりの列は RLE にすると長くなるのでプレーンのまま。
        let s = seq(&[1, 2, 3, 4, 5, 6, 0]);
        assert_equal(s.normalized(), s.clone());
    }

    #[test]
    fn test_normalized_prefers_plain_on_tie() {
        // データ 2 個: プレーン 3 要素、RLE も 3 要素。同長はプレーン。
        assert_equal(seq(&[3, 3, 0]).normalized(), seq(&[3, 3, 0]));
        // データ 1 個: RLE の方が長くなるのでプレーン。
        assert_equal(seq(&[3, 0]).normalized(), seq(&[3, 0]));
        // RLE 入力でも展開結果が同長以下ならプレーンに揃える。
        assert_equal(seq(&[5, 1, 2]).normalized(), seq(&[5, 5, 0]));
    }

    #[test]
    fn test_normalized_rle_input_stays_rle() {
        assert_equal(seq(&[5, 9, 2]).normalized(), seq(&[5, 9, 2]));
        assert_equal(seq(&[0, 38, 2]).normalized(), seq(&[0, 38, 2]));
        // 最大ラン長 (繰り返し数-1 = 63) も 1 ペアのまま保たれる。
        assert_equal(seq(&[0, 63, 2]).normalized(), seq(&[0, 63, 2]));
    }

    #[test]
    fn test_normalized_unknown_format_passthrough() {
        let s = seq(&[1, 2, 3]);
        assert_equal(s.normalized(), s.clone());
        assert_equal(SextetSequence::new().normalized(), SextetSequence::new());
        // 指定子のみのプレーンはそのまま。データなしの RLE は空のプレーンに揃う。
        assert_equal(seq(&[0]).normalized(), seq(&[0]));
        assert_equal(seq(&[2]).normalized(), seq(&[0]));
    }

    #[test]
    fn test_normalized_mixed_runs() {
        let mut bytes = vec![1; 10];
        bytes.extend([4; 20]);
        bytes.extend([1; 10]);
        bytes.push(0);
        assert_equal(seq(&bytes).normalized(), seq(&[1, 9, 4, 19, 1, 9, 2]));
    }

    #[test]
    fn test_normalized_idempotent() {
        let cases = [
            seq(&[5, 9, 2]),
            seq(&[1, 2, 3, 4, 5, 6, 0]),
            seq(&[3, 3, 0]),
            seq(&[5, 1, 2]),
            {
                let mut bytes = vec![3; 70];
                bytes.push(0);
                seq(&bytes)
            },
        ];
        for s in cases {
            let once = s.normalized();
            assert_equal(once.normalized(), once.clone());
        }
    }

    #[test]
    fn test_normalized_never_longer_than_plain() {
        let cases = [
            seq(&[5, 9, 2]),
            seq(&[1, 2, 3, 4, 5, 6, 0]),
            seq(&[3, 0]),
            seq(&[3, 3, 0]),
            seq(&[5, 1, 2]),
            seq(&[0, 63, 2]),
        ];
        for s in cases {
            assert!(s.normalized().len() <= plain_len(&s));
        }
    }

    #[test]
    fn test_normalized_preserves_cell_count() {
        let cases = [
            seq(&[5, 9, 2]),
            seq(&[1, 2, 3, 4, 5, 6, 0]),
            seq(&[5, 1, 2]),
            {
                let mut bytes = vec![3; 70];
                bytes.push(0);
                seq(&bytes)
            },
        ];
        for s in cases {
            assert_eq!(s.normalized().cell_count(), s.cell_count());
        }
    }
}
