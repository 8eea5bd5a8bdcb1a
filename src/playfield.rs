use arrayvec::ArrayVec;

use crate::macros::assert_unchecked;
use crate::rule::{Rule, RuleError};
use crate::sequence::{Format, SextetSequence};
use crate::sextet::Sextet;

/// フィールドの 1 マスの中身。
///
/// 1 セクステットは上位 3bit・下位 3bit の順で 2 マス分を保持する。
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Puyo {
    Blank = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
    Yellow = 4,
    Purple = 5,
    Garbage = 6,
    Sun = 7,
}

impl Puyo {
    /// 内部値から `Puyo` を作る。無効値に対しては `None` を返す。
    pub const fn from_inner(inner: u8) -> Option<Self> {
        if matches!(inner, 0..=7) {
            Some(unsafe { Self::from_inner_unchecked(inner) })
        } else {
            None
        }
    }

    /// 内部値から `Puyo` を作る。
    ///
    /// # Safety
    ///
    /// `inner` は有効値、即ち `0..=7` でなければならない。
    pub const unsafe fn from_inner_unchecked(inner: u8) -> Self {
        assert_unchecked!(matches!(inner, 0..=7));
        std::mem::transmute(inner)
    }

    /// 内部値を返す。
    pub const fn to_inner(self) -> u8 {
        self as u8
    }

    /// 全ての種別を昇順で返す。
    pub const fn all() -> [Self; 8] {
        [
            Self::Blank,
            Self::Red,
            Self::Green,
            Self::Blue,
            Self::Yellow,
            Self::Purple,
            Self::Garbage,
            Self::Sun,
        ]
    }
}

/// `Playfield` の内部バッファ。
pub type PlayfieldCells = ArrayVec<Puyo, { Playfield::MAX_CELLS }>;

/// セクステット列を展開したフィールド。ルールと全マスの中身を保持する。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Playfield {
    rule: Rule,
    cells: PlayfieldCells,
}

impl Playfield {
    /// フィールドの最大マス数 (ちびぷよルール)。
    pub const MAX_CELLS: usize = 190;

    /// セクステット列からフィールドを展開する。
    ///
    /// マス数が既知のルールに対応しない列はエラーになる。
    pub fn from_sequence(sequence: &SextetSequence) -> Result<Self, RuleError> {
        let rule = Rule::from_sequence(sequence)?;

        let mut cells = PlayfieldCells::new();
        let mut push_pair = |sextet: Sextet| {
            let inner = sextet.get();
            // 3bit 値なので必ず有効。
            cells.push(unsafe { Puyo::from_inner_unchecked(inner >> 3) });
            cells.push(unsafe { Puyo::from_inner_unchecked(inner & 0b111) });
        };

        // ルールが推測できた時点でフォーマットは有効。
        match sequence.format()? {
            Format::Plain => {
                for &sextet in &sequence[..sequence.len() - 1] {
                    push_pair(sextet);
                }
            }
            Format::Rle => {
                for pair in sequence[..sequence.len() - 1].chunks_exact(2) {
                    for _ in 0..=pair[1].get() {
                        push_pair(pair[0]);
                    }
                }
            }
        }

        // 中途半端なペアを含む RLE では展開結果がマス数勘定と食い違う。
        if cells.len() != rule.cell_count() {
            return Err(RuleError::Unrecognized {
                cell_count: cells.len(),
            });
        }

        Ok(Self { rule, cells })
    }

    /// ルールを返す。
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// 全マスを含むスライスを返す。
    pub fn cells(&self) -> &[Puyo] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sextet::Sextet;

    fn seq(bytes: &[u8]) -> SextetSequence {
        bytes.iter().map(|&b| Sextet::new(b).unwrap()).collect()
    }

    #[test]
    fn test_puyo_inner_roundtrip() {
        for puyo in Puyo::all() {
            assert_eq!(Puyo::from_inner(puyo.to_inner()), Some(puyo));
        }
        assert_eq!(Puyo::from_inner(8), None);
    }

    #[test]
    fn test_playfield_from_plain() {
        // 0o12 = (赤, 緑) を 11 セクステット → でかぷよの 22 マス。
        let mut bytes = vec![0o12; 11];
        bytes.push(0);
        let field = Playfield::from_sequence(&seq(&bytes)).unwrap();

        assert_eq!(field.rule(), Rule::Mega);
        assert_eq!(field.cells().len(), 22);
        for pair in field.cells().chunks_exact(2) {
            assert_eq!(pair, [Puyo::Red, Puyo::Green]);
        }
    }

    #[test]
    fn test_playfield_from_rle() {
        // 0o11 = (赤, 赤) を 39 単位繰り返し → ノーマルの 78 マス。
        let field = Playfield::from_sequence(&seq(&[0o11, 38, 2])).unwrap();

        assert_eq!(field.rule(), Rule::Normal);
        assert_eq!(field.cells(), &[Puyo::Red; 78][..]);
    }

    #[test]
    fn test_playfield_errors() {
        assert_eq!(
            Playfield::from_sequence(&seq(&[0, 0, 2])),
            Err(RuleError::Unrecognized { cell_count: 2 })
        );
        assert!(matches!(
            Playfield::from_sequence(&seq(&[1, 2, 3])),
            Err(RuleError::Format(_))
        ));
    }
}
