use thiserror::Error;

use crate::sequence::{FormatError, SextetSequence};

/// パスワードが記録しているフィールドのルール。
///
/// ルールごとにフィールドのマス数が固定なので、セクステット列の
/// 情報量から一意に推測できる。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rule {
    /// 通常ルール (6x13 = 78 マス)。
    Normal,
    /// ぷよぷよSUN ルール (84 マス)。
    Sun,
    /// でかぷよルール (22 マス)。
    Mega,
    /// ちびぷよルール (190 マス)。
    Tiny,
}

impl Rule {
    /// このルールのフィールドのマス数を返す。
    pub const fn cell_count(self) -> usize {
        match self {
            Self::Normal => 78,
            Self::Sun => 84,
            Self::Mega => 22,
            Self::Tiny => 190,
        }
    }

    /// マス数からルールを推測する。対応するルールがなければ `None` を返す。
    pub const fn from_cell_count(cell_count: usize) -> Option<Self> {
        match cell_count {
            22 => Some(Self::Mega),
            78 => Some(Self::Normal),
            84 => Some(Self::Sun),
            190 => Some(Self::Tiny),
            _ => None,
        }
    }

    /// セクステット列の情報量からルールを推測する。
    pub fn from_sequence(sequence: &SextetSequence) -> Result<Self, RuleError> {
        let cell_count = sequence.cell_count()?;
        Self::from_cell_count(cell_count).ok_or(RuleError::Unrecognized { cell_count })
    }

    /// ルール名を返す。
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "ノーマル",
            Self::Sun => "ぷよぷよSUN",
            Self::Mega => "でかぷよ",
            Self::Tiny => "ちびぷよ",
        }
    }

    /// 全てのルールを返す。
    pub const fn all() -> [Self; 4] {
        [Self::Normal, Self::Sun, Self::Mega, Self::Tiny]
    }
}

/// ルール推測時に発生しうるエラー。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RuleError {
    /// セクステット列のフォーマットが解釈できない。
    #[error(transparent)]
    Format(#[from] FormatError),

    /// マス数がどのルールにも対応しない。
    #[error("cannot recognize the original rule (cell count: {cell_count})")]
    Unrecognized { cell_count: usize },
}
