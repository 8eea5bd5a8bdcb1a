use thiserror::Error;

use crate::rule::{Rule, RuleError};
use crate::variant::Variant;

/// パスワードの推測結果。入力中のプレビュー表示に使う。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Identified {
    /// 検出された方言。
    pub variant: Variant,
    /// 推測されたルール。
    pub rule: Rule,
}

impl Identified {
    /// 変換元のタイトル表記を返す。
    pub const fn source_title(&self) -> &'static str {
        self.variant.title(self.rule)
    }

    /// 変換先のタイトル表記を返す。
    pub const fn target_title(&self) -> &'static str {
        self.variant.other().title(self.rule)
    }
}

/// パスワードの方言とルールを推測する。
pub fn identify(password: &str) -> Result<Identified, TranslateError> {
    let variant = Variant::detect(password).ok_or(TranslateError::Unrecognized)?;
    let rule = Rule::from_sequence(&variant.decode(password))?;

    Ok(Identified { variant, rule })
}

/// パスワードをもう一方の方言のパスワードに変換する。
///
/// 方言の判定、デコード、変換先方言での再エンコード(RLE 正規化込み)を
/// 一括で行う。純粋な文字列変換で、副作用はない。
pub fn translate(password: &str) -> Result<String, TranslateError> {
    let variant = Variant::detect(password).ok_or(TranslateError::Unrecognized)?;
    let sequence = variant.decode(password);

    Ok(variant.other().encode(&sequence))
}

/// パスワード変換時に発生しうるエラー。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TranslateError {
    /// どの方言のパスワードとしても認識できない。
    #[error("the password does not match any known variant")]
    Unrecognized,

    /// ルールが推測できない。
    #[error(transparent)]
    Rule(#[from] RuleError),
}
