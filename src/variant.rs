use crate::rule::Rule;
use crate::sequence::{Format, SextetSequence};
use crate::sextet::Sextet;

/// ぷよぷよ７/ぷよぷよ!! のパスワード文字表。
///
/// かな 40 文字(ぬ・ね抜き、を付き)と全角英大文字(Ｏ・Ｑ抜き)。
#[rustfmt::skip]
const ALPHABET_PUYO20TH: [char; 64] = [
    'あ', 'い', 'う', 'え', 'お',
    'か', 'き', 'く', 'け', 'こ',
    'さ', 'し', 'す', 'せ', 'そ',
    'た', 'ち', 'つ', 'て', 'と',
    'な', 'に', 'の',
    'は', 'ひ', 'ふ', 'へ', 'ほ',
    'ま', 'み', 'む', 'も',
    'や', 'ゆ', 'よ',
    'ら', 'り', 'る', 'ろ',
    'を',
    'Ａ', 'Ｂ', 'Ｃ', 'Ｄ', 'Ｅ', 'Ｆ', 'Ｇ', 'Ｈ', 'Ｉ', 'Ｊ', 'Ｋ', 'Ｌ', 'Ｍ', 'Ｎ',
    'Ｐ', 'Ｒ', 'Ｓ', 'Ｔ', 'Ｕ', 'Ｖ', 'Ｗ', 'Ｘ', 'Ｙ', 'Ｚ',
];

/// ぷよぷよパズルポップのパスワード文字表。
///
/// 英大文字(I・O 抜き)、英小文字の一部、数字、記号。大文字と小文字は別の値を持つ。
#[rustfmt::skip]
const ALPHABET_PUZZLE_POP: [char; 64] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M',
    'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    'a', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'm', 'n', 'r', 't', 'y',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '!', '#', '$', '%', '&', '*', '+', '-', '/', '=',
    '<', '>', '?', '@', '\\', '^', '~',
];

/// 半角英数字と対応する全角形のコードポイント差。
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// パスワードの方言。ゲームごとに文字表と表記揺れの直し方が異なる。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Variant {
    /// ぷよぷよ７ / ぷよぷよ!! (20th Anniversary)。かなパスワード。
    Puyo20th,
    /// ぷよぷよパズルポップ。英数字パスワード。
    PuzzlePop,
}

impl Variant {
    /// 全ての方言。判定時の優先順。
    pub const ALL: [Self; 2] = [Self::Puyo20th, Self::PuzzlePop];

    /// もう一方の方言を返す。
    pub const fn other(self) -> Self {
        match self {
            Self::Puyo20th => Self::PuzzlePop,
            Self::PuzzlePop => Self::Puyo20th,
        }
    }

    const fn alphabet(self) -> &'static [char; 64] {
        match self {
            Self::Puyo20th => &ALPHABET_PUYO20TH,
            Self::PuzzlePop => &ALPHABET_PUZZLE_POP,
        }
    }

    /// ルールを踏まえた表示用タイトルを返す。
    ///
    /// ぷよぷよ７には SUN ルールがないので、SUN のときだけ
    /// 「ぷよぷよ！！」単独の表記になる。
    pub const fn title(self, rule: Rule) -> &'static str {
        match self {
            Self::Puyo20th => match rule {
                Rule::Sun => "ぷよぷよ！！",
                _ => "ぷよぷよ７、ぷよぷよ！！",
            },
            Self::PuzzlePop => "ぷよぷよパズルポップ",
        }
    }

    /// パスワード 1 文字分の表記揺れを直す。
    ///
    /// ぷよ７側: 半角英字と全角英小文字を全角英大文字に統一する。
    /// ぷよポップ側: 全角英数字記号を半角にする。また Shift+^ が半角は
    /// チルダで全角は波ダッシュになる環境があるので、波ダッシュも
    /// 半角チルダに変換する。
    pub fn normalize_char(self, c: char) -> char {
        match self {
            Self::Puyo20th => match c {
                'A'..='N' | 'P' | 'R'..='Z' => shift(c, FULLWIDTH_OFFSET as i32),
                'a'..='n' | 'p' | 'r'..='z' => shift(c, FULLWIDTH_OFFSET as i32 - 0x20),
                'ａ'..='ｎ' | 'ｐ' | 'ｒ'..='ｚ' => shift(c, -0x20),
                _ => c,
            },
            Self::PuzzlePop => match c {
                '！'
                | '＃'..='＆'
                | '＊'
                | '＋'
                | '－'
                | '／'..='９'
                | '＜'..='Ｈ'
                | 'Ｊ'..='Ｎ'
                | 'Ｐ'..='Ｚ'
                | '＼'
                | '＾'
                | 'ａ'
                | 'ｄ'..='ｊ'
                | 'ｍ'
                | 'ｎ'
                | 'ｒ'
                | 'ｔ'
                | 'ｙ'
                | '～' => shift(c, -(FULLWIDTH_OFFSET as i32)),
                '\u{301C}' => '~',
                _ => c,
            },
        }
    }

    /// パスワード全体の表記揺れを直す。
    pub fn normalize(self, password: &str) -> String {
        password.chars().map(|c| self.normalize_char(c)).collect()
    }

    /// 表記揺れを直した上で 1 文字をセクステットに変換する。
    /// 文字表にない文字に対しては `None` を返す。
    pub fn char_to_sextet(self, c: char) -> Option<Sextet> {
        let c = self.normalize_char(c);
        self.alphabet()
            .iter()
            .position(|&a| a == c)
            // 文字表は 64 要素なので添字は必ず値域内。
            .map(|i| unsafe { Sextet::new_unchecked(i as u8) })
    }

    /// セクステットに対応するパスワード文字を返す。
    pub const fn sextet_to_char(self, sextet: Sextet) -> char {
        self.alphabet()[sextet.get() as usize]
    }

    /// パスワードをセクステット列にデコードする。
    ///
    /// 文字表にない文字(ホワイトスペースや打ち間違いなど)は無視する。
    pub fn decode(self, password: &str) -> SextetSequence {
        password
            .chars()
            .filter_map(|c| self.char_to_sextet(c))
            .collect()
    }

    /// セクステット列を正規化してパスワードにエンコードする。
    ///
    /// ぷよ７側は 4 文字ごとに空白を、12 文字ごとに改行を入れる
    /// (ゲーム内の表示に合わせた体裁で、デコード時には無視される)。
    pub fn encode(self, sequence: &SextetSequence) -> String {
        let sequence = sequence.normalized();
        let chars = sequence.iter().map(|&sextet| self.sextet_to_char(sextet));

        match self {
            Self::PuzzlePop => chars.collect(),
            Self::Puyo20th => {
                let mut out = String::new();
                for (i, c) in chars.enumerate() {
                    out.push(c);
                    if (i + 1) % 4 == 0 {
                        out.push(if (i + 1) % 12 == 0 { '\n' } else { ' ' });
                    }
                }
                out
            }
        }
    }

    /// 指定されたパスワードに対応する方言を判定する。
    ///
    /// 有効なパスワードの(認識できる文字の中で)最も右の文字は必ず
    /// フォーマット指定子なので、末尾から前へ走査し、指定子として
    /// デコードできる文字が見つかった方言を返す。指定子以外の値に
    /// デコードできた方言は候補から外す。どちらの候補も残らなければ
    /// `None` を返す。
    pub fn detect(password: &str) -> Option<Self> {
        let mut candidates = Self::ALL.map(Some);

        for c in password.chars().rev() {
            for slot in &mut candidates {
                let Some(variant) = *slot else {
                    continue;
                };
                let Some(sextet) = variant.char_to_sextet(c) else {
                    continue;
                };
                if Format::from_sextet(sextet).is_some() {
                    return Some(variant);
                }
                *slot = None;
            }
            if candidates.iter().all(Option::is_none) {
                return None;
            }
        }
        None
    }
}

fn shift(c: char, delta: i32) -> char {
    char::from_u32((c as i32 + delta) as u32).unwrap_or(c)
}
