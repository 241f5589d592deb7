//! テキスト正規化
//!
//! 小文字化と部分文字列判定のみを行う。正規表現や空白の畳み込みはしない。

/// 小文字化
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// 大文字小文字を無視した部分文字列判定
///
/// 空の `needle` は常に一致する。
pub fn contains(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// 区切りとして扱う空白か
///
/// Unicodeの空白に加えて BOM (U+FEFF) も空白とみなす。
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

/// 空白の連続で分割する
///
/// 先頭・末尾が空白の場合は空文字列の要素が残る（`" solar"` → `["", "solar"]`）。
/// 空文字列はどのテキストにも含まれるので、照合側では一致扱いになる。
pub fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut in_gap = false;

    for (idx, ch) in text.char_indices() {
        if is_space(ch) {
            if !in_gap {
                words.push(&text[start..idx]);
                in_gap = true;
            }
        } else if in_gap {
            start = idx;
            in_gap = false;
        }
    }

    words.push(if in_gap { "" } else { &text[start..] });
    words
}

/// 小文字化済みの提案文
///
/// 1回の解析で全レコードに使い回す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    lowered: String,
}

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        Self {
            lowered: normalize(text),
        }
    }

    /// `needle` は小文字化済みであること
    pub fn contains_lowered(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }

    /// `needle` を小文字化してから判定
    pub fn contains(&self, needle: &str) -> bool {
        self.contains_lowered(&normalize(needle))
    }

    pub fn as_str(&self) -> &str {
        &self.lowered
    }
}

impl From<&str> for NormalizedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
