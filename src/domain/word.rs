use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A single vocabulary entry pairing a Japanese word with its Chinese equivalent.
///
/// Field names match the on-disk `words.json` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
  pub japanese: String,
  /// Kana reading (may equal `japanese` for kana-only words)
  pub yomigana: String,
  pub japanese_meaning: String,
  pub chinese: String,
  pub pinyin: String,
  pub chinese_meaning: String,
}

impl WordEntry {
  pub fn new(
    japanese: &str,
    yomigana: &str,
    japanese_meaning: &str,
    chinese: &str,
    pinyin: &str,
    chinese_meaning: &str,
  ) -> Self {
    Self {
      japanese: normalize(japanese),
      yomigana: normalize(yomigana),
      japanese_meaning: normalize(japanese_meaning),
      chinese: normalize(chinese),
      pinyin: normalize(pinyin),
      chinese_meaning: normalize(chinese_meaning),
    }
  }

  /// Re-normalize an entry that was deserialized directly.
  pub fn normalized(&self) -> Self {
    Self::new(
      &self.japanese,
      &self.yomigana,
      &self.japanese_meaning,
      &self.chinese,
      &self.pinyin,
      &self.chinese_meaning,
    )
  }

  /// Name of the first empty field, if any.
  pub fn missing_field(&self) -> Option<&'static str> {
    [
      ("japanese", &self.japanese),
      ("yomigana", &self.yomigana),
      ("japanese_meaning", &self.japanese_meaning),
      ("chinese", &self.chinese),
      ("pinyin", &self.pinyin),
      ("chinese_meaning", &self.chinese_meaning),
    ]
    .into_iter()
    .find(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
  }

  pub fn is_well_formed(&self) -> bool {
    self.missing_field().is_none()
  }

  /// Japanese term with its reading, e.g. "友達 (ともだち)"
  pub fn japanese_display(&self) -> String {
    format_with_reading(&self.japanese, &self.yomigana)
  }

  /// Chinese term with its pinyin, e.g. "朋友 (péngyǒu)"
  pub fn chinese_display(&self) -> String {
    format_with_reading(&self.chinese, &self.pinyin)
  }
}

fn normalize(s: &str) -> String {
  s.trim().nfc().collect()
}

/// Pair a term with its pronunciation aid. Kana words whose reading is the
/// word itself are shown once.
pub fn format_with_reading(term: &str, reading: &str) -> String {
  if reading.is_empty() || reading == term {
    term.to_string()
  } else {
    format!("{} ({})", term, reading)
  }
}

/// Which language is asked and which is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizDirection {
  /// Chinese prompt, Japanese options
  #[serde(rename = "cn-jp")]
  ChineseToJapanese,
  /// Japanese prompt, Chinese options
  #[serde(rename = "jp-cn")]
  JapaneseToChinese,
}

impl QuizDirection {
  pub const ALL: [QuizDirection; 2] = [Self::ChineseToJapanese, Self::JapaneseToChinese];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::ChineseToJapanese => "cn-jp",
      Self::JapaneseToChinese => "jp-cn",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::ChineseToJapanese => "Chinese → Japanese",
      Self::JapaneseToChinese => "Japanese → Chinese",
    }
  }

  /// The term options are compared by. Two entries with the same key would
  /// display the same answer, so only one of them can appear per question.
  pub fn answer_key<'a>(&self, word: &'a WordEntry) -> &'a str {
    match self {
      Self::ChineseToJapanese => &word.japanese,
      Self::JapaneseToChinese => &word.chinese,
    }
  }

  /// (display text, meaning) of the prompt side
  pub fn prompt_of(&self, word: &WordEntry) -> (String, String) {
    match self {
      Self::ChineseToJapanese => (word.chinese_display(), word.chinese_meaning.clone()),
      Self::JapaneseToChinese => (word.japanese_display(), word.japanese_meaning.clone()),
    }
  }

  /// (term, reading, meaning) of the answer side
  pub fn answer_of<'a>(&self, word: &'a WordEntry) -> (&'a str, &'a str, &'a str) {
    match self {
      Self::ChineseToJapanese => (&word.japanese, &word.yomigana, &word.japanese_meaning),
      Self::JapaneseToChinese => (&word.chinese, &word.pinyin, &word.chinese_meaning),
    }
  }

  pub fn reversed(&self) -> Self {
    match self {
      Self::ChineseToJapanese => Self::JapaneseToChinese,
      Self::JapaneseToChinese => Self::ChineseToJapanese,
    }
  }
}

impl std::str::FromStr for QuizDirection {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "cn-jp" => Ok(Self::ChineseToJapanese),
      "jp-cn" => Ok(Self::JapaneseToChinese),
      other => Err(format!("unknown quiz direction: {}", other)),
    }
  }
}

impl std::fmt::Display for QuizDirection {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
