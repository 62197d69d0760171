//! Language identification used to pick a scoring path

use whatlang::Lang;
use whatlang::Script;

use crate::errors::Result;
use crate::errors::SentiscaleError;

/// Code the dispatcher routes to the Arabic scorer; everything else is scored as English.
pub const ARABIC: &str = "ar";

/// Arabic-script letters that Persian or Urdu use and Arabic does not
const NON_ARABIC_LETTERS: [char; 10] = [
    'پ', 'چ', 'ژ', 'گ', 'ک', 'ی', 'ٹ', 'ڈ', 'ں', 'ے',
];

pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text` and return an ISO 639-1 style code
    fn detect(&self, text: &str) -> Result<String>;
}

/// Detector backed by the `whatlang` trigram models
///
/// Short Arabic phrases often score as Persian, so Arabic-script text is
/// reported as Arabic unless it contains a letter Arabic does not use.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub const fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String> {
        let info = whatlang::detect(text)
            .ok_or_else(|| SentiscaleError::LanguageDetection("No features in text.".to_string()))?;

        if info.script() == Script::Arabic && !has_non_arabic_letters(text) {
            return Ok(ARABIC.to_string());
        }
        Ok(iso_code(info.lang()).to_string())
    }
}

fn has_non_arabic_letters(text: &str) -> bool {
    text.chars().any(|c| NON_ARABIC_LETTERS.contains(&c))
}

/// Two-letter code for the common languages, ISO 639-3 for the rest
pub fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Ara => "ar",
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Tur => "tr",
        Lang::Pes => "fa",
        Lang::Urd => "ur",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        other => other.code(),
    }
}
