//! 한글 -> 로마자 변환기
//!
//! 완성형 음절을 초성/중성/종성으로 분해해 표기를 이어 붙이고,
//! 같은 단어 안의 음절 사이에는 하이픈을 넣습니다.
//! 단어 첫 글자가 성씨 테이블에 있으면 관용 표기를 사용합니다.
//!
//! 단어 시작 판정은 공백뿐 아니라 한글이 아닌 모든 문자(숫자, 문장부호, 영문) 뒤에서도
//! 다시 켜집니다. 따라서 `"1이"`는 `"1lee"`가 됩니다.

use crate::config::{ConfigError, RomanizerConfig};
use crate::core::cleanup::cleanup_hyphens;
use crate::core::surname::{SurnameTable, DEFAULT_SURNAME_TABLE};
use crate::core::tables::{CHOSEONG, JONGSEONG, JUNGSEONG, SILENT_CHOSEONG};
use crate::core::unicode::{decompose_syllable, is_hangul_syllable};

/// 기본 성씨 테이블로 변환
///
/// # Examples
/// ```
/// use hangul_romanize::romanize;
/// assert_eq!(romanize("한글"), "han-geul");
/// assert_eq!(romanize("김철수"), "kim-cheol-su");
/// assert_eq!(romanize(None), "");
/// ```
pub fn romanize<'a>(text: impl Into<Option<&'a str>>) -> String {
    romanize_with(&DEFAULT_SURNAME_TABLE, text.into())
}

/// 음절 하나의 표기 (성씨 규칙, 하이픈 없음)
/// 완성형 한글이 아니면 None
pub fn romanize_syllable(c: char) -> Option<String> {
    let mut out = String::with_capacity(6);
    push_syllable(c, &mut out).then_some(out)
}

/// 성씨 테이블을 가진 변환기
#[derive(Debug, Clone, Default)]
pub struct Romanizer {
    surnames: SurnameTable,
}

impl Romanizer {
    /// 기본 성씨 테이블 사용
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surnames(surnames: SurnameTable) -> Self {
        Self { surnames }
    }

    /// 설정으로부터 생성
    /// `extra_family_names`의 키는 한글 음절 한 글자여야 함
    pub fn from_config(config: &RomanizerConfig) -> Result<Self, ConfigError> {
        // 성씨 처리를 끈 경우에도 키는 검증
        let mut extra = Vec::with_capacity(config.extra_family_names.len());
        for (key, latin) in &config.extra_family_names {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) if is_hangul_syllable(c) => c,
                _ => return Err(ConfigError::InvalidSurname(key.clone())),
            };
            extra.push((c, latin.as_str()));
        }

        if !config.use_family_names {
            return Ok(Self::with_surnames(SurnameTable::empty()));
        }

        let mut surnames = SurnameTable::default();
        for (c, latin) in extra {
            log::debug!("성씨 표기 추가: {} -> {}", c, latin);
            surnames.insert(c, latin);
        }
        Ok(Self::with_surnames(surnames))
    }

    pub fn surnames(&self) -> &SurnameTable {
        &self.surnames
    }

    pub fn romanize<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        romanize_with(&self.surnames, text.into())
    }
}

fn romanize_with(surnames: &SurnameTable, text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    let mut result = String::with_capacity(text.len() * 2);
    let mut is_word_start = true;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            result.push(c);
            is_word_start = true;
            continue;
        }

        if is_word_start {
            if let Some(latin) = surnames.get(c) {
                result.push_str(latin);
                result.push('-');
                is_word_start = false;
                continue;
            }
        }

        if push_syllable(c, &mut result) {
            // 같은 단어 안의 음절 구분
            if chars.peek().is_some_and(|&next| is_hangul_syllable(next)) {
                result.push('-');
            }
            is_word_start = false;
        } else {
            result.push(c);
            is_word_start = true;
        }
    }

    cleanup_hyphens(&result)
}

/// 음절 표기를 out에 추가, 완성형 한글이 아니면 false
fn push_syllable(c: char, out: &mut String) -> bool {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        return false;
    };
    if cho != SILENT_CHOSEONG {
        out.push_str(CHOSEONG[cho]);
    }
    out.push_str(JUNGSEONG[jung]);
    if jong != 0 {
        out.push_str(JONGSEONG[jong]);
    }
    true
}
