//! 성씨 관용 표기 테이블
//!
//! 단어 첫 글자가 흔한 성씨이면 음소 분해 대신 관용 표기(김 → kim)를 사용합니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 기본 성씨 표기 (10개)
const DEFAULT_SURNAMES: [(char, &str); 10] = [
    ('김', "kim"),
    ('박', "park"),
    ('이', "lee"),
    ('최', "choi"),
    ('정', "jung"),
    ('강', "kang"),
    ('조', "cho"),
    ('윤', "yoon"),
    ('장', "jang"),
    ('임', "lim"),
];

/// 프로세스 전역 기본 성씨 테이블 (읽기 전용)
pub static DEFAULT_SURNAME_TABLE: LazyLock<SurnameTable> = LazyLock::new(SurnameTable::default);

/// 성씨 한 글자 -> 로마자 표기
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurnameTable {
    entries: HashMap<char, String>,
}

impl Default for SurnameTable {
    fn default() -> Self {
        let entries = DEFAULT_SURNAMES
            .iter()
            .map(|&(c, latin)| (c, latin.to_string()))
            .collect();
        Self { entries }
    }
}

impl SurnameTable {
    /// 항목이 없는 테이블 (성씨 처리 비활성화용)
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 항목 추가 (이미 있으면 덮어씀)
    pub fn insert(&mut self, c: char, latin: impl Into<String>) {
        self.entries.insert(c, latin.into());
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
