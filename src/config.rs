//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
    /// 성씨 키가 한글 음절 한 글자가 아님
    InvalidSurname(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 JSON 오류: {}", s),
            ConfigError::InvalidSurname(s) => {
                write!(f, "성씨는 한글 음절 한 글자여야 합니다: {:?}", s)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RomanizerConfig {
    /// 단어 첫 글자 성씨 관용 표기 사용 여부
    #[serde(default = "default_use_family_names")]
    pub use_family_names: bool,
    /// 추가/덮어쓸 성씨 표기 (예: "이" -> "yi")
    #[serde(default)]
    pub extra_family_names: BTreeMap<String, String>,
}

fn default_use_family_names() -> bool {
    true
}

impl Default for RomanizerConfig {
    fn default() -> Self {
        Self {
            use_family_names: default_use_family_names(),
            extra_family_names: BTreeMap::new(),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/hangul-romanize/config.json
/// XDG_CONFIG_HOME이 없으면 ~/.config 사용
pub fn config_path() -> PathBuf {
    let valid_dir = |p: &PathBuf| p.is_absolute() && p.is_dir();
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(valid_dir)
        .or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .filter(|p| p.is_absolute())
        })
        // HOME 미설정이거나 상대 경로면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("hangul-romanize").join("config.json")
}

/// 지정 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<RomanizerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RomanizerConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            RomanizerConfig::default()
        }
        Err(e) => {
            log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
            RomanizerConfig::default()
        }
    }
}

/// 지정 경로에 설정 저장
pub fn save_config_to(config: &RomanizerConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// 설정 파일 저장
pub fn save_config(config: &RomanizerConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}
