//! 유니코드 한글 음절 판별/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 하나당 코드포인트 수 (중성 21 × 종성 28)
pub const CHOSEONG_STRIDE: u32 = 588;
/// 중성 하나당 코드포인트 수 (종성 28)
pub const JUNGSEONG_STRIDE: u32 = 28;

/// 완성형 한글 음절(U+AC00..=U+D7A3)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스 0~18, 중성 인덱스 0~20, 종성 인덱스 0~27)
pub fn decompose_syllable(c: char) -> Option<(usize, usize, usize)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / CHOSEONG_STRIDE;
    let jungseong = (offset % CHOSEONG_STRIDE) / JUNGSEONG_STRIDE;
    let jongseong = offset % JUNGSEONG_STRIDE;
    Some((choseong as usize, jungseong as usize, jongseong as usize))
}
