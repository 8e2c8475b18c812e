//! 하이픈 정리 후처리

/// 변환 결과의 하이픈 정리
/// 1. 연속된 하이픈을 하나로 합침
/// 2. 공백 앞 하이픈 제거 (공백 문자는 유지)
/// 3. 끝의 하이픈 제거
pub fn cleanup_hyphens(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }

    let mut result = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' && chars.peek().is_some_and(|next| next.is_whitespace()) {
            continue;
        }
        result.push(c);
    }

    let trimmed = result.trim_end_matches('-').len();
    result.truncate(trimmed);
    result
}
