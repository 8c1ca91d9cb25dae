//! # 문자열 유틸리티
//!
//! Authorization 헤더 파싱과 로그용 토큰 마스킹 함수들입니다.

use crate::errors::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// `Authorization` 헤더에서 Bearer 토큰을 추출합니다.
///
/// # 반환값
/// * `Ok(&str)` - `"Bearer "` 뒤의 토큰
/// * `Err(AppError::InvalidToken)` - 헤더 없음, 8자 미만, 접두사 불일치
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::extract_bearer_token;
///
/// assert_eq!(extract_bearer_token(Some("Bearer abc")).unwrap(), "abc");
/// assert!(extract_bearer_token(Some("Basic abc")).is_err());
/// assert!(extract_bearer_token(None).is_err());
/// ```
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| {
        AppError::InvalidToken("Unauthorized - Missing Authorization header".to_string())
    })?;

    if header.len() < 8 || !header.starts_with(BEARER_PREFIX) {
        return Err(AppError::InvalidToken(
            "Unauthorized - Invalid Authorization header format".to_string(),
        ));
    }

    Ok(&header[BEARER_PREFIX.len()..])
}

/// 로그 출력용 토큰 마스킹
///
/// 앞뒤 4자만 남깁니다. 8자 이하 토큰은 `****`입니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(mask_token("abcdefghijkl"), "abcd...ijkl");
/// assert_eq!(mask_token("short"), "****");
/// ```
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
