//! # URL 유틸리티
//!
//! `/authorize` 리다이렉트 URL 구성 및 `redirect_uri` 검증 함수입니다.

use url::Url;
use validator::ValidationError;

/// `redirect_uri` 경계 검증
///
/// 절대 URL이어야 하며 제어 문자를 포함할 수 없습니다.
/// (`Url::parse`는 탭/개행을 조용히 제거하므로 별도로 거부합니다)
pub fn validate_redirect_uri(redirect_uri: &str) -> Result<(), ValidationError> {
    if redirect_uri.chars().any(char::is_control) {
        return Err(ValidationError::new("invalid_redirect_uri")
            .with_message("redirect_uri must not contain control characters".into()));
    }

    Url::parse(redirect_uri).map_err(|e| {
        ValidationError::new("invalid_redirect_uri")
            .with_message(format!("redirect_uri is not an absolute URL: {}", e).into())
    })?;

    Ok(())
}

/// `redirect_uri`에 쿼리 파라미터를 추가한 URL을 만듭니다.
///
/// - 기존 쿼리 파라미터는 유지됩니다.
/// - `params`와 같은 이름의 기존 파라미터는 교체됩니다.
/// - fragment(`#...`)는 그대로 남습니다.
/// - 값은 `application/x-www-form-urlencoded` 규칙으로 인코딩됩니다. (공백은 `+`)
///
/// # 예제
/// ```rust,ignore
/// let base = Url::parse("http://x/cb?foo=1#top")?;
/// let url = build_redirect_url(&base, &[("code", "abc"), ("state", "s 1")]);
/// assert_eq!(url, "http://x/cb?foo=1&code=abc&state=s+1#top");
/// ```
pub fn build_redirect_url(redirect_uri: &Url, params: &[(&str, &str)]) -> String {
    let mut url = redirect_uri.clone();

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|(name, _)| name == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() && params.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .extend_pairs(params.iter().copied());
    }

    url.to_string()
}
