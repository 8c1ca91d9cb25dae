//! RSA 기반 JWT 서명 서비스
//!
//! RS256 알고리즘으로 액세스 토큰과 ID 토큰을 서명하고 검증합니다.
//! 공개키는 JWKS(JSON Web Key Set) 형식으로 공개되어 클라이언트가 토큰
//! 서명을 검증할 수 있습니다.
//!
//! # 특징
//!
//! - 프로세스당 하나의 2048비트 RSA 키 쌍 (최초 사용 시 메모리에서 생성)
//! - 동시에 여러 스레드가 최초 호출해도 키는 정확히 한 번만 생성
//! - 모든 토큰 헤더에 JWKS와 동일한 `kid` 포함
//!
//! # 사용 예제
//!
//! ```rust,no_run,ignore
//! use mock_oauth2_server::services::auth::KeySigner;
//!
//! let signer = KeySigner::new();
//! signer.ensure_keys()?;
//!
//! let token = signer.sign_access_token(
//!     "http://localhost:8080",
//!     "client-1",
//!     "user-client-1",
//!     vec!["openid".to_string()],
//! )?;
//!
//! let claims = signer.verify(&token)?;
//! assert_eq!(claims["aud"], "client-1");
//!
//! // GET /jwks
//! let jwks = signer.publish_jwks()?;
//! # Ok::<(), mock_oauth2_server::errors::AppError>(())
//! ```

use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::{debug, info};
use once_cell::sync::OnceCell;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::rand_core::{OsRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::models::{AccessTokenClaims, IdTokenClaims, Jwk, Jwks};
use crate::errors::{AppError, AppResult, ErrorContext};

/// JWKS와 토큰 헤더에 사용하는 고정 키 식별자
pub const KEY_ID: &str = "mock-key-1";

/// RSA 모듈러스 크기
pub const RSA_KEY_BITS: usize = 2048;

/// 기본 토큰 유효 시간 (초)
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// 생성된 RSA 키 쌍과 파생 키들
///
/// 생성 이후 변경되지 않습니다.
pub struct SigningKeypair {
    public_key: RsaPublicKey,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    kid: String,
}

impl fmt::Debug for SigningKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeypair")
            .field("kid", &self.kid)
            .field("bits", &(self.public_key.size() * 8))
            .finish_non_exhaustive()
    }
}

impl SigningKeypair {
    fn generate() -> AppResult<Self> {
        info!("🔑 RSA 키 쌍 생성 중 ({}비트)...", RSA_KEY_BITS);

        let private_key = RsaPrivateKey::new(&mut OsRng, RSA_KEY_BITS)
            .map_err(|e| AppError::KeyGeneration(e.to_string()))?;
        let public_key = private_key.to_public_key();

        let private_key_pem = private_key
            .to_pkcs1_pem(rsa::pkcs1::LineEnding::LF)
            .context("PKCS#1 PEM 인코딩 실패")?;
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .context("서명 키 변환 실패")?;

        let (n, e) = encode_components(&public_key);
        let decoding_key =
            DecodingKey::from_rsa_components(&n, &e).context("검증 키 변환 실패")?;

        info!("✅ RSA 키 쌍 생성 완료 - kid: {}", KEY_ID);

        Ok(Self {
            public_key,
            encoding_key,
            decoding_key,
            kid: KEY_ID.to_string(),
        })
    }

    pub fn kid(&self) -> &str {
        &self.kid
    }
}

/// 공개키의 (n, e)를 패딩 없는 base64url로 인코딩합니다.
fn encode_components(public_key: &RsaPublicKey) -> (String, String) {
    let n = general_purpose::URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be());
    let e = general_purpose::URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be());
    (n, e)
}

/// 128비트 랜덤 nonce (base64url)
fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// JWT 서명 서비스
///
/// `AppState`가 소유하고 `Arc`로 공유합니다. 키 쌍은 [`KeySigner::ensure_keys`]
/// 최초 호출 시 생성되며 프로세스 종료까지 재사용됩니다.
#[derive(Debug)]
pub struct KeySigner {
    keys: OnceCell<SigningKeypair>,
    token_lifetime: i64,
}

impl Default for KeySigner {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySigner {
    /// 기본 유효 시간(3600초)으로 생성합니다. 키는 아직 만들지 않습니다.
    pub fn new() -> Self {
        Self::with_lifetime(DEFAULT_TOKEN_LIFETIME_SECS)
    }

    pub fn with_lifetime(token_lifetime: i64) -> Self {
        Self {
            keys: OnceCell::new(),
            token_lifetime,
        }
    }

    /// 서명되는 토큰의 `exp - iat` (초)
    pub fn token_lifetime(&self) -> i64 {
        self.token_lifetime
    }

    /// 키 쌍을 한 번만 생성하고 반환합니다.
    ///
    /// 동시에 호출된 경우 나머지 호출자는 생성이 끝날 때까지 대기한 뒤 같은
    /// 키 쌍을 받습니다. 생성에 실패하면 셀은 비어 있는 상태로 남습니다.
    pub fn ensure_keys(&self) -> AppResult<&SigningKeypair> {
        self.keys.get_or_try_init(SigningKeypair::generate)
    }

    /// 액세스 토큰을 서명합니다.
    pub fn sign_access_token(
        &self,
        issuer: &str,
        client_id: &str,
        subject: &str,
        scopes: Vec<String>,
    ) -> AppResult<String> {
        let iat = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            iss: issuer.to_string(),
            sub: subject.to_string(),
            aud: client_id.to_string(),
            iat,
            exp: iat + self.token_lifetime,
            scope: scopes,
        };
        self.sign(&claims)
    }

    /// ID 토큰을 서명합니다.
    ///
    /// `email`/`name`은 비어 있지 않을 때만 클레임에 포함됩니다.
    pub fn sign_id_token(
        &self,
        issuer: &str,
        client_id: &str,
        subject: &str,
        email: Option<&str>,
        name: Option<&str>,
    ) -> AppResult<String> {
        let iat = Utc::now().timestamp();
        let claims = IdTokenClaims {
            iss: issuer.to_string(),
            sub: subject.to_string(),
            aud: client_id.to_string(),
            iat,
            exp: iat + self.token_lifetime,
            nonce: generate_nonce(),
            email: email.filter(|v| !v.is_empty()).map(str::to_string),
            name: name.filter(|v| !v.is_empty()).map(str::to_string),
        };
        self.sign(&claims)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> AppResult<String> {
        let keys = self.ensure_keys()?;

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(keys.kid.clone());

        encode(&header, claims, &keys.encoding_key).map_err(|e| AppError::Signing(e.to_string()))
    }

    /// JWT 서명을 검증하고 전체 클레임을 반환합니다.
    ///
    /// RSA 계열(RS256/RS384/RS512)이 아닌 알고리즘, 잘못된 서명, 형식 오류,
    /// 만료된 토큰은 모두 [`AppError::InvalidToken`]입니다.
    pub fn verify(&self, token: &str) -> AppResult<Map<String, Value>> {
        let keys = self.ensure_keys()?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.algorithms = vec![Algorithm::RS256, Algorithm::RS384, Algorithm::RS512];
        validation.validate_aud = false;

        decode::<Map<String, Value>>(token, &keys.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("🔍 JWT 검증 실패: {}", e);
                AppError::InvalidToken(format!("Invalid token: {}", e))
            })
    }

    /// 현재 키 쌍의 공개키를 JWKS 문서로 반환합니다.
    pub fn publish_jwks(&self) -> AppResult<Jwks> {
        let keys = self.ensure_keys()?;
        let (n, e) = encode_components(&keys.public_key);

        Ok(Jwks {
            keys: vec![Jwk {
                kty: "RSA".to_string(),
                use_: "sig".to_string(),
                kid: keys.kid.clone(),
                alg: "RS256".to_string(),
                n,
                e,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::decode_header;
    use once_cell::sync::Lazy;

    static SIGNER: Lazy<KeySigner> = Lazy::new(KeySigner::new);

    #[test]
    fn test_access_token_round_trip() {
        let token = SIGNER
            .sign_access_token(
                "http://localhost:8080",
                "c1",
                "user-c1",
                vec!["openid".into(), "email".into()],
            )
            .unwrap();

        assert_eq!(token.split('.').count(), 3);

        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), Some(KEY_ID));

        let claims: AccessTokenClaims =
            serde_json::from_value(Value::Object(SIGNER.verify(&token).unwrap())).unwrap();
        assert_eq!(claims.iss, "http://localhost:8080");
        assert_eq!(claims.sub, "user-c1");
        assert_eq!(claims.aud, "c1");
        assert_eq!(claims.scope, vec!["openid", "email"]);
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_id_token_optional_claims() {
        let token = SIGNER
            .sign_id_token("iss", "c1", "user-c1", Some("a@b.com"), Some(""))
            .unwrap();
        let claims = SIGNER.verify(&token).unwrap();

        assert_eq!(claims["email"], "a@b.com");
        assert!(!claims.contains_key("name"));
        assert!(!claims["nonce"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_nonce_differs_per_token() {
        let first = SIGNER.sign_id_token("iss", "c1", "s", None, None).unwrap();
        let second = SIGNER.sign_id_token("iss", "c1", "s", None, None).unwrap();

        let first = SIGNER.verify(&first).unwrap();
        let second = SIGNER.verify(&second).unwrap();
        assert_ne!(first["nonce"], second["nonce"]);
    }

    #[test]
    fn test_jwks_verifies_signed_token() {
        let jwks = SIGNER.publish_jwks().unwrap();
        assert_eq!(jwks.keys.len(), 1);

        let jwk = &jwks.keys[0];
        assert_eq!(jwk.kty, "RSA");
        assert_eq!(jwk.use_, "sig");
        assert_eq!(jwk.alg, "RS256");
        assert_eq!(jwk.kid, KEY_ID);
        assert!(!jwk.n.contains('='));

        let token = SIGNER
            .sign_access_token("iss", "c1", "user-c1", vec!["openid".into()])
            .unwrap();

        let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e).unwrap();
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_aud = false;
        let data = decode::<AccessTokenClaims>(&token, &key, &validation).unwrap();
        assert_eq!(data.claims.aud, "c1");
    }

    #[test]
    fn test_rejects_hmac_signed_token() {
        let claims = AccessTokenClaims {
            iss: "iss".into(),
            sub: "user-c1".into(),
            aud: "c1".into(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 60,
            scope: vec![],
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(SIGNER.verify(&token), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_rejects_tampered_and_malformed_tokens() {
        let token = SIGNER
            .sign_access_token("iss", "c1", "user-c1", vec![])
            .unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = general_purpose::URL_SAFE_NO_PAD
            .encode(br#"{"iss":"iss","sub":"admin","aud":"c1","iat":0,"exp":9999999999,"scope":[]}"#);
        parts[1] = &forged_payload;
        let tampered = parts.join(".");

        assert!(matches!(SIGNER.verify(&tampered), Err(AppError::InvalidToken(_))));
        assert!(matches!(SIGNER.verify("not-a-jwt"), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_custom_lifetime() {
        let signer = KeySigner::with_lifetime(120);
        assert_eq!(signer.token_lifetime(), 120);
    }

    #[test]
    fn test_concurrent_key_init_yields_single_keypair() {
        let signer = KeySigner::new();

        let moduli: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        let jwks = signer.publish_jwks().unwrap();
                        jwks.keys[0].n.clone()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(moduli.iter().all(|n| n == &moduli[0]));
        assert!(std::ptr::eq(
            signer.ensure_keys().unwrap(),
            signer.ensure_keys().unwrap()
        ));
    }
}
