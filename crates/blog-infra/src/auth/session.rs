//! Signed session cookie codec backed by HS256 JWTs.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use blog_core::domain::SessionData;
use blog_core::ports::{AuthError, SessionService};

/// Session signing configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl SessionConfig {
    pub const DEFAULT_SECRET: &'static str = "change-me-in-production";
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: Self::DEFAULT_SECRET.to_string(),
            expiration_hours: 24 * 30,
            issuer: "blog".to_string(),
        }
    }
}

/// Wire form of the session cookie.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uid: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    flashes: Vec<String>,
    exp: i64,
    iat: i64,
    iss: String,
}

/// Session codec: the cookie value is a JWT signed with the app secret,
/// so clients can read but never forge their identity.
pub struct JwtSessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: SessionConfig,
}

impl JwtSessionService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }
}

impl SessionService for JwtSessionService {
    fn encode(&self, session: &SessionData) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        let claims = Claims {
            uid: session.user_id,
            flashes: session.flashes.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidSession(e.to_string()))
    }

    fn decode(&self, value: &str) -> Result<SessionData, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(value, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::SessionExpired,
                _ => AuthError::InvalidSession(e.to_string()),
            }
        })?;

        Ok(SessionData {
            user_id: data.claims.uid,
            flashes: data.claims.flashes,
        })
    }

    fn max_age_seconds(&self) -> i64 {
        self.config.expiration_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn test_identity_and_flashes_survive_encoding() {
        let service = JwtSessionService::new(test_config());
        let mut session = SessionData::for_user(7);
        session.flash("Welcome back");

        let cookie = service.encode(&session).unwrap();
        assert!(!cookie.is_empty());

        assert_eq!(service.decode(&cookie).unwrap(), session);
    }

    #[test]
    fn test_anonymous_session_decodes_empty() {
        let service = JwtSessionService::new(test_config());

        let cookie = service.encode(&SessionData::default()).unwrap();
        let decoded = service.decode(&cookie).unwrap();

        assert!(decoded.is_empty());
    }

    #[test]
    fn test_garbage_cookie_is_rejected() {
        let service = JwtSessionService::new(test_config());

        let result = service.decode("invalid-cookie");

        assert!(matches!(result, Err(AuthError::InvalidSession(_))));
    }

    #[test]
    fn test_cookie_signed_with_other_secret_is_rejected() {
        let forger = JwtSessionService::new(SessionConfig {
            secret: "guessed".to_string(),
            ..test_config()
        });
        let service = JwtSessionService::new(test_config());

        let forged = forger.encode(&SessionData::for_user(1)).unwrap();

        assert!(service.decode(&forged).is_err());
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let other = JwtSessionService::new(SessionConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });
        let service = JwtSessionService::new(test_config());

        let cookie = other.encode(&SessionData::for_user(2)).unwrap();

        assert!(service.decode(&cookie).is_err());
    }

    #[test]
    fn test_expired_session_is_rejected() {
        let service = JwtSessionService::new(SessionConfig {
            expiration_hours: -2,
            ..test_config()
        });

        let cookie = service.encode(&SessionData::for_user(2)).unwrap();

        assert!(matches!(
            service.decode(&cookie),
            Err(AuthError::SessionExpired)
        ));
    }

    #[test]
    fn test_max_age_seconds() {
        let service = JwtSessionService::new(SessionConfig {
            expiration_hours: 24,
            ..test_config()
        });

        assert_eq!(service.max_age_seconds(), 86400);
    }
}
