// src/infrastructure/security/token.rs
use crate::{
    application::{
        dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
        error::{ApplicationError, ApplicationResult},
        ports::{security::TokenManager, time::Clock},
    },
    domain::user::{Role, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Duration};
use uuid::Uuid;

const TOKEN_TYPE: &str = "Bearer";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: Role,
    iat: i64,
    exp: i64,
    jti: String,
}

/// HS256 bearer tokens signed with a shared secret.
///
/// Only HS256 is accepted on the way in, whatever the token header claims.
/// Expiry is checked against the injected clock rather than the library's
/// wall-clock check, with no leeway.
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenManager {
    pub fn new(secret: &[u8], default_ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.is_empty() {
            return Err(ApplicationError::validation("token signing secret must not be empty"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            default_ttl,
            clock,
        })
    }

    fn decode(&self, token: &str) -> ApplicationResult<Claims> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))
    }
}

fn timestamp(seconds: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| ApplicationError::token_signing("timestamp out of range"))
}

fn sign(claims: &Claims, key: &EncodingKey) -> ApplicationResult<String> {
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, key)
        .map_err(|err| ApplicationError::token_signing(err.to_string()))
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject, ttl: Duration) -> ApplicationResult<AuthTokenDto> {
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|_| ApplicationError::validation("token lifetime is out of range"))?;
        let issued_at = timestamp(self.clock.now().timestamp())?;
        let expires_at = issued_at + ttl;

        let claims = Claims {
            sub: subject.user_id.to_string(),
            role: subject.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = sign(&claims, &self.encoding)?;

        Ok(AuthTokenDto {
            token,
            token_type: TOKEN_TYPE.to_string(),
            issued_at,
            expires_at,
            expires_in: ttl.num_seconds(),
        })
    }

    async fn issue_default(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        self.issue(subject, self.default_ttl).await
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let claims = self.decode(token)?;
        if claims.exp <= self.clock.now().timestamp() {
            return Err(ApplicationError::TokenExpired);
        }

        let id = claims
            .sub
            .parse::<i64>()
            .ok()
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(|| ApplicationError::invalid_token("malformed subject"))?;

        Ok(AuthenticatedUser {
            id,
            role: claims.role,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Mutex;

    struct SteppingClock(Mutex<DateTime<Utc>>);

    impl SteppingClock {
        fn at(now: DateTime<Utc>) -> Arc<Self> {
            Arc::new(Self(Mutex::new(now)))
        }

        fn advance(&self, by: ChronoDuration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(42).unwrap(),
            role: Role::Employer,
        }
    }

    fn manager(secret: &[u8], clock: Arc<SteppingClock>) -> JwtTokenManager {
        JwtTokenManager::new(secret, Duration::from_secs(3600), clock).unwrap()
    }

    #[tokio::test]
    async fn issued_token_authenticates_to_same_subject() {
        let clock = SteppingClock::at(start());
        let tokens = manager(b"secret", clock.clone());

        let issued = tokens.issue_default(subject()).await.unwrap();
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 3600);
        assert_eq!(issued.expires_at - issued.issued_at, ChronoDuration::hours(1));

        let user = tokens.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id, UserId::new(42).unwrap());
        assert_eq!(user.role, Role::Employer);
        assert_eq!(user.expires_at, issued.expires_at);
    }

    #[tokio::test]
    async fn tokens_carry_a_unique_id() {
        let clock = SteppingClock::at(start());
        let tokens = manager(b"secret", clock);

        let first = tokens.issue_default(subject()).await.unwrap();
        let second = tokens.issue_default(subject()).await.unwrap();
        assert_ne!(first.token, second.token);
    }

    #[tokio::test]
    async fn zero_ttl_is_expired_immediately() {
        let clock = SteppingClock::at(start());
        let tokens = manager(b"secret", clock);

        let issued = tokens.issue(subject(), Duration::ZERO).await.unwrap();
        assert!(matches!(
            tokens.authenticate(&issued.token).await,
            Err(ApplicationError::TokenExpired)
        ));
    }

    #[tokio::test]
    async fn token_expires_when_clock_passes_exp() {
        let clock = SteppingClock::at(start());
        let tokens = manager(b"secret", clock.clone());
        let issued = tokens.issue(subject(), Duration::from_secs(60)).await.unwrap();

        clock.advance(ChronoDuration::seconds(59));
        assert!(tokens.authenticate(&issued.token).await.is_ok());

        clock.advance(ChronoDuration::seconds(1));
        assert!(matches!(
            tokens.authenticate(&issued.token).await,
            Err(ApplicationError::TokenExpired)
        ));
    }

    #[tokio::test]
    async fn other_secret_is_rejected() {
        let clock = SteppingClock::at(start());
        let issuer = manager(b"secret-a", clock.clone());
        let verifier = manager(b"secret-b", clock);

        let issued = issuer.issue_default(subject()).await.unwrap();
        assert!(matches!(
            verifier.authenticate(&issued.token).await,
            Err(ApplicationError::InvalidToken(_))
        ));
    }

    #[tokio::test]
    async fn other_algorithms_are_rejected() {
        let clock = SteppingClock::at(start());
        let tokens = manager(b"secret", clock);
        let claims = Claims {
            sub: "42".into(),
            role: Role::Admin,
            iat: start().timestamp(),
            exp: start().timestamp() + 3600,
            jti: "x".into(),
        };
        let hs512 = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(
            tokens.authenticate(&hs512).await,
            Err(ApplicationError::InvalidToken(_))
        ));

        // {"alg":"none","typ":"JWT"} . {"sub":"1"} . <empty signature>
        let unsigned = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJzdWIiOiIxIn0.";
        assert!(matches!(
            tokens.authenticate(unsigned).await,
            Err(ApplicationError::InvalidToken(_))
        ));
    }

    #[tokio::test]
    async fn tampered_and_garbage_tokens_are_rejected() {
        let clock = SteppingClock::at(start());
        let tokens = manager(b"secret", clock);
        let issued = tokens.issue_default(subject()).await.unwrap();
        let admin = TokenSubject {
            user_id: UserId::new(1).unwrap(),
            role: Role::Admin,
        };
        let other = tokens.issue_default(admin).await.unwrap();

        // Splice the admin payload under the employer signature.
        let parts: Vec<&str> = issued.token.split('.').collect();
        let other_parts: Vec<&str> = other.token.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        for bad in [tampered.as_str(), "", "not.a.jwt", "abc"] {
            assert!(matches!(
                tokens.authenticate(bad).await,
                Err(ApplicationError::InvalidToken(_))
            ));
        }
    }

    #[test]
    fn empty_secret_is_refused() {
        let clock = SteppingClock::at(start());
        assert!(JwtTokenManager::new(b"", Duration::from_secs(60), clock).is_err());
    }

    #[test]
    fn signing_failure_is_an_internal_error() {
        let claims = Claims {
            sub: "42".into(),
            role: Role::Employer,
            iat: 0,
            exp: 60,
            jti: Uuid::new_v4().to_string(),
        };
        let wrong_family = EncodingKey::from_rsa_der(b"not an rsa key");

        let err = sign(&claims, &wrong_family).unwrap_err();
        assert!(matches!(err, ApplicationError::TokenSigning(_)));
    }
}
