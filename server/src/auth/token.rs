//! Signed bearer tokens (HS256 JWT).

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use ootd_domain::{Actor, Role, User, UserId};
use serde::{Deserialize, Serialize};

/// Token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: UserId,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Keys and lifetime for issuing and verifying tokens.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a token for `user`, valid from now.
    pub fn issue(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user.user_id, user.role, Utc::now().timestamp())
    }

    fn issue_at(
        &self,
        user_id: UserId,
        role: Role,
        issued_at: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id,
            role,
            iat: issued_at,
            exp: issued_at + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify signature and expiry, yielding the actor the token speaks for.
    pub fn verify(&self, token: &str) -> Result<Actor, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(Actor::new(data.claims.sub, data.claims.role))
    }
}
