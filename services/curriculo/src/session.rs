//! Per-browser session kept in a signed cookie

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::customization::Customizations;

pub const SESSION_COOKIE: &str = "curriculo_session";

/// Session state: logged-in user and résumé customizations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Email of the logged-in user
    #[serde(default)]
    pub usuario: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub customizacao: Customizations,
}

impl SessionData {
    /// Read the session from the jar. Missing or unreadable cookies give an empty session.
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Self::default();
        };

        match serde_json::from_str::<SessionData>(cookie.value()) {
            Ok(mut session) => {
                session.customizacao = session.customizacao.sanitized();
                session
            }
            Err(e) => {
                debug!("Discarding unreadable session cookie: {}", e);
                Self::default()
            }
        }
    }

    /// Store the session in the jar
    pub fn write(&self, jar: SignedCookieJar) -> SignedCookieJar {
        let value = match serde_json::to_string(self) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to serialize session: {}", e);
                return jar;
            }
        };

        let cookie = Cookie::build((SESSION_COOKIE, value))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/");

        jar.add(cookie)
    }

    pub fn login(&mut self, email: &str, lifetime: Duration) {
        self.usuario = Some(email.trim().to_string());
        self.expires_at = Some(Utc::now() + lifetime);
    }

    /// Forget the user and every customization
    pub fn logout(&mut self) {
        self.usuario = None;
        self.expires_at = None;
        self.customizacao.reset();
    }

    /// Email of the logged-in user, unless the login has expired
    pub fn current_user(&self, now: DateTime<Utc>) -> Option<&str> {
        let user = self.usuario.as_deref()?;
        match self.expires_at {
            Some(expires_at) if expires_at > now => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::CustomizationKind;
    use axum_extra::extract::cookie::Key;

    #[test]
    fn test_login_expires() {
        let mut session = SessionData::default();
        session.login(" ana@example.com ", Duration::minutes(30));

        let now = Utc::now();
        assert_eq!(session.current_user(now), Some("ana@example.com"));
        assert_eq!(session.current_user(now + Duration::minutes(31)), None);
    }

    #[test]
    fn test_logout_clears_customizations() {
        let mut session = SessionData::default();
        session.login("ana@example.com", Duration::minutes(30));
        session
            .customizacao
            .apply(CustomizationKind::Color, "red")
            .unwrap();

        session.logout();
        assert_eq!(session, SessionData::default());
    }

    #[test]
    fn test_round_trip_through_signed_jar() {
        let key = Key::generate();
        let mut session = SessionData::default();
        session.login("ana@example.com", Duration::minutes(30));
        session
            .customizacao
            .apply(CustomizationKind::Font, "Arial")
            .unwrap();

        let jar = session.write(SignedCookieJar::new(key));
        assert_eq!(SessionData::from_jar(&jar), session);
    }

    #[test]
    fn test_empty_jar_gives_default_session() {
        let jar = SignedCookieJar::new(Key::generate());
        assert_eq!(SessionData::from_jar(&jar), SessionData::default());
    }
}
