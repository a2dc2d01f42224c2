//! Callback batch model.
//!
//! One authentication exchange delivers an ordered batch of callbacks.
//! The batch is a closed sum over the callback kinds the outer SASL
//! mechanism can emit; the bridge supports a subset and rejects the rest
//! during classification. Items carry no cross-references — the only
//! state shared across a batch is the asserted principal name extracted
//! from [`NameCallback`] items.
//!
//! Callbacks are transient: the mechanism creates them per exchange, the
//! bridge writes outcomes into them in place, and nothing survives the
//! `handle` call.

use secrecy::SecretString;

/// A single callback item in an exchange batch.
#[derive(Debug)]
pub enum Callback {
    /// Supplies the asserted principal name.
    Name(NameCallback),
    /// Requests verification of an offered password.
    VerifyPassword(VerifyPasswordCallback),
    /// Requests a run-as authorization decision.
    Authorize(AuthorizeCallback),
    /// Realm selection. Accepted but not acted upon; reserved for
    /// multi-realm support.
    SelectRealm(RealmCallback),
    /// Salted-hash negotiation. Belongs to the wire mechanism, which this
    /// layer does not implement; always rejected as unsupported.
    DigestHash(DigestHashCallback),
}

impl Callback {
    /// Stable kind label, used in error reporting.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::VerifyPassword(_) => "verify_password",
            Self::Authorize(_) => "authorize",
            Self::SelectRealm(_) => "select_realm",
            Self::DigestHash(_) => "digest_hash",
        }
    }
}

/// Carries the principal name asserted by the mechanism, if any.
#[derive(Debug, Default)]
pub struct NameCallback {
    default_name: Option<String>,
}

impl NameCallback {
    #[must_use]
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            default_name: Some(default_name.into()),
        }
    }

    /// The asserted name, or `None` if the mechanism supplied none.
    #[must_use]
    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }
}

/// Password verification request. The outcome is written in place.
#[derive(Debug)]
pub struct VerifyPasswordCallback {
    password: SecretString,
    verified: bool,
}

impl VerifyPasswordCallback {
    #[must_use]
    pub fn new(password: SecretString) -> Self {
        Self {
            password,
            verified: false,
        }
    }

    /// The offered plaintext password. Wrapped in [`SecretString`] so it
    /// never appears in `Debug` or log output.
    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Whether the password was verified against the directory.
    #[must_use]
    pub fn verified(&self) -> bool {
        self.verified
    }

    pub(crate) fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }
}

/// Run-as authorization request. The outcome is written in place.
#[derive(Debug)]
pub struct AuthorizeCallback {
    authentication_id: String,
    authorization_id: String,
    authorized: bool,
}

impl AuthorizeCallback {
    #[must_use]
    pub fn new(authentication_id: impl Into<String>, authorization_id: impl Into<String>) -> Self {
        Self {
            authentication_id: authentication_id.into(),
            authorization_id: authorization_id.into(),
            authorized: false,
        }
    }

    /// Identifier of the principal that authenticated.
    #[must_use]
    pub fn authentication_id(&self) -> &str {
        &self.authentication_id
    }

    /// Identifier of the principal it asks to act as.
    #[must_use]
    pub fn authorization_id(&self) -> &str {
        &self.authorization_id
    }

    /// Whether the run-as request was authorized.
    #[must_use]
    pub fn authorized(&self) -> bool {
        self.authorized
    }

    pub(crate) fn set_authorized(&mut self, authorized: bool) {
        self.authorized = authorized;
    }
}

/// Realm selection request.
///
/// Accepted so that mechanisms negotiating a realm do not fail the
/// exchange, but intentionally not acted upon: there is a single realm
/// today and inventing selection logic here would be wrong. Known no-op,
/// not a bug.
#[derive(Debug, Default)]
pub struct RealmCallback {
    default_realm: Option<String>,
}

impl RealmCallback {
    #[must_use]
    pub fn new(default_realm: impl Into<String>) -> Self {
        Self {
            default_realm: Some(default_realm.into()),
        }
    }

    /// The realm proposed by the mechanism, if any.
    #[must_use]
    pub fn default_realm(&self) -> Option<&str> {
        self.default_realm.as_deref()
    }
}

/// Digest-hash negotiation request.
///
/// Salted-hash handling is owned by the wire mechanism; this layer never
/// services it, so the callback carries no payload here.
#[derive(Debug, Default)]
pub struct DigestHashCallback;
