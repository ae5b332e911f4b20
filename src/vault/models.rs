use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One website/username/password record. The password is kept in plaintext
/// on disk; in memory it only leaves the `SecretString` when explicitly exposed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PasswordEntry {
    pub website: String,
    pub username: String,
    #[serde(serialize_with = "expose_password", deserialize_with = "secret_password")]
    pub password: SecretString,
}

impl PasswordEntry {
    pub fn new(
        website: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password: String = password.into();
        Self {
            website: website.into(),
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Raw value of `field` as stored (no trimming, no masking).
    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Website => &self.website,
            EntryField::Username => &self.username,
            EntryField::Password => self.password.expose_secret(),
        }
    }
}

impl PartialEq for PasswordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.website == other.website
            && self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Eq for PasswordEntry {}

// Plaintext on the wire, same as the browser stored it.
fn expose_password<S: Serializer>(pw: &SecretString, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(pw.expose_secret())
}

fn secret_password<'de, D: Deserializer<'de>>(d: D) -> Result<SecretString, D::Error> {
    String::deserialize(d).map(|s| SecretString::new(s.into()))
}

/// Insertion order is display order; position is the only identity.
pub type PasswordList = Vec<PasswordEntry>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryField {
    Website,
    Username,
    Password,
}

impl EntryField {
    /// Cell id prefix used by the HTML table (`website-0`, `password-3`, ...).
    pub fn id_prefix(self) -> &'static str {
        match self {
            EntryField::Website => "website",
            EntryField::Username => "username",
            EntryField::Password => "password",
        }
    }
}
