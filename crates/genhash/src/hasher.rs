//! Invokes the one-way hashing primitive on a password and a [`Descriptor`].

use std::fmt;

use crate::{descriptor::Descriptor, error::GenhashError};

/// A crypt(3) style primitive: takes a setup string and password bytes, and
/// returns the full encoded hash.
pub trait PasswordCrypt {
    fn crypt(&self, password: &[u8], setup: &str) -> Result<String, String>;
}

/// SHA-512 crypt as implemented by `pwhash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Crypt;

impl PasswordCrypt for Sha512Crypt {
    fn crypt(&self, password: &[u8], setup: &str) -> Result<String, String> {
        pwhash::sha512_crypt::hash_with(setup, password).map_err(|err| err.to_string())
    }
}

/// Encoded `$6$...` hash returned by the primitive.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedHash(String);

impl EncodedHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedHash").field(&self.0).finish()
    }
}

pub fn hash_password<C>(
    crypt: &C,
    password: &[u8],
    descriptor: &Descriptor,
) -> Result<EncodedHash, GenhashError>
where
    C: PasswordCrypt + ?Sized,
{
    let encoded = crypt.crypt(password, descriptor.as_str()).map_err(|reason| {
        tracing::warn!(descriptor = %descriptor, %reason, "hashing primitive failed");
        GenhashError::Hashing(reason)
    })?;

    if !echoes_descriptor(&encoded, descriptor) {
        tracing::warn!(descriptor = %descriptor, "hashing primitive ignored the requested salt");
        return Err(GenhashError::Hashing(format!(
            "output does not carry descriptor {descriptor}"
        )));
    }

    tracing::debug!(descriptor = %descriptor, "password hashed");
    Ok(EncodedHash(encoded))
}

/// The primitive must answer with the exact scheme and salt it was given.
fn echoes_descriptor(encoded: &str, descriptor: &Descriptor) -> bool {
    encoded
        .strip_prefix(descriptor.as_str())
        .is_some_and(|digest| !digest.is_empty())
}
