//! Salt sanitization.
//!
//! crypt(3) allows up to 16 salt characters drawn from `[a-zA-Z0-9./]`. Any
//! other byte is replaced with `.`, and input past the 16th byte is dropped.

use std::fmt;

use crate::buffer::BoundedStr;

pub const MAX_SALT_LEN: usize = 16;

/// Replacement for bytes outside the salt alphabet.
pub const PLACEHOLDER: char = '.';

pub fn is_salt_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'.' || byte == b'/'
}

/// A salt restricted to the crypt(3) alphabet, at most [`MAX_SALT_LEN`] long.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SanitizedSalt(BoundedStr<MAX_SALT_LEN>);

impl SanitizedSalt {
    /// Sanitize raw caller input. Never fails; non-ASCII bytes are treated
    /// as plain byte values and replaced like any other invalid byte.
    pub fn sanitize(raw: &[u8]) -> Self {
        let mut salt = BoundedStr::new();
        for &byte in raw {
            let ch = if is_salt_byte(byte) {
                char::from(byte)
            } else {
                PLACEHOLDER
            };
            // every char is a single byte, so a full buffer means 16 chars
            if salt.push(ch).is_err() {
                break;
            }
        }
        Self(salt)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SanitizedSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for SanitizedSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SanitizedSalt").field(&self.0).finish()
    }
}
