//! crypt(3) setup strings for the SHA-512 scheme.

use std::fmt::{self, Write};

use crate::{
    buffer::{BoundedStr, CapacityError},
    salt::{MAX_SALT_LEN, SanitizedSalt},
};

/// Scheme id selecting SHA-512 crypt.
pub const SCHEME_ID: &str = "6";

/// `$6$` + salt + `$`
pub const DESCRIPTOR_CAPACITY: usize = 1 + SCHEME_ID.len() + 1 + MAX_SALT_LEN + 1;

const _: () = assert!(DESCRIPTOR_CAPACITY >= 3 + MAX_SALT_LEN + 1);

/// A scheme-tagged setup string such as `$6$abc$`, consumed by the hashing
/// primitive.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    text: BoundedStr<DESCRIPTOR_CAPACITY>,
    salt: SanitizedSalt,
}

impl Descriptor {
    /// Build `$6$<salt>$`.
    pub fn new(salt: SanitizedSalt) -> Result<Self, CapacityError> {
        if salt.len() > MAX_SALT_LEN {
            return Err(CapacityError {
                capacity: DESCRIPTOR_CAPACITY,
            });
        }

        let mut text = BoundedStr::new();
        write!(text, "${SCHEME_ID}${salt}$").map_err(|_| CapacityError {
            capacity: DESCRIPTOR_CAPACITY,
        })?;

        tracing::debug!(descriptor = %text, "built crypt descriptor");
        Ok(Self { text, salt })
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn salt(&self) -> &SanitizedSalt {
        &self.salt
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.text, f)
    }
}
