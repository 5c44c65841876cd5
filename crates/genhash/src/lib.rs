//! Create an `/etc/shadow` friendly SHA-512 crypt hash from a password and a
//! caller-supplied salt.

pub mod buffer;
pub mod cli;
pub mod descriptor;
pub mod error;
pub mod hasher;
pub mod salt;

pub use descriptor::Descriptor;
pub use error::GenhashError;
pub use hasher::{EncodedHash, PasswordCrypt, Sha512Crypt};
pub use salt::SanitizedSalt;
