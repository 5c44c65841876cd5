use std::ffi::OsString;

use zeroize::Zeroizing;

use crate::{
    descriptor::Descriptor,
    error::GenhashError,
    hasher::{self, EncodedHash, PasswordCrypt},
    salt::SanitizedSalt,
};

const DEFAULT_PROGRAM: &str = "genhash";

pub fn usage(program: &str) -> String {
    format!("Usage: {program} [password] [salt]")
}

/// Positional arguments of one run: `<program> <password> <salt>`.
pub struct Invocation {
    password: Zeroizing<Vec<u8>>,
    salt: Vec<u8>,
}

impl Invocation {
    /// `args` includes the program name, as in `std::env::args_os`. The
    /// password's argument buffer is taken over, not copied, and wiped when
    /// the invocation drops.
    pub fn from_args(args: Vec<OsString>) -> Result<Self, GenhashError> {
        let given = args.len().saturating_sub(1);
        let mut args = args.into_iter();
        let program = args.next();

        match (args.next(), args.next(), args.next()) {
            (Some(password), Some(salt), None) => Ok(Self {
                password: Zeroizing::new(into_bytes(password)),
                salt: into_bytes(salt),
            }),
            _ => Err(GenhashError::Usage {
                program: program
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_else(|| DEFAULT_PROGRAM.to_owned()),
                given,
            }),
        }
    }

    pub fn execute<C>(&self, crypt: &C) -> Result<EncodedHash, GenhashError>
    where
        C: PasswordCrypt + ?Sized,
    {
        let salt = SanitizedSalt::sanitize(&self.salt);
        tracing::debug!(%salt, raw_len = self.salt.len(), "sanitized salt");

        let descriptor = Descriptor::new(salt)?;
        hasher::hash_password(crypt, &self.password, &descriptor)
    }
}

#[cfg(unix)]
fn into_bytes(arg: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    arg.into_vec()
}

#[cfg(not(unix))]
fn into_bytes(arg: OsString) -> Vec<u8> {
    arg.into_string()
        .unwrap_or_else(|arg| arg.to_string_lossy().into_owned())
        .into_bytes()
}

/// Parse `args` and hash.
pub fn run<C>(args: Vec<OsString>, crypt: &C) -> Result<EncodedHash, GenhashError>
where
    C: PasswordCrypt + ?Sized,
{
    Invocation::from_args(args)?.execute(crypt)
}
