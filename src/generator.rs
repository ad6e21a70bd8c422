//! Random password generator.
//!
//! Produces 16-character passwords with at least one uppercase letter,
//! lowercase letter, digit and special character.

use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;

pub const GENERATED_LENGTH: usize = 16;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
/// Specials drawn by the generator. Every one of them is also in the
/// scorer's special set.
pub const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generates a password using the thread-local CSPRNG.
pub fn generate_password() -> SecretString {
    generate_password_with(&mut rand::thread_rng())
}

/// Generates a password from the given random source.
///
/// One character is drawn from each class, the rest from their union, then
/// the whole buffer is shuffled so the mandatory characters can land
/// anywhere.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> SecretString {
    let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL].concat();

    let mut buf: Vec<u8> = Vec::with_capacity(GENERATED_LENGTH);
    for class in [UPPERCASE, LOWERCASE, DIGITS, SPECIAL] {
        buf.push(pick(class, rng));
    }
    while buf.len() < GENERATED_LENGTH {
        buf.push(pick(&all, rng));
    }

    // Fisher-Yates
    buf.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(length = buf.len(), "password generated");

    let password: String = buf.iter().copied().map(char::from).collect();
    SecretString::new(password.into())
}

fn pick<R: Rng + ?Sized>(set: &[u8], rng: &mut R) -> u8 {
    set[rng.gen_range(0..set.len())]
}
