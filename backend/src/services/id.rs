//! Short, URL-safe profile identifiers.
//!
//! A random v4 UUID is re-encoded in base 57 using an alphabet without the
//! visually ambiguous `0`, `1`, `I`, `O` and `l`, giving 22 characters.

use uuid::Uuid;

const ALPHABET: &[u8; 57] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// 57^22 is the smallest power of 57 that covers every 128-bit value.
pub const PROFILE_ID_LEN: usize = 22;

pub fn generate_profile_id() -> String {
    encode(Uuid::new_v4().as_u128())
}

/// Most significant digit first, left-padded with the zero digit.
fn encode(mut number: u128) -> String {
    let base = ALPHABET.len() as u128;
    let mut digits = [ALPHABET[0]; PROFILE_ID_LEN];

    for slot in digits.iter_mut().rev() {
        if number == 0 {
            break;
        }
        *slot = ALPHABET[(number % base) as usize];
        number /= base;
    }

    digits.iter().map(|&b| b as char).collect()
}
