use rand::Rng;

use crate::SessionToken;

const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TOKEN_LENGTH: usize = 32;

pub fn generate_session_token() -> SessionToken {
    let mut rng = rand::rng();
    let token: String = (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect();
    SessionToken::new(token)
}
