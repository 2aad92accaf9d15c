//! Book id generation.

use rand::Rng;

/// Length of every generated book id.
pub const ID_LEN: usize = 16;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Source of fresh book ids. The catalog rejects ids already in the store,
/// so implementations only need to be unlikely to repeat.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

/// Random URL-safe ids of `ID_LEN` characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NanoIdGenerator;

impl IdGenerator for NanoIdGenerator {
    fn generate(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
