// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Share codes for walks.
//!
//! Codes are six characters from an alphabet without look-alike glyphs
//! (no `0`/`O`, no `1`/`I`), so they can be read aloud or typed from a
//! phone screen.

use ring::rand::{SecureRandom, SystemRandom};

/// Characters a code may contain.
pub const CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every code.
pub const CODE_LEN: usize = 6;

/// Errors from code generation.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    #[error("System random number generator failed")]
    Rng,
}

/// Draws random share codes.
#[derive(Clone)]
pub struct CodeGenerator {
    rng: SystemRandom,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Generate one candidate code. Uniqueness is the caller's concern.
    pub fn generate(&self) -> Result<String, CodeError> {
        let mut bytes = [0u8; CODE_LEN];
        self.rng.fill(&mut bytes).map_err(|_| CodeError::Rng)?;
        // 256 is a multiple of the alphabet size, so the modulo is unbiased.
        Ok(bytes
            .iter()
            .map(|b| CODE_ALPHABET[(*b as usize) % CODE_ALPHABET.len()] as char)
            .collect())
    }
}

/// Canonical form of a code supplied by a client.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Whether `code` (in any case) has the shape of a generated code.
pub fn is_well_formed(code: &str) -> bool {
    let code = normalize_code(code);
    code.len() == CODE_LEN && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}
