//! Fixed-width text fields as stored inside car records.
//!
//! Both types keep the raw bytes they were decoded from, so a record that is
//! decoded and encoded again without edits is reproduced byte for byte, even
//! when the bytes after the terminator are not zero.

use encoding_rs::WINDOWS_1252;
use std::fmt;

/// A zero-terminated, zero-padded text field of exactly `N` bytes.
///
/// Text is stored in the Windows-1252 code page. When set from a string the
/// text is truncated to `N - 1` bytes, so the field always keeps at least one
/// terminating zero byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedText<const N: usize>([u8; N]);

impl<const N: usize> FixedText<N> {
    pub fn new(text: &str) -> Self {
        let mut bytes = [0u8; N];
        let max_content = N.saturating_sub(1);
        for (slot, c) in bytes[..max_content].iter_mut().zip(text.chars()) {
            *slot = encode_char(c);
        }
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; N] {
        &mut self.0
    }

    /// The text up to the first zero byte.
    pub fn text(&self) -> String {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        let (text, _) = WINDOWS_1252.decode_without_bom_handling(&self.0[..end]);
        text.into_owned()
    }
}

impl<const N: usize> Default for FixedText<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedText").field(&self.text()).finish()
    }
}

// Windows-1252 is a single-byte encoding, so every mappable char is one byte.
fn encode_char(c: char) -> u8 {
    let mut utf8 = [0u8; 4];
    let (bytes, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut utf8));
    match (had_errors, bytes.first()) {
        (false, Some(&b)) => b,
        _ => b'?',
    }
}

/// An ASCII text field where every character occupies two bytes: the
/// character at the even offset and a padding byte at the odd offset.
///
/// `N` is the width in bytes; the field holds at most `N / 2` characters.
/// Padding bytes are ignored when reading and written as zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct InterleavedText<const N: usize>([u8; N]);

impl<const N: usize> InterleavedText<N> {
    pub const MAX_CHARS: usize = N / 2;

    pub fn new(text: &str) -> Self {
        let mut bytes = [0u8; N];
        for (pair, c) in bytes.chunks_exact_mut(2).zip(text.chars()) {
            pair[0] = if c.is_ascii() { c as u8 } else { b'?' };
        }
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; N] {
        &mut self.0
    }

    /// The characters at even offsets, up to the first zero character.
    pub fn text(&self) -> String {
        self.0
            .iter()
            .step_by(2)
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect()
    }
}

impl<const N: usize> Default for InterleavedText<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for InterleavedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InterleavedText").field(&self.text()).finish()
    }
}
