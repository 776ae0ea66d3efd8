use crate::{byte_codec, error::Result};

/// A peer id in both of the forms the classifier looks at.
///
/// The text form is a sequence of UTF-16 code units, and all character
/// positions refer to it. The byte form is derived from the text form with
/// [`byte_codec::encode`], so it may be longer than the text when any unit is
/// above 127.
///
/// Nothing is validated here: ids of the wrong length are accepted and every
/// accessor treats out-of-range positions as "not present".
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PeerId {
    text: Vec<u16>,
    bytes: Vec<u8>,
}

impl PeerId {
    /// Build from a string, e.g. one already decoded by the host.
    pub fn from_text(s: &str) -> Self {
        Self::from_units(s.encode_utf16().collect())
    }

    /// Build from raw bytes as seen in a handshake or a tracker response.
    /// Each byte becomes one character of the same value.
    pub fn from_wire(b: &[u8]) -> Self {
        Self::from_units(b.iter().map(|&b| b as u16).collect())
    }

    /// Build from hex-encoded wire bytes.
    pub fn from_hex(s: &str) -> Result<Self> {
        let b = hex::decode(s.trim())?;
        Ok(Self::from_wire(&b))
    }

    fn from_units(text: Vec<u16>) -> Self {
        let bytes = byte_codec::encode(&text);
        Self { text, bytes }
    }

    pub fn units(&self) -> &[u16] {
        &self.text
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte(&self, idx: usize) -> Option<u8> {
        self.bytes.get(idx).copied()
    }

    pub fn unit(&self, idx: usize) -> Option<u16> {
        self.text.get(idx).copied()
    }

    /// The character at `idx`. Lone surrogates come back as U+FFFD.
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.unit(idx).map(unit_to_char)
    }

    pub fn is_char_at(&self, idx: usize, c: char) -> bool {
        self.char_at(idx) == Some(c)
    }

    /// Whether `needle` occurs in the text starting exactly at `pos`.
    pub fn has_at(&self, pos: usize, needle: &str) -> bool {
        let Some(rest) = self.text.get(pos..) else {
            return false;
        };
        let mut rest = rest.iter().copied();
        needle
            .encode_utf16()
            .all(|n| rest.next().is_some_and(|u| u == n))
    }

    pub fn starts_with(&self, needle: &str) -> bool {
        self.has_at(0, needle)
    }

    pub fn ends_with(&self, needle: &str) -> bool {
        let needle: Vec<u16> = needle.encode_utf16().collect();
        self.text.ends_with(&needle)
    }

    pub fn contains(&self, needle: &str) -> bool {
        let needle: Vec<u16> = needle.encode_utf16().collect();
        if needle.is_empty() {
            return true;
        }
        self.text.windows(needle.len()).any(|w| w == needle)
    }

    /// Characters in `start..end`, clamped to the text length.
    pub fn substring(&self, start: usize, end: usize) -> String {
        let end = end.min(self.text.len());
        let start = start.min(end);
        String::from_utf16_lossy(&self.text[start..end])
    }

    /// Characters in `start..end`, one per code unit, or `None` if the text
    /// is too short.
    pub fn chars_in(&self, start: usize, end: usize) -> Option<Vec<char>> {
        self.text
            .get(start..end)
            .map(|units| units.iter().copied().map(unit_to_char).collect())
    }
}

fn unit_to_char(u: u16) -> char {
    char::from_u32(u as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl From<[u8; 20]> for PeerId {
    fn from(value: [u8; 20]) -> Self {
        Self::from_wire(&value)
    }
}

impl From<&[u8; 20]> for PeerId {
    fn from(value: &[u8; 20]) -> Self {
        Self::from_wire(value)
    }
}

impl From<&str> for PeerId {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self
            .text
            .iter()
            .copied()
            .map(unit_to_char)
            .map(|c| if c.is_control() { '.' } else { c })
            .collect();
        f.write_str(&s)
    }
}

impl std::fmt::Debug for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PeerId({:?})", String::from_utf16_lossy(&self.text))
    }
}
