use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How a client encodes its version in the 4-character field of an Az-style
/// peer id (positions 3..7).
///
/// In the examples below the raw field is `abcd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionFormat {
    /// `a.b.c`
    ThreeDigits,
    /// `a.b.c.d`
    FourDigits,
    /// `a.b.c Beta`, `a.b.c Alpha` or `a.b.c ` depending on `d`.
    ThreeDigitsPlusMnemonic,
    /// `ab.cd`
    TwoMajTwoMin,
    /// `b.cd`
    SkipFirstOneMajTwoMin,
    /// `a.b.c`, or `a.b.1N` where N is the index of `c` in `ABCDE`.
    Deluge,
    /// Leading zeros collapsed, `+` for development builds.
    Transmission,
    /// Two digit pairs, each collapsed when it starts with `0`.
    WebTorrent,
    /// A fixed version string, returned as is.
    Literal(Cow<'static, str>),
    /// The client is known not to encode a version.
    #[serde(rename = "none")]
    NoVersion,
}

impl VersionFormat {
    pub const fn literal(s: &'static str) -> Self {
        VersionFormat::Literal(Cow::Borrowed(s))
    }

    /// Apply the format to a raw version field. Positional formats need
    /// exactly 4 characters and return `None` otherwise.
    pub fn format(&self, field: &[char]) -> Option<String> {
        use VersionFormat::*;

        let field = <&[char; 4]>::try_from(field).ok();
        let v = match (self, field) {
            (Literal(s), _) => s.to_string(),
            (NoVersion, _) | (_, None) => return None,
            (ThreeDigits, Some([a, b, c, _])) => format!("{a}.{b}.{c}"),
            (FourDigits, Some([a, b, c, d])) => format!("{a}.{b}.{c}.{d}"),
            (ThreeDigitsPlusMnemonic, Some([a, b, c, d])) => {
                let mnemonic = match d {
                    'B' => "Beta",
                    'A' => "Alpha",
                    _ => "",
                };
                format!("{a}.{b}.{c} {mnemonic}")
            }
            (TwoMajTwoMin, Some([a, b, c, d])) => format!("{a}{b}.{c}{d}"),
            (SkipFirstOneMajTwoMin, Some([_, b, c, d])) => format!("{b}.{c}{d}"),
            (Deluge, Some([a, b, c, _])) => {
                if c.is_ascii_digit() {
                    format!("{a}.{b}.{c}")
                } else {
                    // Letters outside A-E keep the historical "-1" index.
                    let idx = "ABCDE".find(*c).map_or(-1, |i| i as i32);
                    format!("{a}.{b}.1{idx}")
                }
            }
            (Transmission, Some([a, b, c, d])) => match (a, b, c) {
                ('0', '0', '0') => format!("0.{d}"),
                ('0', '0', _) => format!("0.{c}{d}"),
                _ => {
                    let dev = if matches!(d, 'Z' | 'X') { "+" } else { "" };
                    format!("{a}.{b}{c}{dev}")
                }
            },
            (WebTorrent, Some([a, b, c, d])) => {
                let major = match a {
                    '0' => b.to_string(),
                    _ => format!("{a}{b}"),
                };
                let minor = match c {
                    '0' => d.to_string(),
                    _ => format!("{c}{d}"),
                };
                format!("{major}.{minor}")
            }
        };
        Some(v)
    }
}
