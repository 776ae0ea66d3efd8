//! Predicates deciding which textual peer id convention an id plausibly
//! follows. They are independent of each other; the classifier resolves
//! overlaps by checking them in a fixed order.

use crate::peer_id::PeerId;

/// Clients that use an Az-style prefix but don't put a dash at position 7.
const AZ_STYLE_NO_TRAILING_DASH: [&str; 5] = ["FG", "LH", "NE", "KT", "SP"];

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_version_char(c: char) -> bool {
    is_digit(c) || is_letter(c) || c == '.'
}

/// `-XX1234-...`
pub fn is_az_style(id: &PeerId) -> bool {
    if !id.is_char_at(0, '-') {
        return false;
    }
    if id.is_char_at(7, '-') {
        return true;
    }
    AZ_STYLE_NO_TRAILING_DASH
        .iter()
        .any(|code| id.substring(1, 3) == *code)
}

/// `T03C0-...`: a letter, up to four version characters padded with dashes,
/// and a dash at position 5.
pub fn is_shadow_style(id: &PeerId) -> bool {
    if !id.is_char_at(5, '-') {
        return false;
    }
    if !id.char_at(0).is_some_and(is_letter) {
        return false;
    }
    if !id.char_at(1).is_some_and(|c| is_digit(c) || c == '-') {
        return false;
    }

    // Find where the version field ends, ignoring the dash padding.
    let mut last_version_idx = 4;
    while last_version_idx > 0 && id.is_char_at(last_version_idx, '-') {
        last_version_idx -= 1;
    }

    (1..=last_version_idx).all(|i| id.char_at(i).is_some_and(is_version_char))
}

/// `Mx-y-z--` or `Mx-yy-z-`.
pub fn is_mainline_style(id: &PeerId) -> bool {
    id.is_char_at(2, '-')
        && id.is_char_at(7, '-')
        && (id.is_char_at(4, '-') || id.is_char_at(5, '-'))
}

/// Ids ending with these markers are known to be spoofed.
pub fn is_possible_spoof(id: &PeerId) -> bool {
    id.ends_with("UDP0") || id.ends_with("HTTPBT")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PeerId {
        PeerId::from_text(s)
    }

    #[test]
    fn test_az_style() {
        assert!(is_az_style(&id("-AZ2060-123456789012")));
        assert!(is_az_style(&id("-FG1234abcdefghijklm")));
        assert!(is_az_style(&id("-KT22B1abcdefghijklm")));
        assert!(!is_az_style(&id("-AZ2060x123456789012")));
        assert!(!is_az_style(&id("AZ2060-1234567890123")));
        assert!(!is_az_style(&id("")));
        assert!(!is_az_style(&id("-")));
    }

    #[test]
    fn test_shadow_style() {
        assert!(is_shadow_style(&id("T03C0-----HTy7Ij71w-")));
        assert!(is_shadow_style(&id("A310--001v5Gysr4NxNK")));
        // no version information at all
        assert!(is_shadow_style(&id("S-----abcdefghijklmn")));
        assert!(is_shadow_style(&id("R0.1.-abcdefghijklmn")));

        assert!(!is_shadow_style(&id("T03C0x----HTy7Ij71w-")));
        assert!(!is_shadow_style(&id("003C0-----HTy7Ij71w-")));
        assert!(!is_shadow_style(&id("TA3C0-----HTy7Ij71w-")));
        // dash inside the version field
        assert!(!is_shadow_style(&id("T-3C0-----HTy7Ij71w-")));
        assert!(!is_shadow_style(&id("T0-C0-----HTy7Ij71w-")));
        // non alphanumeric version character
        assert!(!is_shadow_style(&id("T0#C0-----HTy7Ij71w-")));
        assert!(!is_shadow_style(&id("T03")));
    }

    #[test]
    fn test_mainline_style() {
        assert!(is_mainline_style(&id("M4-3-6--abcdefghijkl")));
        assert!(is_mainline_style(&id("M4-20-8-abcdefghijkl")));
        assert!(!is_mainline_style(&id("M4-206--abcdefghijkl")));
        assert!(!is_mainline_style(&id("M4-3-6xxabcdefghijkl")));
        assert!(!is_mainline_style(&id("M4")));
    }

    #[test]
    fn test_spoof_markers() {
        assert!(is_possible_spoof(&id("-AZ2060-12345678UDP0")));
        assert!(is_possible_spoof(&id("-AZ2060-123456HTTPBT")));
        assert!(!is_possible_spoof(&id("-AZ2060-123456789012")));
    }
}
