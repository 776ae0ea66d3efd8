//! Decoders for clients whose version isn't printable text, and for clients
//! recognized by byte signatures rather than any naming convention.

use crate::{classify::ClientIdentification, peer_id::PeerId};

/// BitSpirit puts "BS" at position 2 and its version in byte 1.
pub fn decode_bitspirit(id: &PeerId) -> Option<ClientIdentification> {
    if !id.has_at(2, "BS") {
        return None;
    }
    let version = match id.byte(1)? {
        // Old releases left the version byte empty.
        0 => 1,
        v => v,
    };
    Some(ClientIdentification::with_version("BitSpirit", version.to_string()))
}

/// BitComet, its mods, and BitLord which reuses the BitComet scheme.
pub fn decode_bitcomet(id: &PeerId) -> Option<ClientIdentification> {
    let mod_name = if id.starts_with("exbc") {
        ""
    } else if id.starts_with("FUTB") {
        "(Solidox Mod)"
    } else if id.starts_with("xUTB") {
        "(Mod 2)"
    } else {
        return None;
    };

    let is_bitlord = id.has_at(6, "LORD");
    let major = id.byte(4)?;
    let minor = id.byte(5)?;

    // BitLord 1 and onwards is x.y, older BitLord and BitComet are x.yy
    let minor_width = if is_bitlord && major != 0 { 1 } else { 2 };

    let mut client = String::from(if is_bitlord { "BitLord" } else { "BitComet" });
    if !mod_name.is_empty() {
        client.push(' ');
        client.push_str(mod_name);
    }
    Some(ClientIdentification::with_version(
        client,
        format!("{major}.{minor:0minor_width$}"),
    ))
}

/// Clients identified by byte signatures at fixed positions.
pub fn identify_awkward_client(id: &PeerId) -> Option<ClientIdentification> {
    let b = id.bytes();
    let first_non_zero = b.iter().take(20).position(|&x| x > 0).unwrap_or(20);

    if first_non_zero == 0 && is_shareaza(b) {
        return Some(ClientIdentification::new("Shareaza"));
    }

    if first_non_zero == 9 && b.get(9..12) == Some(&[3, 3, 3][..]) {
        return Some(ClientIdentification::new("I2PSnark"));
    }

    if first_non_zero == 12 {
        return Some(match b.get(12..14) {
            Some([97, 97]) => ClientIdentification::with_version("Experimental", "3.2.1b2"),
            Some([0, 0]) => ClientIdentification::with_version("Experimental", "3.1"),
            _ => ClientIdentification::new("Mainline"),
        });
    }

    None
}

/// Shareaza fills 16 non-zero bytes and derives the last 4 from them.
fn is_shareaza(b: &[u8]) -> bool {
    let Some(b) = b.get(..20) else {
        return false;
    };
    if b[..16].contains(&0) {
        return false;
    }
    (16..20).all(|i| b[i] == b[i % 16] ^ b[15 - (i % 16)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(client: &str, version: Option<&str>) -> Option<ClientIdentification> {
        Some(ClientIdentification {
            client: client.to_owned(),
            version: version.map(|v| v.to_owned()),
        })
    }

    #[test]
    fn test_bitspirit() {
        let id = PeerId::from_wire(b"\x00\x03BSabcdefghijklmnop");
        assert_eq!(decode_bitspirit(&id), ident("BitSpirit", Some("3")));

        let id = PeerId::from_wire(b"\x00\x00BSabcdefghijklmnop");
        assert_eq!(decode_bitspirit(&id), ident("BitSpirit", Some("1")));

        let id = PeerId::from_wire(b"\x00\x03XSabcdefghijklmnop");
        assert_eq!(decode_bitspirit(&id), None);
    }

    #[test]
    fn test_bitcomet() {
        let id = PeerId::from_wire(b"exbc\x02\x05abcdefghijklmn");
        assert_eq!(decode_bitcomet(&id), ident("BitComet", Some("2.05")));

        let id = PeerId::from_wire(b"exbc\x00\x5bLORDabcdefghij");
        assert_eq!(decode_bitcomet(&id), ident("BitLord", Some("0.91")));

        let id = PeerId::from_wire(b"exbc\x01\x02LORDabcdefghij");
        assert_eq!(decode_bitcomet(&id), ident("BitLord", Some("1.2")));

        let id = PeerId::from_wire(b"FUTB\x00\x32abcdefghijklmn");
        assert_eq!(
            decode_bitcomet(&id),
            ident("BitComet (Solidox Mod)", Some("0.50"))
        );

        let id = PeerId::from_wire(b"xUTB\x00\x32LORDabcdefghij");
        assert_eq!(decode_bitcomet(&id), ident("BitLord (Mod 2)", Some("0.50")));

        let id = PeerId::from_wire(b"exbd\x02\x05abcdefghijklmn");
        assert_eq!(decode_bitcomet(&id), None);

        // too short to carry the version bytes
        assert_eq!(decode_bitcomet(&PeerId::from_text("exbc")), None);
    }

    #[test]
    fn test_shareaza() {
        let mut b = [0u8; 20];
        for (i, x) in b.iter_mut().take(16).enumerate() {
            *x = i as u8 + 1;
        }
        b[16..].copy_from_slice(&[17, 13, 13, 9]);
        assert_eq!(
            identify_awkward_client(&PeerId::from(b)),
            ident("Shareaza", None)
        );

        b[19] = 10;
        assert_eq!(identify_awkward_client(&PeerId::from(b)), None);
    }

    #[test]
    fn test_i2psnark() {
        let mut b = [0u8; 20];
        b[9..12].copy_from_slice(&[3, 3, 3]);
        assert_eq!(
            identify_awkward_client(&PeerId::from(b)),
            ident("I2PSnark", None)
        );
        b[11] = 4;
        assert_eq!(identify_awkward_client(&PeerId::from(b)), None);
    }

    #[test]
    fn test_mainline_experimental() {
        let mut b = [0u8; 20];
        b[12..16].copy_from_slice(&[97, 97, 1, 1]);
        assert_eq!(
            identify_awkward_client(&PeerId::from(b)),
            ident("Experimental", Some("3.2.1b2"))
        );

        let id = PeerId::from_wire(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(identify_awkward_client(&id), ident("Mainline", None));
    }

    #[test]
    fn test_all_zero_is_not_awkward() {
        assert_eq!(identify_awkward_client(&PeerId::from([0u8; 20])), None);
    }
}
