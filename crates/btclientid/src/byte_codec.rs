/// Expand text code units into bytes.
///
/// Every unit becomes 1, 2 or 3 bytes depending on its value. This is not
/// UTF-8: surrogate halves are expanded independently, so a character outside
/// the BMP turns into 6 bytes.
pub fn encode(units: &[u16]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(units.len());
    for &c in units {
        push_unit(&mut buf, c);
    }
    buf
}

pub fn encode_str(s: &str) -> Vec<u8> {
    let units: Vec<u16> = s.encode_utf16().collect();
    encode(&units)
}

fn push_unit(buf: &mut Vec<u8>, c: u16) {
    if c < 128 {
        buf.push(c as u8);
    } else if c < 2048 {
        buf.extend_from_slice(&[((c >> 6) | 192) as u8, ((c & 63) | 128) as u8]);
    } else {
        buf.extend_from_slice(&[
            ((c >> 12) | 224) as u8,
            (((c >> 6) & 63) | 128) as u8,
            ((c & 63) | 128) as u8,
        ]);
    }
}
