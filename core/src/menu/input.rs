use encoding_rs::Encoding;
use std::io::BufRead;

/// Reads one answer line. Returns `None` at end of input.
///
/// The line terminator (`\n` or `\r\n`) is stripped; nothing else is trimmed.
pub fn read_line<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(decode_line_bytes(&buf)))
}

pub fn decode_line_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!(
            "Detected BOM encoding: {}, bytes: {}",
            enc.name(),
            bytes.len()
        );
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        return cow.into_owned();
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    #[cfg(windows)]
    {
        for enc in [encoding_rs::GB18030, encoding_rs::GBK] {
            let (cow, _, had_err) = enc.decode(bytes);
            if !had_err {
                tracing::debug!(
                    "Using Windows fallback encoding: {}, bytes: {}",
                    enc.name(),
                    bytes.len()
                );
                return cow.into_owned();
            }
        }
    }

    tracing::debug!("Using UTF-8 lossy conversion, bytes: {}", bytes.len());
    String::from_utf8_lossy(bytes).into_owned()
}
