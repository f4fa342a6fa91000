//! Share-to-social link

/// Message posted with the final score
pub fn share_message(score: u64) -> String {
    format!("[Just Jump]\nSCORE: {score}m reached!\nPlay here:\n")
}

/// Full intent URL for sharing a score
pub fn share_url(base_url: &str, game_url: &str, score: u64) -> String {
    format!(
        "{}?text={}&url={}",
        base_url,
        encode_uri_component(&share_message(score)),
        encode_uri_component(game_url)
    )
}

/// Percent-encode everything outside the `encodeURIComponent` safe set
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}
