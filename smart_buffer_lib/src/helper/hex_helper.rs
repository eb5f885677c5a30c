/// lowercase hex, two digits per byte
pub fn to_hex_string(bytes: &[u8]) -> String {
    let mut str = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        str.push_str(&format!("{:02x}", byte));
    }
    return str;
}

/// hex dump with 16 bytes per line, each line prefixed with its offset
pub fn to_hex_dump(bytes: &[u8]) -> String {
    let mut str = String::new();
    for (i, line) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = line.iter().map(|b| format!("{:02x}", b)).collect();
        str.push_str(&format!("{:08x}  {}\n", i * 16, hex.join(" ")));
    }
    return str;
}
