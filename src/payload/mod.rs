//! Payload construction
//!
//! Pure string formatting for each generation mode. Field contents are taken
//! as-is: nothing is validated and nothing is escaped, so a `;` inside an SSID
//! ends up verbatim in the `WIFI:` string.

use crate::domain::{VCardFields, WifiFields};

/// Link mode: the input text, unchanged.
pub fn link_payload(link: &str) -> String {
    link.to_string()
}

/// vCard 3.0 block with one field per line.
pub fn vcard_payload(fields: &VCardFields) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", fields.name),
        format!("TEL:{}", fields.phone),
        format!("EMAIL:{}", fields.email),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

/// `WIFI:T:<security>;S:<ssid>;P:<password>;;`
pub fn wifi_payload(fields: &WifiFields) -> String {
    format!("WIFI:T:{};S:{};P:{};;", fields.security, fields.ssid, fields.password)
}
