//! Device name record (`0xEE` reply)

use std::fmt;

use encoding_rs::{Encoding, WINDOWS_1250};
use integra_types::ObjectKind;

use super::fit;

/// Width of the name field
pub const NAME_LEN: usize = 16;

/// Decoded device name record
///
/// ```text
/// byte 0      device type
/// byte 1      device number
/// byte 2      device function
/// bytes 3-18  name, single-byte codepage, space padded
/// byte 19     serial
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    /// Raw device type code
    pub device_type_code: u8,
    
    pub device_number: u8,
    
    /// Device function, meaning depends on the device type
    pub device_function: u8,
    
    pub serial: u8,
    
    raw_name: [u8; NAME_LEN],
    encoding: &'static Encoding,
}

impl NameRecord {
    /// Record size in bytes
    pub const SIZE: usize = 20;
    
    /// Decode a record, tolerating short input
    ///
    /// The name is decoded as windows-1250 unless changed with
    /// [`Self::with_encoding`].
    pub fn decode(data: &[u8]) -> Self {
        let b: [u8; Self::SIZE] = fit(data);
        
        let mut raw_name = [0u8; NAME_LEN];
        raw_name.copy_from_slice(&b[3..3 + NAME_LEN]);
        
        Self {
            device_type_code: b[0],
            device_number: b[1],
            device_function: b[2],
            raw_name,
            serial: b[3 + NAME_LEN],
            encoding: WINDOWS_1250,
        }
    }
    
    /// Set the codepage used to decode the name
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }
    
    /// Device type, if the code is known
    pub fn kind(&self) -> integra_types::Result<ObjectKind> {
        ObjectKind::try_from(self.device_type_code)
    }
    
    /// Device type name, `"Unknown"` for codes outside the table
    pub fn device_type(&self) -> &'static str {
        ObjectKind::name_for_code(self.device_type_code)
    }
    
    /// Raw name field
    pub fn raw_name(&self) -> &[u8; NAME_LEN] {
        &self.raw_name
    }
    
    /// Name decoded with the record's codepage
    ///
    /// The name ends at the first NUL byte; trailing padding is removed.
    pub fn name(&self) -> String {
        let end = self.raw_name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        let (text, _) = self.encoding.decode_without_bom_handling(&self.raw_name[..end]);
        text.trim_end_matches(|c: char| c.is_whitespace() || c == '\0')
            .to_string()
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, type: {}", self.name(), self.device_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;
    use pretty_assertions::assert_eq;
    
    fn record(name: &[u8]) -> Vec<u8> {
        let mut data = vec![0x01, 0x05, 0x03];
        let mut field = [b' '; NAME_LEN];
        field[..name.len()].copy_from_slice(name);
        data.extend_from_slice(&field);
        data.push(0x2A);
        data
    }
    
    #[test]
    fn test_decode_name() {
        let nme = NameRecord::decode(&record(b"Front door"));
        
        assert_eq!(nme.device_type_code, 1);
        assert_eq!(nme.device_type(), "zone");
        assert_eq!(nme.kind().unwrap(), ObjectKind::Zone);
        assert_eq!(nme.device_number, 5);
        assert_eq!(nme.device_function, 3);
        assert_eq!(nme.serial, 0x2A);
        assert_eq!(nme.name(), "Front door");
        assert_eq!(nme.to_string(), "Name: Front door, type: zone");
    }
    
    #[test]
    fn test_decode_name_codepage() {
        // 0xB3 is "ł" in windows-1250 and "³" in windows-1252
        let data = record(b"Pok\xB3j");
        
        assert_eq!(NameRecord::decode(&data).name(), "Pokłj");
        assert_eq!(
            NameRecord::decode(&data).with_encoding(WINDOWS_1252).name(),
            "Pok³j"
        );
    }
    
    #[test]
    fn test_decode_name_stops_at_nul() {
        assert_eq!(NameRecord::decode(&record(b"Hall\0xyz")).name(), "Hall");
    }
    
    #[test]
    fn test_decode_short_name() {
        let nme = NameRecord::decode(&[0x04, 0x0B, 0x00, b'L', b'a', b'm', b'p']);
        
        assert_eq!(nme.device_type(), "output");
        assert_eq!(nme.name(), "Lamp");
        assert_eq!(nme.serial, 0);
    }
    
    #[test]
    fn test_unknown_device_type() {
        let nme = NameRecord::decode(&[0xC8]);
        
        assert_eq!(nme.device_type(), "Unknown");
        assert!(nme.kind().is_err());
        assert_eq!(nme.name(), "");
    }
}
