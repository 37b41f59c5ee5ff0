//! Panel version information

use std::fmt;

/// Integra hardware model as reported by the version command
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HardwareModel {
    Integra24,
    Integra32,
    Integra64,
    Integra128,
    Integra128WrlSim300,
    Integra64Plus,
    Integra128Plus,
    Integra128WrlLeon,
    Unknown(u8),
}

impl HardwareModel {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Integra24,
            1 => Self::Integra32,
            2 => Self::Integra64,
            3 => Self::Integra128,
            4 => Self::Integra128WrlSim300,
            66 => Self::Integra64Plus,
            67 => Self::Integra128Plus,
            132 => Self::Integra128WrlLeon,
            other => Self::Unknown(other),
        }
    }
    
    /// Model suffix as printed after "INTEGRA"
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Integra24 => "24",
            Self::Integra32 => "32",
            Self::Integra64 => "64",
            Self::Integra128 => "128",
            Self::Integra128WrlSim300 => "128-WRL SIM300",
            Self::Integra64Plus => "64 PLUS",
            Self::Integra128Plus => "128 PLUS",
            Self::Integra128WrlLeon => "128-WRL LEON",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for HardwareModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INTEGRA {}", self.suffix())
    }
}

/// Panel firmware language
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Language {
    Polish,
    English,
    Other(u8),
}

impl Language {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Polish,
            1 => Self::English,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polish => f.write_str("Polish"),
            Self::English => f.write_str("English"),
            Self::Other(_) => f.write_str("Other"),
        }
    }
}

/// Version information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelVersion {
    /// Hardware model
    pub model: HardwareModel,
    
    /// Firmware version and date, e.g. `1.12 2015-02-19`
    pub version: String,
    
    /// Firmware language
    pub language: Language,
    
    /// Settings stored in flash
    pub settings_stored: bool,
}

impl fmt::Display for PanelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} LANG: {} SETTINGS {} in flash",
            self.model,
            self.version,
            self.language,
            if self.settings_stored { "stored" } else { "NOT STORED" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_model_display() {
        assert_eq!(HardwareModel::from_code(67).to_string(), "INTEGRA 128 PLUS");
        assert_eq!(HardwareModel::from_code(200).to_string(), "INTEGRA UNKNOWN");
    }
    
    #[test]
    fn test_language() {
        assert_eq!(Language::from_code(1), Language::English);
        assert_eq!(Language::from_code(7).to_string(), "Other");
    }
}
