//! Event log record (`0x8C` reply)
//!
//! # Layout
//!
//! ```text
//! byte  bits (LSB first)
//! 0     monitoring_s1:2  monitoring_s2:2  present:1  not_empty:1  year:2
//! 1     day:5            class:3
//! 2     minutes_high:4   month:4
//! 3     minutes_low:8
//! 4     code_high:2      restore:1        partition:5
//! 5     code_low:8
//! 6     source_number:8
//! 7     user_control_number:5             object_number:3
//! 8-10  event index (3 bytes)
//! 11-13 calling event index (3 bytes)
//! ```

use std::fmt;

use super::{bits, fit};

/// Monitoring state of an event for one monitoring station
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Monitoring {
    New,
    Sent,
    NotSent,
    NotMonitored,
}

impl Monitoring {
    fn from_bits(value: u8) -> Self {
        match value & 0x03 {
            0 => Self::New,
            1 => Self::Sent,
            2 => Self::NotSent,
            _ => Self::NotMonitored,
        }
    }
    
    pub fn name(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Sent => "sent",
            Self::NotSent => "not sent",
            Self::NotMonitored => "not monitored",
        }
    }
}

impl fmt::Display for Monitoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Event class
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum EventClass {
    ZoneAlarm = 0,
    PartitionAlarm = 1,
    Arming = 2,
    ZoneBypass = 3,
    AccessControl = 4,
    Trouble = 5,
    UserFunction = 6,
    System = 7,
}

impl EventClass {
    fn from_bits(value: u8) -> Self {
        match value & 0x07 {
            0 => Self::ZoneAlarm,
            1 => Self::PartitionAlarm,
            2 => Self::Arming,
            3 => Self::ZoneBypass,
            4 => Self::AccessControl,
            5 => Self::Trouble,
            6 => Self::UserFunction,
            _ => Self::System,
        }
    }
    
    pub fn name(self) -> &'static str {
        match self {
            Self::ZoneAlarm => "zone and tamper alarms",
            Self::PartitionAlarm => "partition and expander alarms",
            Self::Arming => "arming, disarming, alarm clearing",
            Self::ZoneBypass => "zone bypasses",
            Self::AccessControl => "access control",
            Self::Trouble => "troubles",
            Self::UserFunction => "user functions",
            Self::System => "system events",
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded event log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Monitoring state, station 1
    pub monitoring_s1: Monitoring,
    
    /// Monitoring state, station 2
    pub monitoring_s2: Monitoring,
    
    pub present: bool,
    
    pub not_empty: bool,
    
    /// Event class
    pub event_class: EventClass,
    
    pub day: u8,
    
    pub month: u8,
    
    /// Restore (end) of the event rather than its start
    pub restore: bool,
    
    pub partition: u8,
    
    pub source_number: u8,
    
    pub object_number: u8,
    
    pub user_control_number: u8,
    
    year_bits: u8,
    minutes: u16,
    code: u16,
    event_index: [u8; 3],
    calling_event_index: [u8; 3],
    current_year: i32,
}

impl EventRecord {
    /// Record size in bytes
    pub const SIZE: usize = 14;
    
    /// Decode a record, tolerating short input
    ///
    /// # Examples
    ///
    /// ```
    /// use integra_core::record::EventRecord;
    ///
    /// let evt = EventRecord::decode(&[0x7F, 0x98, 0x83, 0x13]);
    /// assert_eq!(evt.time(), "13:07");
    /// assert_eq!(evt.code(), 0);
    /// ```
    pub fn decode(data: &[u8]) -> Self {
        let b: [u8; Self::SIZE] = fit(data);
        
        let minutes_high = bits(b[2], 0, 4);
        let code_high = bits(b[4], 0, 2);
        
        Self {
            monitoring_s1: Monitoring::from_bits(bits(b[0], 0, 2)),
            monitoring_s2: Monitoring::from_bits(bits(b[0], 2, 2)),
            present: bits(b[0], 4, 1) == 1,
            not_empty: bits(b[0], 5, 1) == 1,
            year_bits: bits(b[0], 6, 2),
            day: bits(b[1], 0, 5),
            event_class: EventClass::from_bits(bits(b[1], 5, 3)),
            month: bits(b[2], 4, 4),
            minutes: (u16::from(minutes_high) << 8) | u16::from(b[3]),
            restore: bits(b[4], 2, 1) == 1,
            partition: bits(b[4], 3, 5),
            code: (u16::from(code_high) << 8) | u16::from(b[5]),
            source_number: b[6],
            user_control_number: bits(b[7], 0, 5),
            object_number: bits(b[7], 5, 3),
            event_index: [b[8], b[9], b[10]],
            calling_event_index: [b[11], b[12], b[13]],
            current_year: 0,
        }
    }
    
    /// Attach the current year used to resolve [`Self::year`]
    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.current_year = current_year;
        self
    }
    
    /// Two-bit year, relative to the last leap year
    pub fn year_bits(&self) -> u8 {
        self.year_bits
    }
    
    /// Absolute year, resolved against the attached current year
    ///
    /// Without a current year this is just [`Self::year_bits`].
    pub fn year(&self) -> i32 {
        self.current_year - self.current_year.rem_euclid(4) + i32::from(self.year_bits)
    }
    
    /// Minutes since midnight
    pub fn minutes(&self) -> u16 {
        self.minutes
    }
    
    /// Time of day as `HH:MM`
    pub fn time(&self) -> String {
        format!("{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
    
    /// 10-bit event code
    pub fn code(&self) -> u16 {
        self.code
    }
    
    /// Index of this record in the event log
    pub fn event_index_bytes(&self) -> [u8; 3] {
        self.event_index
    }
    
    /// Index of this record as uppercase hex
    pub fn event_index(&self) -> String {
        hex::encode_upper(self.event_index)
    }
    
    /// Index of the related (calling) event
    pub fn calling_event_index_bytes(&self) -> [u8; 3] {
        self.calling_event_index
    }
    
    /// Index of the related (calling) event as uppercase hex
    pub fn calling_event_index(&self) -> String {
        hex::encode_upper(self.calling_event_index)
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Integra event: {:04}-{:02}-{:02} {}, code: {}, partition: {}, source number: {}",
            self.year(),
            self.month,
            self.day,
            self.time(),
            self.code,
            self.partition,
            self.source_number
        )
    }
}
