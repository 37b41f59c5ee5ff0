//! High-level panel interface

use std::collections::BTreeSet;

use bytes::Bytes;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use encoding_rs::Encoding;
use tracing::{debug, info};

use integra_core::{bitset, constants::LATEST_EVENT, Command, EventRecord, NameRecord};
use integra_transport::Transport;
use integra_types::{HardwareModel, Language, ObjectKind, PanelVersion};

use crate::cache::NameCache;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::transaction::TransactionClient;

/// Satel Integra panel reached through an ETHM-1 module
///
/// High-level interface for querying panel state, names and the event log.
///
/// # Examples
///
/// ```no_run
/// use integra::{ClientConfig, ObjectKind, Panel};
///
/// #[tokio::main]
/// async fn main() -> integra::Result<()> {
///     let mut panel = Panel::new(ClientConfig::new("192.168.1.100"));
///     
///     let version = panel.get_version().await?;
///     println!("{}", version);
///     
///     for zone in panel.get_violated_zones().await? {
///         let name = panel.get_name(ObjectKind::Zone, zone as u8).await?;
///         println!("{} {} violated", zone, name.name());
///     }
///     
///     Ok(())
/// }
/// ```
pub struct Panel {
    client: TransactionClient,
    names: NameCache,
    encoding: &'static Encoding,
}

impl Panel {
    /// Create a panel client over TCP
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: TransactionClient::from_config(&config),
            names: NameCache::new(),
            encoding: config.encoding,
        }
    }
    
    /// Create a panel client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Box<dyn Transport>) -> Self {
        Self {
            client: TransactionClient::with_transport(&config, transport),
            names: NameCache::new(),
            encoding: config.encoding,
        }
    }
    
    /// Name cache of this session
    pub fn name_cache(&self) -> &NameCache {
        &self.names
    }
    
    /// Execute a raw command and return the response data
    pub async fn execute(&mut self, command: &Command) -> Result<Bytes> {
        self.client.execute(command).await
    }
    
    /// Get panel model, firmware version and language
    pub async fn get_version(&mut self) -> Result<PanelVersion> {
        let resp = self.client.execute(&Command::version()).await?;
        ensure_len(&resp, 14, "version")?;
        
        let c: Vec<char> = resp[1..12].iter().map(|&b| char::from(b)).collect();
        let version = format!(
            "{}.{}{} {}{}{}{}-{}{}-{}{}",
            c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8], c[9], c[10]
        );
        
        let info = PanelVersion {
            model: HardwareModel::from_code(resp[0]),
            version,
            language: Language::from_code(resp[12]),
            settings_stored: resp[13] == 0xFF,
        };
        
        info!("Panel: {}", info);
        
        Ok(info)
    }
    
    /// Get panel clock
    pub async fn get_time(&mut self) -> Result<NaiveDateTime> {
        let resp = self.client.execute(&Command::read_time()).await?;
        ensure_len(&resp, 7, "clock")?;
        
        // BCD: YYYY MM DD hh mm ss
        let d = resp[..7]
            .iter()
            .map(|&b| bcd(b))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| Error::InvalidResponse(format!("clock not BCD: {:02X?}", &resp[..7])))?;
        
        let time = NaiveDate::from_ymd_opt((d[0] * 100 + d[1]) as i32, d[2], d[3])
            .and_then(|date| date.and_hms_opt(d[4], d[5], d[6]))
            .ok_or_else(|| Error::InvalidResponse(format!("invalid clock: {:02X?}", &resp[..7])))?;
        
        debug!("Panel time: {}", time);
        
        Ok(time)
    }
    
    /// Get the name record of a device, cached per session
    pub async fn get_name(&mut self, kind: ObjectKind, number: u8) -> Result<NameRecord> {
        let code = kind.code();
        
        if let Some(record) = self.names.get(code, number) {
            return Ok(record);
        }
        
        debug!("Reading name of {} {}", kind, number);
        
        let resp = self.client.execute(&Command::device_name(code, number)).await?;
        let record = NameRecord::decode(&resp).with_encoding(self.encoding);
        
        Ok(self.names.insert(code, number, record))
    }
    
    /// Get the event preceding `index` in the event log
    ///
    /// [`LATEST_EVENT`] reads the most recent event; to continue backwards
    /// pass the returned record's [`EventRecord::event_index_bytes`].
    /// The panel clock is read first to resolve the event year.
    pub async fn get_event(&mut self, index: [u8; 3]) -> Result<EventRecord> {
        let year = self.get_time().await?.year();
        self.read_event(index, year).await
    }
    
    /// Get the most recent event
    pub async fn get_latest_event(&mut self) -> Result<EventRecord> {
        self.get_event(LATEST_EVENT).await
    }
    
    /// Walk the event log backwards from `start`, reading up to `count` events
    ///
    /// Stops early at an empty record.
    pub async fn get_events(&mut self, start: [u8; 3], count: usize) -> Result<Vec<EventRecord>> {
        let year = self.get_time().await?.year();
        
        let mut events = Vec::with_capacity(count);
        let mut index = start;
        
        for _ in 0..count {
            let event = self.read_event(index, year).await?;
            if !event.not_empty {
                break;
            }
            
            index = event.event_index_bytes();
            events.push(event);
        }
        
        Ok(events)
    }
    
    /// Get numbers of violated zones
    pub async fn get_violated_zones(&mut self) -> Result<BTreeSet<u32>> {
        self.read_bitset(&Command::violated_zones()).await
    }
    
    /// Get numbers of outputs in ON state
    pub async fn get_active_outputs(&mut self) -> Result<BTreeSet<u32>> {
        self.read_bitset(&Command::active_outputs()).await
    }
    
    /// Get numbers of armed partitions
    pub async fn get_armed_partitions(&mut self) -> Result<BTreeSet<u32>> {
        self.read_bitset(&Command::armed_partitions()).await
    }
    
    // Helper methods
    
    async fn read_event(&mut self, index: [u8; 3], year: i32) -> Result<EventRecord> {
        let resp = self.client.execute(&Command::read_event(index)).await?;
        let event = EventRecord::decode(&resp).with_current_year(year);
        
        debug!("{}", event);
        
        Ok(event)
    }
    
    async fn read_bitset(&mut self, command: &Command) -> Result<BTreeSet<u32>> {
        let resp = self.client.execute(command).await?;
        Ok(bitset::positions(&resp, 1))
    }
}

/// Two packed decimal digits
fn bcd(byte: u8) -> Option<u32> {
    let (hi, lo) = (byte >> 4, byte & 0x0F);
    (hi < 10 && lo < 10).then(|| u32::from(hi * 10 + lo))
}

fn ensure_len(resp: &[u8], expected: usize, what: &str) -> Result<()> {
    if resp.len() < expected {
        return Err(Error::InvalidResponse(format!(
            "{} reply too short: expected {} bytes, got {} bytes",
            what,
            expected,
            resp.len()
        )));
    }
    Ok(())
}
