/// One observed access point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkRecord {
    pub ssid: String,
    pub frequency_mhz: u32,
    pub strength: u8,
    pub bssid: String,
}

impl NetworkRecord {
    pub fn new(ssid: &str, frequency_mhz: u32) -> Self {
        Self {
            ssid: ssid.to_string(),
            frequency_mhz,
            strength: 0,
            bssid: String::new(),
        }
    }

    pub fn with_strength(mut self, strength: u8) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_bssid(mut self, bssid: &str) -> Self {
        self.bssid = bssid.to_string();
        self
    }
}

/// Where the loaded records came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordSource {
    #[default]
    Live,
    Sample,
}

/// What the device is currently connected to. `None` means unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub ssid: Option<String>,
    pub frequency_mhz: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    All,
    Band24,
    Band5,
    Band5Sorted,
    DualBand,
    NonDualBand,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::All => "Reset",
            ViewMode::Band24 => "Show 2.4 GHz networks",
            ViewMode::Band5 => "Show 5 GHz networks",
            ViewMode::Band5Sorted => "Sort 5 GHz networks by frequency",
            ViewMode::DualBand => "Show dual-band networks",
            ViewMode::NonDualBand => "Show non dual-band networks",
        }
    }
}
