use crate::models::ConnectionStatus;

const PAIRING_LOW_MHZ: u32 = 2200;
const PAIRING_HIGH_MHZ: u32 = 2600;

/// Whether the current connection is usable for pairing a 2.4 GHz-only device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    NoData,
    Mismatch {
        ssid: Option<String>,
        frequency_mhz: u32,
    },
    Compatible {
        frequency_mhz: u32,
    },
}

pub fn assess(status: &ConnectionStatus) -> Advisory {
    match status.frequency_mhz {
        None => Advisory::NoData,
        Some(frequency_mhz) if !(PAIRING_LOW_MHZ..=PAIRING_HIGH_MHZ).contains(&frequency_mhz) => {
            Advisory::Mismatch {
                ssid: status.ssid.clone(),
                frequency_mhz,
            }
        }
        Some(frequency_mhz) => Advisory::Compatible { frequency_mhz },
    }
}

impl Advisory {
    pub fn title(&self) -> String {
        match self {
            Advisory::NoData => "Frequency unknown".to_string(),
            Advisory::Mismatch { ssid, .. } => {
                format!("Error: {}", ssid.as_deref().unwrap_or("unknown network"))
            }
            Advisory::Compatible { .. } => "Congratulations".to_string(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Advisory::NoData => {
                "The frequency of your network could not be determined.".to_string()
            }
            Advisory::Mismatch { frequency_mhz, .. } => format!(
                "Your network frequency seems to be {frequency_mhz} MHz. \
                 Please connect to a 2.4 GHz network to pair correctly."
            ),
            Advisory::Compatible { frequency_mhz } => format!(
                "Your network frequency seems to be {frequency_mhz} MHz. \
                 You can pair correctly."
            ),
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Advisory::Mismatch { .. })
    }
}
