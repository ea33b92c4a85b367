use crate::backend::{BackendResult, Scanner};
use crate::models::{NetworkRecord, RecordSource};

/// Compiled-in scan results, used when live scanning is turned off or
/// NetworkManager cannot be reached.
const SAMPLE_NETWORKS: &[(&str, u32, u8, &str)] = &[
    ("Home_Fiber", 2437, 82, "a4:2b:b0:11:02:10"),
    ("Home_Fiber", 5180, 74, "a4:2b:b0:11:02:11"),
    ("Office_Main", 2412, 65, "3c:84:6a:7e:40:01"),
    ("Office_Main", 5240, 58, "3c:84:6a:7e:40:02"),
    ("Office_Main", 5745, 41, "3c:84:6a:7e:40:03"),
    ("Coffee_Shop_Free", 2462, 55, "f8:1a:67:20:9c:44"),
    ("Guest_Network", 2412, 47, "00:1d:7e:c3:aa:90"),
    ("Linksys_502", 2437, 18, "c0:56:27:0e:51:3f"),
    ("Linksys_502", 2437, 12, "c0:56:27:0e:51:40"),
    ("Bbox-5G-7F21", 5500, 36, "e4:9e:12:4b:7f:21"),
    ("Bbox-7F21", 2457, 61, "e4:9e:12:4b:7f:20"),
    ("Livebox-A3C0", 2422, 70, "2c:e4:12:8d:a3:c0"),
    ("Livebox-A3C0", 5260, 66, "2c:e4:12:8d:a3:c1"),
    ("Freebox-Salon", 5320, 52, "68:a3:78:02:5d:17"),
    ("SFR_6F48", 2472, 29, "38:35:fb:6f:48:00"),
    ("", 2452, 24, "9a:2b:b0:11:02:12"),
    ("", 5200, 21, "9a:2b:b0:11:02:13"),
    ("Printer_Direct", 2412, 33, "de:ad:be:ef:10:01"),
    ("Lab_Mesh", 5180, 77, "70:3a:cb:00:10:aa"),
    ("Lab_Mesh", 5180, 60, "70:3a:cb:00:10:ab"),
    ("Lab_Mesh", 5805, 45, "70:3a:cb:00:10:ac"),
    ("Neighbour_6E", 5955, 15, "70:3a:cb:55:00:01"),
    ("Tethering", 2484, 39, "5e:11:03:7f:c2:09"),
];

/// Scans nothing; there is no connection behind it, so it only lists.
pub struct SampleBackend;

impl SampleBackend {
    pub fn new() -> Self {
        Self
    }

    pub fn networks(&self) -> Vec<NetworkRecord> {
        SAMPLE_NETWORKS
            .iter()
            .map(|&(ssid, frequency_mhz, strength, bssid)| {
                NetworkRecord::new(ssid, frequency_mhz)
                    .with_strength(strength)
                    .with_bssid(bssid)
            })
            .collect()
    }
}

impl Scanner for SampleBackend {
    fn rescan_and_list(&self) -> BackendResult<Vec<NetworkRecord>> {
        Ok(self.networks())
    }

    fn source(&self) -> RecordSource {
        RecordSource::Sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{self, Band};

    #[test]
    fn fixture_covers_every_view() {
        let networks = SampleBackend::new().rescan_and_list().unwrap();
        assert!(networks.iter().all(|n| n.frequency_mhz > 0));
        assert!(!filter::by_band(&networks, Band::TWO_POINT_FOUR).is_empty());
        assert!(!filter::by_band(&networks, Band::FIVE).is_empty());
        assert!(!filter::dual_band(&networks).is_empty());
        assert!(!filter::non_dual_band(&networks).is_empty());
        assert!(networks.iter().any(|n| n.ssid.is_empty()));
    }

    #[test]
    fn reports_itself_as_sample() {
        assert_eq!(SampleBackend::new().source(), RecordSource::Sample);
    }
}
