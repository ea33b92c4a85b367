use crate::backend::{Backend, BackendError, BackendResult, Scanner};
use crate::models::{NetworkRecord, RecordSource};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::thread;
use std::time::Duration;
use zbus::blocking::{Connection, Proxy};
use zbus::zvariant::{OwnedObjectPath, Value};

pub struct NetworkManagerBackend;

impl NetworkManagerBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Scanner for NetworkManagerBackend {
    fn rescan_and_list(&self) -> BackendResult<Vec<NetworkRecord>> {
        let conn = system_bus()?;
        let nm = nm_proxy(&conn)?;
        let wifi_device = first_wifi_device(&conn, &nm)?;
        let wireless = wireless_proxy(&conn, &wifi_device)?;

        let last_scan: Option<i64> = wireless.get_property("LastScan").ok();
        let options: HashMap<&str, Value> = HashMap::new();
        let requested: zbus::Result<()> = wireless.call("RequestScan", &(options));
        match requested {
            Ok(()) => wait_for_scan(&wireless, last_scan),
            // NetworkManager refuses while a scan is already running; the
            // cached list is still current enough.
            Err(err) => tracing::warn!("Scan request rejected, listing cached results: {err}"),
        }

        let ap_paths: Vec<OwnedObjectPath> = wireless.call("GetAccessPoints", &())?;
        let networks = read_each(&ap_paths, |path| read_access_point(&conn, path));

        tracing::debug!(count = networks.len(), "Listed access points");
        Ok(networks)
    }

    fn source(&self) -> RecordSource {
        RecordSource::Live
    }
}

impl Backend for NetworkManagerBackend {
    fn check_permission(&self) -> BackendResult<()> {
        let conn = system_bus()?;
        let nm = nm_proxy(&conn)?;
        let permissions: HashMap<String, String> = nm.call("GetPermissions", &())?;
        permission_verdict(&permissions)
    }

    fn current_ssid(&self) -> BackendResult<String> {
        let conn = system_bus()?;
        let ap_path = active_access_point(&conn)?;
        let ap = ap_proxy(&conn, &ap_path)?;
        let ssid_bytes: Vec<u8> = ap.get_property("Ssid")?;
        Ok(decode_ssid(&ssid_bytes))
    }

    fn current_frequency(&self) -> BackendResult<u32> {
        let conn = system_bus()?;
        let ap_path = active_access_point(&conn)?;
        let ap = ap_proxy(&conn, &ap_path)?;
        Ok(ap.get_property("Frequency")?)
    }
}

pub mod nm_consts {
    pub const BUS_NAME: &str = "org.freedesktop.NetworkManager";
    pub const OBJECT_PATH: &str = "/org/freedesktop/NetworkManager";
    pub const INTERFACE: &str = "org.freedesktop.NetworkManager";
    pub const DEVICE_INTERFACE: &str = "org.freedesktop.NetworkManager.Device";
    pub const WIFI_DEVICE_INTERFACE: &str = "org.freedesktop.NetworkManager.Device.Wireless";
    pub const AP_INTERFACE: &str = "org.freedesktop.NetworkManager.AccessPoint";
    pub const SCAN_PERMISSION: &str = "org.freedesktop.NetworkManager.wifi.scan";
}

const NM_DEVICE_TYPE_WIFI: u32 = 2;
const SCAN_POLL_INTERVAL: Duration = Duration::from_millis(250);
const SCAN_POLL_ATTEMPTS: u32 = 20;

fn system_bus() -> BackendResult<Connection> {
    Ok(Connection::system()?)
}

fn nm_proxy(conn: &Connection) -> BackendResult<Proxy<'_>> {
    Ok(Proxy::new(
        conn,
        nm_consts::BUS_NAME,
        nm_consts::OBJECT_PATH,
        nm_consts::INTERFACE,
    )?)
}

fn device_proxy<'a>(
    conn: &'a Connection,
    path: &'a OwnedObjectPath,
) -> BackendResult<Proxy<'a>> {
    Ok(Proxy::new(
        conn,
        nm_consts::BUS_NAME,
        path.as_str(),
        nm_consts::DEVICE_INTERFACE,
    )?)
}

fn wireless_proxy<'a>(
    conn: &'a Connection,
    path: &'a OwnedObjectPath,
) -> BackendResult<Proxy<'a>> {
    Ok(Proxy::new(
        conn,
        nm_consts::BUS_NAME,
        path.as_str(),
        nm_consts::WIFI_DEVICE_INTERFACE,
    )?)
}

fn ap_proxy<'a>(conn: &'a Connection, path: &'a OwnedObjectPath) -> BackendResult<Proxy<'a>> {
    Ok(Proxy::new(
        conn,
        nm_consts::BUS_NAME,
        path.as_str(),
        nm_consts::AP_INTERFACE,
    )?)
}

fn first_wifi_device(conn: &Connection, nm: &Proxy<'_>) -> BackendResult<OwnedObjectPath> {
    let devices: Vec<OwnedObjectPath> = nm.call("GetDevices", &())?;

    for path in devices {
        let device_type: u32 = {
            let device = device_proxy(conn, &path)?;
            device.get_property("DeviceType")?
        };
        if device_type == NM_DEVICE_TYPE_WIFI {
            return Ok(path);
        }
    }

    Err(BackendError::Unavailable("No Wi-Fi device found".to_string()))
}

fn active_access_point(conn: &Connection) -> BackendResult<OwnedObjectPath> {
    let nm = nm_proxy(conn)?;
    let wifi_device = first_wifi_device(conn, &nm)?;
    let wireless = wireless_proxy(conn, &wifi_device)?;
    let active_ap: OwnedObjectPath = wireless.get_property("ActiveAccessPoint")?;
    if active_ap.as_str() == "/" {
        return Err(BackendError::NotConnected);
    }
    Ok(active_ap)
}

/// Blocks until `LastScan` moves past `previous`, or gives up quietly.
fn wait_for_scan(wireless: &Proxy<'_>, previous: Option<i64>) {
    let Some(previous) = previous else {
        return;
    };
    for _ in 0..SCAN_POLL_ATTEMPTS {
        thread::sleep(SCAN_POLL_INTERVAL);
        match wireless.get_property::<i64>("LastScan") {
            Ok(last_scan) if last_scan != previous => return,
            Ok(_) => {}
            Err(_) => return,
        }
    }
    tracing::debug!("Scan did not finish in time, listing what is available");
}

fn read_access_point(conn: &Connection, path: &OwnedObjectPath) -> BackendResult<NetworkRecord> {
    let ap = ap_proxy(conn, path)?;
    let ssid_bytes: Vec<u8> = ap.get_property("Ssid")?;
    let frequency_mhz: u32 = ap.get_property("Frequency")?;
    let strength: u8 = ap.get_property("Strength")?;
    let bssid: String = ap.get_property("HwAddress")?;

    Ok(NetworkRecord::new(&decode_ssid(&ssid_bytes), frequency_mhz)
        .with_strength(strength)
        .with_bssid(&bssid))
}

/// Access points come and go between `GetAccessPoints` and the property
/// reads; one that vanished is skipped instead of failing the whole list.
fn read_each<P: std::fmt::Debug>(
    paths: &[P],
    read: impl Fn(&P) -> BackendResult<NetworkRecord>,
) -> Vec<NetworkRecord> {
    paths
        .iter()
        .filter_map(|path| match read(path) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(?path, "Skipping unreadable access point: {err}");
                None
            }
        })
        .collect()
}

/// The SSID is a grouping key, so distinct byte strings must stay distinct:
/// nothing is trimmed and invalid UTF-8 bytes are kept as `\xNN` escapes.
fn decode_ssid(bytes: &[u8]) -> String {
    let mut ssid = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        ssid.push_str(chunk.valid());
        for byte in chunk.invalid() {
            let _ = write!(ssid, "\\x{byte:02x}");
        }
    }
    ssid
}

/// "no" denies; "yes" and "auth" (polkit will prompt) grant. Older daemons
/// do not report the scan permission at all.
fn permission_verdict(permissions: &HashMap<String, String>) -> BackendResult<()> {
    match permissions
        .get(nm_consts::SCAN_PERMISSION)
        .map(String::as_str)
    {
        Some("no") => Err(BackendError::PermissionDenied),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;

    fn permissions(value: Option<&str>) -> HashMap<String, String> {
        value
            .map(|v| (nm_consts::SCAN_PERMISSION.to_string(), v.to_string()))
            .into_iter()
            .collect()
    }

    #[test]
    fn scan_permission_verdicts() {
        assert!(permission_verdict(&permissions(Some("yes"))).is_ok());
        assert!(permission_verdict(&permissions(Some("auth"))).is_ok());
        assert!(permission_verdict(&permissions(None)).is_ok());
        assert!(matches!(
            permission_verdict(&permissions(Some("no"))),
            Err(BackendError::PermissionDenied)
        ));
    }

    #[test]
    fn ssid_decoding() {
        assert_eq!(decode_ssid(b"Home"), "Home");
        assert_eq!(decode_ssid(b""), "");
        assert_eq!(decode_ssid(&[0x43, 0x61, 0x66, 0xc3, 0xa9]), "Café");
        assert_eq!(decode_ssid(&[0x4e, 0xff]), "N\\xff");
    }

    #[test]
    fn distinct_ssid_bytes_stay_distinct_networks() {
        let records = vec![
            NetworkRecord::new(&decode_ssid(b"Home"), 2437),
            NetworkRecord::new(&decode_ssid(b"Home "), 5180),
            NetworkRecord::new(&decode_ssid(&[0x4e, 0xff]), 2412),
            NetworkRecord::new(&decode_ssid(&[0x4e, 0xfe]), 5745),
        ];
        assert_eq!(records[1].ssid, "Home ");
        assert_ne!(records[2].ssid, records[3].ssid);
        assert!(filter::dual_band(&records).is_empty());
    }

    #[test]
    fn vanished_access_point_is_skipped() {
        let paths = ["/ap/1", "/ap/2", "/ap/3"];
        let networks = read_each(paths.as_slice(), |path| match *path {
            "/ap/2" => Err(BackendError::Unavailable("object removed".to_string())),
            other => Ok(NetworkRecord::new(other, 2412)),
        });
        let ssids: Vec<_> = networks.iter().map(|n| n.ssid.as_str()).collect();
        assert_eq!(ssids, vec!["/ap/1", "/ap/3"]);
    }
}
