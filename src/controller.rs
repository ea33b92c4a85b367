use crate::advisory::{self, Advisory};
use crate::backend::BackendResult;
use crate::backend::sample::SampleBackend;
use crate::filter;
use crate::models::{ConnectionStatus, NetworkRecord, RecordSource, ViewMode};

/// State behind the screen: the full scan, the current view of it and the
/// connection status. Views are always derived from `records`, never from
/// the previous view.
#[derive(Debug, Default)]
pub struct ScreenController {
    records: Vec<NetworkRecord>,
    source: RecordSource,
    mode: ViewMode,
    view: Vec<NetworkRecord>,
    status: ConnectionStatus,
}

impl ScreenController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the backing list. The selected filter stays and is
    /// re-applied, so a choice made while a scan was running is kept.
    pub fn load_records(&mut self, records: Vec<NetworkRecord>, source: RecordSource) {
        self.records = records;
        self.source = source;
        self.select(self.mode);
    }

    pub fn select(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.view = filter::apply(mode, &self.records);
        tracing::debug!(?mode, shown = self.view.len(), "View updated");
    }

    pub fn apply_ssid(&mut self, result: BackendResult<String>) {
        match result {
            Ok(ssid) => {
                tracing::info!(%ssid, "Connected network");
                self.status.ssid = Some(ssid);
            }
            Err(err) => tracing::warn!("Cannot get current SSID: {err}"),
        }
    }

    pub fn apply_frequency(&mut self, result: BackendResult<u32>) {
        match result {
            Ok(frequency_mhz) => {
                tracing::info!(frequency_mhz, "Connected frequency");
                self.status.frequency_mhz = Some(frequency_mhz);
            }
            Err(err) => tracing::warn!("Cannot get current frequency: {err}"),
        }
    }

    /// Loads a scan result. On failure the list is left as it was unless a
    /// fallback source is given.
    pub fn apply_scan(
        &mut self,
        result: BackendResult<Vec<NetworkRecord>>,
        source: RecordSource,
        fallback: Option<&SampleBackend>,
    ) {
        match (result, fallback) {
            (Ok(records), _) => {
                tracing::info!(count = records.len(), ?source, "Loaded Wi-Fi list");
                self.load_records(records, source);
            }
            (Err(err), Some(sample)) => {
                tracing::warn!("Cannot get Wi-Fi list: {err}. Falling back to sample data.");
                self.load_records(sample.networks(), RecordSource::Sample);
            }
            (Err(err), None) => tracing::error!("Cannot get Wi-Fi list: {err}"),
        }
    }

    pub fn advisory(&self) -> Advisory {
        advisory::assess(&self.status)
    }

    pub fn records(&self) -> &[NetworkRecord] {
        &self.records
    }

    pub fn source(&self) -> RecordSource {
        self.source
    }

    pub fn view(&self) -> &[NetworkRecord] {
        &self.view
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }
}
