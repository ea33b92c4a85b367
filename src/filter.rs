//! Band and dual-band selection over a scanned network list.
//!
//! Every function here is pure: it takes the full list and returns a fresh
//! subset. Views are never derived from a previous view, so filters do not
//! compound.

use crate::models::{NetworkRecord, ViewMode};
use std::collections::{BTreeSet, HashMap};

/// A frequency range in MHz. The lower bound is always inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub low_mhz: u32,
    pub high_mhz: u32,
    pub high_inclusive: bool,
}

impl Band {
    pub const TWO_POINT_FOUR: Band = Band {
        low_mhz: 2200,
        high_mhz: 2650,
        high_inclusive: false,
    };

    pub const FIVE: Band = Band {
        low_mhz: 5000,
        high_mhz: 6000,
        high_inclusive: true,
    };

    pub fn contains(&self, frequency_mhz: u32) -> bool {
        if frequency_mhz < self.low_mhz {
            return false;
        }
        if self.high_inclusive {
            frequency_mhz <= self.high_mhz
        } else {
            frequency_mhz < self.high_mhz
        }
    }
}

pub fn by_band(records: &[NetworkRecord], band: Band) -> Vec<NetworkRecord> {
    records
        .iter()
        .filter(|record| band.contains(record.frequency_mhz))
        .cloned()
        .collect()
}

/// 5 GHz records in ascending frequency order. Ties keep input order.
pub fn sort_by_frequency(records: &[NetworkRecord]) -> Vec<NetworkRecord> {
    let mut sorted = by_band(records, Band::FIVE);
    sorted.sort_by_key(|record| record.frequency_mhz);
    sorted
}

/// Distinct frequencies observed per SSID. Hidden networks group under "".
pub fn group_by_ssid(records: &[NetworkRecord]) -> HashMap<&str, BTreeSet<u32>> {
    let mut groups: HashMap<&str, BTreeSet<u32>> = HashMap::new();
    for record in records {
        groups
            .entry(record.ssid.as_str())
            .or_default()
            .insert(record.frequency_mhz);
    }
    groups
}

pub fn dual_band(records: &[NetworkRecord]) -> Vec<NetworkRecord> {
    by_frequency_count(records, |count| count > 1)
}

pub fn non_dual_band(records: &[NetworkRecord]) -> Vec<NetworkRecord> {
    by_frequency_count(records, |count| count == 1)
}

pub fn reset(records: &[NetworkRecord]) -> Vec<NetworkRecord> {
    records.to_vec()
}

/// Derives the view for `mode` from the full, unfiltered list.
pub fn apply(mode: ViewMode, records: &[NetworkRecord]) -> Vec<NetworkRecord> {
    match mode {
        ViewMode::All => reset(records),
        ViewMode::Band24 => by_band(records, Band::TWO_POINT_FOUR),
        ViewMode::Band5 => by_band(records, Band::FIVE),
        ViewMode::Band5Sorted => sort_by_frequency(records),
        ViewMode::DualBand => dual_band(records),
        ViewMode::NonDualBand => non_dual_band(records),
    }
}

fn by_frequency_count(
    records: &[NetworkRecord],
    keep: impl Fn(usize) -> bool,
) -> Vec<NetworkRecord> {
    let groups = group_by_ssid(records);
    records
        .iter()
        .filter(|record| {
            groups
                .get(record.ssid.as_str())
                .is_some_and(|frequencies| keep(frequencies.len()))
        })
        .cloned()
        .collect()
}
