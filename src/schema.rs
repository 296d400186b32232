use std::collections::HashMap;
use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref PERCENT_REGEX: Regex = Regex::new(r"^\s*([0-9]+)\s*%\s*$").unwrap();
}

const MAX_PERCENT: u8 = 100;

/// Logical fields of a sample, independent of how the utility labels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    State,
    Ssid,
    Bssid,
    Signal,
    RxRate,
    TxRate,
    Channel,
    RadioType,
}

/// Maps each logical field to the label a status utility prints for it.
#[derive(Debug)]
pub struct FieldSchema {
    labels: &'static [(Field, &'static str)],
}

/// Labels printed by `netsh wlan show interfaces`.
pub const NETSH_SCHEMA: FieldSchema = FieldSchema {
    labels: &[
        (Field::State, "State"),
        (Field::Ssid, "SSID"),
        (Field::Bssid, "BSSID"),
        (Field::Signal, "Signal"),
        (Field::RxRate, "Receive rate (Mbps)"),
        (Field::TxRate, "Transmit rate (Mbps)"),
        (Field::Channel, "Channel"),
        (Field::RadioType, "Radio type"),
    ],
};

impl FieldSchema {
    #[cfg(test)]
    pub const fn new(labels: &'static [(Field, &'static str)]) -> Self {
        Self { labels }
    }

    /// Label for `field`, if this schema carries it.
    pub fn label(&self, field: Field) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, label)| *label)
    }

    fn lookup<'a>(&self, fields: &'a HashMap<String, String>, field: Field) -> Option<&'a str> {
        fields.get(self.label(field)?).map(String::as_str)
    }
}

/// Typed values for one observation. `None` means the field couldn't be
/// determined this cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedFields {
    pub state: Option<String>,
    pub ssid: Option<String>,
    pub bssid: Option<String>,
    pub signal_percent: Option<u8>,
    pub rx_mbps: Option<f64>,
    pub tx_mbps: Option<f64>,
    pub channel: Option<i32>,
    pub radio_type: Option<String>,
}

/// Coerce the raw key-value map into typed fields. Values that don't parse
/// become `None`; this never fails.
pub fn normalize(fields: &HashMap<String, String>, schema: &FieldSchema) -> NormalizedFields {
    let text = |field| schema.lookup(fields, field).map(str::to_string);
    let raw = |field| schema.lookup(fields, field).unwrap_or("");

    NormalizedFields {
        state: text(Field::State),
        ssid: text(Field::Ssid),
        bssid: text(Field::Bssid),
        signal_percent: parse_percent(raw(Field::Signal)),
        rx_mbps: parse_rate(raw(Field::RxRate)),
        tx_mbps: parse_rate(raw(Field::TxRate)),
        channel: parse_channel(raw(Field::Channel)),
        radio_type: text(Field::RadioType),
    }
}

/// `"87%"` -> 87. Anything outside `<digits>%` or above 100 is `None`.
pub fn parse_percent(value: &str) -> Option<u8> {
    let caps = PERCENT_REGEX.captures(value)?;
    let percent: u8 = caps[1].parse().ok()?;
    (percent <= MAX_PERCENT).then_some(percent)
}

pub fn parse_rate(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

pub fn parse_channel(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}
