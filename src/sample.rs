use std::fmt;
use chrono::NaiveDateTime;
use crate::schema::NormalizedFields;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One timestamped observation of the wireless interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    timestamp: String,
    fields: NormalizedFields,
}

impl Sample {
    /// Stamp `fields` with `now` (local wall-clock time, truncated to seconds).
    pub fn build(fields: NormalizedFields, now: NaiveDateTime) -> Self {
        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            fields,
        }
    }

    #[cfg(test)]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[cfg(test)]
    pub fn fields(&self) -> &NormalizedFields {
        &self.fields
    }
}

/// Renders an optional value, leaving absent values blank.
struct Opt<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Opt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => Ok(()),
        }
    }
}

/// Rates always carry a decimal point, so 390 Mbps reads `390.0`.
struct Rate<'a>(&'a Option<f64>);

impl fmt::Display for Rate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(rate) => write!(f, "{:?}", rate),
            None => Ok(()),
        }
    }
}

/// The log line, without its trailing newline.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.fields;
        write!(
            f,
            "{} | SSID={} | Signal={}% | RX={} Mbps | TX={} Mbps | Ch={} | State={} | Radio={} | BSSID={}",
            self.timestamp,
            Opt(&s.ssid),
            Opt(&s.signal_percent),
            Rate(&s.rx_mbps),
            Rate(&s.tx_mbps),
            Opt(&s.channel),
            Opt(&s.state),
            Opt(&s.radio_type),
            Opt(&s.bssid),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_milli_opt(h, m, s, 750)
            .unwrap()
    }

    fn home_net() -> NormalizedFields {
        NormalizedFields {
            state: Some("connected".into()),
            ssid: Some("HomeNet".into()),
            bssid: Some("AA:BB:CC:DD:EE:FF".into()),
            signal_percent: Some(91),
            rx_mbps: Some(390.0),
            tx_mbps: Some(180.2),
            channel: Some(44),
            radio_type: Some("802.11ac".into()),
        }
    }

    #[test]
    fn timestamp_is_truncated_to_seconds() {
        let sample = Sample::build(NormalizedFields::default(), at(14, 30, 5));
        assert_eq!(sample.timestamp(), "2024-01-15T14:30:05");
    }

    #[test]
    fn formats_full_sample() {
        let sample = Sample::build(home_net(), at(14, 30, 5));
        assert_eq!(
            sample.to_string(),
            "2024-01-15T14:30:05 | SSID=HomeNet | Signal=91% | RX=390.0 Mbps | TX=180.2 Mbps \
             | Ch=44 | State=connected | Radio=802.11ac | BSSID=AA:BB:CC:DD:EE:FF"
        );
    }

    #[test]
    fn absent_fields_render_blank() {
        let sample = Sample::build(NormalizedFields::default(), at(9, 0, 0));
        assert_eq!(
            sample.to_string(),
            "2024-01-15T09:00:00 | SSID= | Signal=% | RX= Mbps | TX= Mbps | Ch= | State= | Radio= | BSSID="
        );
    }

    #[test]
    fn zero_values_are_rendered() {
        let fields = NormalizedFields {
            signal_percent: Some(0),
            rx_mbps: Some(0.0),
            channel: Some(0),
            ..Default::default()
        };
        let line = Sample::build(fields, at(9, 0, 0)).to_string();
        assert!(line.contains("| Signal=0% |"));
        assert!(line.contains("| RX=0.0 Mbps |"));
        assert!(line.contains("| Ch=0 |"));
    }

    #[test]
    fn formatting_is_stable() {
        let a = Sample::build(home_net(), at(14, 30, 5));
        let b = Sample::build(home_net(), at(14, 30, 5));
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn fields_can_be_recovered_from_line() {
        let line = Sample::build(home_net(), at(14, 30, 5)).to_string();
        let segments: Vec<&str> = line.split(" | ").collect();
        assert_eq!(segments.len(), 9);
        assert_eq!(segments[0], "2024-01-15T14:30:05");
        assert_eq!(segments[1].strip_prefix("SSID="), Some("HomeNet"));
        assert_eq!(segments[2], "Signal=91%");
        assert_eq!(segments[8].strip_prefix("BSSID="), Some("AA:BB:CC:DD:EE:FF"));
    }
}
