use std::collections::HashMap;

/// Parse colon-delimited `Label: value` text into a label -> value map.
///
/// Only the first colon on a line separates the label, so values such as
/// MAC addresses or times keep their own colons. Lines without a colon are
/// skipped and a repeated label keeps its last value.
pub fn extract(text: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for line in text.lines() {
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    fields
}
