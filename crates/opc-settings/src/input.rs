use opc_types::{InputMap, OpcError};

/// Build an [`InputMap`] from `key=value` entries.
///
/// Each entry must contain exactly one `=`. Entries are applied in order, so the last
/// occurrence of a key wins. Keys and values are kept as-is (an empty key or value is
/// accepted).
pub fn parse_inputs<I, S>(entries: I) -> Result<InputMap, OpcError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = InputMap::new();
    for entry in entries {
        let entry = entry.as_ref();
        let (key, value) = split_entry(entry)?;
        if let Some(previous) = map.insert(key, value) {
            tracing::warn!(
                key,
                previous = %previous,
                value,
                "duplicate input key; later value wins"
            );
        }
    }
    Ok(map)
}

fn split_entry(entry: &str) -> Result<(&str, &str), OpcError> {
    let mut parts = entry.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok((key, value)),
        _ => Err(OpcError::InvalidInputFormat(entry.to_string())),
    }
}
