use opc_types::{OpcError, ResultMap};

/// Compact single-line JSON object followed by a newline.
pub fn render_json(map: &ResultMap) -> Result<String, OpcError> {
    let mut out = serde_json::to_string(map)?;
    out.push('\n');
    Ok(out)
}
