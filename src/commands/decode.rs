use anyhow::{Context, Result};
use tracing::debug;

/// Decode one packet line and print it to stdout
pub fn handle_decode(line: &str, json: bool) -> Result<()> {
    let packet =
        aprs_decode::parse(line).with_context(|| format!("Failed to decode packet {line:?}"))?;
    debug!(
        source = %packet.source,
        identifier = %packet.data_type_identifier,
        "decoded packet"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&packet)?);
    } else {
        println!("{packet:#?}");
    }

    Ok(())
}
