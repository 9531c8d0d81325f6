//! Config command implementation

use anyhow::Result;
use tabled::Tabled;

use idpmap_core::config::LayeredConfig;

use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};

pub fn execute(output: &OutputWriter, config: LayeredConfig) -> Result<()> {
    let mut values: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();

    // Sort by key for consistent output
    values.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        output.result(ConfigOutput { values })?;
    } else {
        output.section("Configuration Values");

        #[derive(Tabled)]
        struct ConfigRow {
            #[tabled(rename = "Key")]
            key: String,
            #[tabled(rename = "Value")]
            value: String,
            #[tabled(rename = "Source")]
            source: String,
        }

        let rows: Vec<ConfigRow> = values
            .into_iter()
            .map(|entry| ConfigRow {
                key: entry.key,
                value: entry.value,
                source: entry.source,
            })
            .collect();

        output.table(rows);

        output.section("Configuration Precedence");
        output.info("CLI arguments > Environment variables > Config file > Defaults");
    }

    Ok(())
}
