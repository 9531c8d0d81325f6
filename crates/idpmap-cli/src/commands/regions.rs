//! Regions command implementation

use anyhow::Result;
use tabled::Tabled;

use idpmap_core::config::LayeredConfig;
use idpmap_render::{format_count, shade_regions};

use crate::cli::RegionsArgs;
use crate::commands;
use crate::output::OutputWriter;
use crate::output_types::{RegionSummary, RegionsOutput};

pub async fn execute(
    args: RegionsArgs,
    output: &OutputWriter,
    mut config: LayeredConfig,
) -> Result<()> {
    let spec = commands::regions_spec(&mut config, args.source)?;
    let records = commands::load_regions(&spec).await?;
    let shades = shade_regions(&records);

    let regions: Vec<RegionSummary> = shades
        .iter()
        .map(|shade| RegionSummary {
            name: shade.name.clone(),
            count: shade.count,
            fill_color: shade.style.fill_color.clone(),
            info: shade.info_text(),
        })
        .collect();

    if output.is_json() {
        output.result(RegionsOutput {
            source: spec,
            count: regions.len(),
            regions,
        })?;
    } else {
        if regions.is_empty() {
            output.info("The dataset has no usable region features");
            return Ok(());
        }

        output.section("Region Shading");

        #[derive(Tabled)]
        struct RegionRow {
            #[tabled(rename = "Region")]
            name: String,
            #[tabled(rename = "Sites")]
            count: String,
            #[tabled(rename = "Fill")]
            fill_color: String,
        }

        let rows: Vec<RegionRow> = regions
            .iter()
            .map(|region| RegionRow {
                name: region.name.clone(),
                count: format_count(region.count),
                fill_color: region.fill_color.clone(),
            })
            .collect();

        output.table(rows);
    }

    Ok(())
}
