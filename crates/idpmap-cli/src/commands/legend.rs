//! Legend command implementation

use anyhow::Result;
use tabled::Tabled;

use idpmap_core::config::LayeredConfig;
use idpmap_render::{format_count, legend_bands, symbol_legend};

use crate::cli::LegendArgs;
use crate::commands;
use crate::output::OutputWriter;
use crate::output_types::LegendOutput;

pub async fn execute(args: LegendArgs, output: &OutputWriter, mut config: LayeredConfig) -> Result<()> {
    let scale = config.radius_scale()?;

    let max_population = match args.max_population {
        Some(max) => max,
        None => {
            let spec = commands::sites_spec(&mut config, args.source)?;
            commands::load_index(&spec).await?.max_population()
        }
    };

    let legend = LegendOutput {
        max_population,
        symbols: symbol_legend(&scale, max_population),
        bands: legend_bands(),
    };

    if output.is_json() {
        output.result(legend)?;
    } else {
        output.section("Symbol Legend");
        output.kv("Scaled Against", format_count(max_population));

        #[derive(Tabled)]
        struct SwatchRow {
            #[tabled(rename = "Population")]
            population: String,
            #[tabled(rename = "Radius (px)")]
            radius: String,
        }

        let swatches: Vec<SwatchRow> = legend
            .symbols
            .iter()
            .map(|swatch| SwatchRow {
                population: swatch.label.clone(),
                radius: format!("{:.1}", swatch.radius),
            })
            .collect();

        output.table(swatches);

        output.section("Region Bands");

        #[derive(Tabled)]
        struct BandRow {
            #[tabled(rename = "Sites")]
            label: String,
            #[tabled(rename = "Fill")]
            color: String,
        }

        let bands: Vec<BandRow> = legend
            .bands
            .iter()
            .map(|band| BandRow {
                label: band.label.clone(),
                color: band.color.clone(),
            })
            .collect();

        output.table(bands);
    }

    Ok(())
}
