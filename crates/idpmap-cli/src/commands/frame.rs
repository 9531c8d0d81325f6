//! Frame command implementation

use anyhow::{anyhow, bail, Result};
use tabled::Tabled;

use idpmap_core::config::LayeredConfig;
use idpmap_core::models::DateStamp;
use idpmap_core::navigator::TimeNavigator;
use idpmap_render::SymbolRenderer;

use crate::cli::FrameArgs;
use crate::commands;
use crate::output::OutputWriter;
use crate::output_types::FrameOutput;

pub async fn execute(args: FrameArgs, output: &OutputWriter, mut config: LayeredConfig) -> Result<()> {
    let spec = commands::sites_spec(&mut config, args.source)?;
    let scale = config.radius_scale()?;
    let index = commands::load_index(&spec).await?;

    let position = match (args.position, args.date.as_deref()) {
        (Some(position), _) => TimeNavigator::for_timeline(index.timeline()).clamp(position),
        (None, Some(date)) => {
            let date = DateStamp::from(date);
            index.timeline().position_of(&date).ok_or_else(|| {
                anyhow!(
                    "'{}' is not one of the {} survey dates (see the timeline command)",
                    date,
                    index.timeline().len()
                )
            })?
        }
        (None, None) => 0,
    };

    let renderer = SymbolRenderer::new(scale);
    let Some(frame) = renderer.frame_at(&index, position) else {
        bail!("The dataset has no survey dates to render");
    };

    if output.is_json() {
        output.result(FrameOutput {
            position: frame.position,
            date: frame.date,
            count: frame.symbols.len(),
            symbols: frame.symbols,
        })?;
    } else {
        output.section("Frame");
        output.kv("Position", frame.position);
        output.kv("Date", &frame.date);
        output.kv("Symbols", frame.symbols.len());

        #[derive(Tabled)]
        struct SymbolRow {
            #[tabled(rename = "Site")]
            site_id: String,
            #[tabled(rename = "Name")]
            name: String,
            #[tabled(rename = "Region")]
            region: String,
            #[tabled(rename = "Population")]
            population: String,
            #[tabled(rename = "Radius (px)")]
            radius: String,
        }

        let rows: Vec<SymbolRow> = frame
            .symbols
            .iter()
            .map(|symbol| SymbolRow {
                site_id: symbol.site_id.to_string(),
                name: symbol.label.site_name.clone(),
                region: symbol.label.region.clone(),
                population: symbol.label.population.clone(),
                radius: format!("{:.1}", symbol.radius),
            })
            .collect();

        output.table(rows);
    }

    Ok(())
}
