//! Timeline command implementation

use anyhow::Result;
use tabled::Tabled;

use idpmap_core::config::LayeredConfig;
use idpmap_render::format_count;

use crate::cli::TimelineArgs;
use crate::commands;
use crate::output::OutputWriter;
use crate::output_types::{TimelineOutput, TimelineRow};

pub async fn execute(
    args: TimelineArgs,
    output: &OutputWriter,
    mut config: LayeredConfig,
) -> Result<()> {
    let spec = commands::sites_spec(&mut config, args.source)?;
    let index = commands::load_index(&spec).await?;

    // The slider sweep: resolve every site at every position with the
    // same filters the renderer applies.
    let positions: Vec<TimelineRow> = index
        .timeline()
        .iter()
        .enumerate()
        .map(|(position, date)| {
            let mut active_sites = 0usize;
            let mut displayed_population = 0.0f64;

            for (_, series) in index.sites() {
                let Some(observation) = series.as_of(date) else {
                    continue;
                };
                if !observation.open_on(date) {
                    continue;
                }
                let Some(magnitude) = observation.magnitude() else {
                    continue;
                };

                active_sites += 1;
                displayed_population += magnitude;
            }

            TimelineRow {
                position,
                date: date.clone(),
                active_sites,
                displayed_population,
            }
        })
        .collect();

    if output.is_json() {
        output.result(TimelineOutput {
            source: spec,
            positions,
        })?;
    } else {
        if positions.is_empty() {
            output.info("The dataset has no survey dates");
            return Ok(());
        }

        output.section("Timeline");

        #[derive(Tabled)]
        struct PositionRow {
            #[tabled(rename = "Position")]
            position: usize,
            #[tabled(rename = "Date")]
            date: String,
            #[tabled(rename = "Active Sites")]
            active_sites: usize,
            #[tabled(rename = "Displayed Population")]
            displayed_population: String,
        }

        let rows: Vec<PositionRow> = positions
            .iter()
            .map(|p| PositionRow {
                position: p.position,
                date: p.date.to_string(),
                active_sites: p.active_sites,
                displayed_population: format_count(p.displayed_population),
            })
            .collect();

        output.table(rows);
    }

    Ok(())
}
