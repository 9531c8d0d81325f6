//! Inspect command implementation

use anyhow::Result;
use tabled::Tabled;

use idpmap_core::config::LayeredConfig;
use idpmap_render::format_count;

use crate::cli::InspectArgs;
use crate::commands;
use crate::output::OutputWriter;
use crate::output_types::{InspectOutput, SiteSummary};

pub async fn execute(
    args: InspectArgs,
    output: &OutputWriter,
    mut config: LayeredConfig,
) -> Result<()> {
    let spec = commands::sites_spec(&mut config, args.source)?;
    let index = commands::load_index(&spec).await?;

    let sites: Option<Vec<SiteSummary>> = args.detailed.then(|| {
        index
            .sites()
            .map(|(id, series)| SiteSummary {
                id: id.to_string(),
                name: series.last().and_then(|o| o.site_name.clone()),
                region: series.last().and_then(|o| o.region.clone()),
                observations: series.len(),
                first_date: series.first().map(|o| o.survey_date.clone()),
                last_date: series.last().map(|o| o.survey_date.clone()),
                latest_population: series.last().and_then(|o| o.population),
            })
            .collect()
    });

    if output.is_json() {
        output.result(InspectOutput {
            source: spec,
            site_count: index.site_count(),
            observation_count: index.observation_count(),
            date_count: index.timeline().len(),
            first_date: index.timeline().first().cloned(),
            last_date: index.timeline().last().cloned(),
            max_population: index.max_population(),
            bounds: index.bounds().copied(),
            center: index.bounds().map(|b| b.center()),
            built_at: index.built_at(),
            sites,
        })?;
    } else {
        output.section("Dataset Summary");
        output.kv("Source", &spec);
        output.kv("Sites", index.site_count());
        output.kv("Observations", index.observation_count());
        output.kv("Survey Dates", index.timeline().len());

        if let (Some(first), Some(last)) = (index.timeline().first(), index.timeline().last()) {
            output.kv("Date Range", format!("{} to {}", first, last));
        }

        output.kv("Max Population", format_count(index.max_population()));

        if let Some(bounds) = index.bounds() {
            output.kv(
                "Bounds",
                format!(
                    "[{}, {}] to [{}, {}]",
                    bounds.west, bounds.south, bounds.east, bounds.north
                ),
            );
            let center = bounds.center();
            output.kv("Center", format!("[{}, {}]", center.longitude, center.latitude));
        }

        output.kv("Built At", index.built_at().format("%Y-%m-%d %H:%M:%S UTC"));

        if let Some(summaries) = sites {
            output.section("Sites");

            #[derive(Tabled)]
            struct SiteRow {
                #[tabled(rename = "ID")]
                id: String,
                #[tabled(rename = "Name")]
                name: String,
                #[tabled(rename = "Region")]
                region: String,
                #[tabled(rename = "Surveys")]
                observations: usize,
                #[tabled(rename = "First")]
                first_date: String,
                #[tabled(rename = "Last")]
                last_date: String,
                #[tabled(rename = "Latest Pop.")]
                latest_population: String,
            }

            let rows: Vec<SiteRow> = summaries
                .into_iter()
                .map(|s| SiteRow {
                    id: s.id,
                    name: s.name.unwrap_or_default(),
                    region: s.region.unwrap_or_default(),
                    observations: s.observations,
                    first_date: s.first_date.map(|d| d.to_string()).unwrap_or_default(),
                    last_date: s.last_date.map(|d| d.to_string()).unwrap_or_default(),
                    latest_population: s
                        .latest_population
                        .map(format_count)
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();

            output.table(rows);
        }
    }

    Ok(())
}
