//! Site command implementation

use anyhow::{bail, Result};
use tabled::Tabled;

use idpmap_core::config::LayeredConfig;
use idpmap_core::models::{DateStamp, SiteId};
use idpmap_render::format_count;

use crate::cli::SiteArgs;
use crate::commands;
use crate::output::OutputWriter;
use crate::output_types::{ResolvedObservation, SiteOutput};

pub async fn execute(args: SiteArgs, output: &OutputWriter, mut config: LayeredConfig) -> Result<()> {
    let spec = commands::sites_spec(&mut config, args.source)?;
    let scale = config.radius_scale()?;
    let index = commands::load_index(&spec).await?;

    let site_id = SiteId::from(args.site_id.as_str());
    let Some(series) = index.get(&site_id) else {
        bail!("Site '{}' is not in the dataset", site_id);
    };

    let resolved = args.date.as_deref().map(|date| {
        let date = DateStamp::from(date);
        match series.as_of(&date) {
            Some(observation) => {
                let open = observation.open_on(&date);
                let magnitude = observation.magnitude();
                let displayed = open && magnitude.is_some();

                ResolvedObservation {
                    survey_date: Some(observation.survey_date.clone()),
                    population: observation.population,
                    open,
                    displayed,
                    radius: displayed.then(|| scale.radius(magnitude, index.max_population())),
                    query_date: date,
                }
            }
            None => ResolvedObservation {
                query_date: date,
                survey_date: None,
                population: None,
                open: false,
                displayed: false,
                radius: None,
            },
        }
    });

    if output.is_json() {
        output.result(SiteOutput {
            site_id: site_id.to_string(),
            observations: series.observations().to_vec(),
            resolved,
        })?;
    } else {
        output.section(format!("Site {}", site_id));

        #[derive(Tabled)]
        struct ObservationRow {
            #[tabled(rename = "Survey Date")]
            survey_date: String,
            #[tabled(rename = "Round")]
            round: String,
            #[tabled(rename = "Population")]
            population: String,
            #[tabled(rename = "Households")]
            households: String,
            #[tabled(rename = "Close Date")]
            close_date: String,
        }

        let rows: Vec<ObservationRow> = series
            .observations()
            .iter()
            .map(|o| ObservationRow {
                survey_date: o.survey_date.to_string(),
                round: o.survey_round.clone().unwrap_or_default(),
                population: o.population.map(format_count).unwrap_or_else(|| "-".to_string()),
                households: o.households.map(format_count).unwrap_or_else(|| "-".to_string()),
                close_date: o
                    .close_date
                    .as_ref()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect();

        output.table(rows);

        if let Some(resolved) = &resolved {
            output.section(format!("Resolution for {}", resolved.query_date));

            match &resolved.survey_date {
                Some(survey_date) => {
                    output.kv("Survey Date", survey_date);
                    output.kv(
                        "Population",
                        resolved
                            .population
                            .map(format_count)
                            .unwrap_or_else(|| "-".to_string()),
                    );
                    output.kv("Open", resolved.open);
                    output.kv("Displayed", resolved.displayed);
                    if let Some(radius) = resolved.radius {
                        output.kv("Radius", format!("{:.1} px", radius));
                    }
                }
                None => output.info("No observation at or before this date"),
            }
        }
    }

    Ok(())
}
