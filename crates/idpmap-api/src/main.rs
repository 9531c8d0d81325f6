use std::env;
use std::path::Path;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idpmap_core::config::{LayeredConfig, DEFAULT_CONFIG_FILE};
use idpmap_core::load::{load_region_records, load_site_index, source_for};
use idpmap_core::scale::RadiusScale;
use idpmap_render::{shade_regions, SymbolRenderer};

use idpmap_api::router::create_router;
use idpmap_api::state::{AppState, RegionData, SiteData};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "idpmap_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = env::var("IDPMAP_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3001);

    let mut config = LayeredConfig::with_defaults();
    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        match config.clone().load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(loaded) => config = loaded,
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable {}", DEFAULT_CONFIG_FILE),
        }
    }
    let config = config.load_from_env();

    let scale = match config.radius_scale() {
        Ok(scale) => scale,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid radius bounds, falling back to defaults");
            RadiusScale::default()
        }
    };

    tracing::info!(
        port = port,
        sites_source = config.sites_source.value.as_deref().unwrap_or("(unset)"),
        regions_source = config.regions_source.value.as_deref().unwrap_or("(unset)"),
        "Starting idpmap API server"
    );

    let sites = load_sites(config.sites_source.value.as_deref()).await;
    let regions = load_regions(config.regions_source.value.as_deref()).await;

    let state = Arc::new(AppState::new(sites, regions, SymbolRenderer::new(scale)));

    let frontend_origin =
        env::var("IDPMAP_FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let cors = CorsLayer::new()
        .allow_origin(frontend_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", frontend_origin);

    axum::serve(listener, app).await.unwrap();
}

/// Load the site survey dataset. A missing source or a failed load keeps
/// the server running in the error-label state.
async fn load_sites(source_spec: Option<&str>) -> SiteData {
    let Some(spec) = source_spec else {
        tracing::warn!("No site dataset configured (set IDPMAP_SITES or sites_source in idpmap.toml)");
        return SiteData::Failed {
            message: "No site dataset configured".to_string(),
        };
    };

    let source = source_for(spec);
    match load_site_index(source.as_ref()).await {
        Ok(index) => {
            tracing::info!(
                sites = index.site_count(),
                observations = index.observation_count(),
                dates = index.timeline().len(),
                "Site dataset loaded"
            );
            SiteData::Ready(index)
        }
        Err(e) => {
            tracing::error!(error = %e, source = spec, "Failed to load site dataset");
            SiteData::Failed { message: e.to_string() }
        }
    }
}

/// Load the optional regional aggregate dataset.
async fn load_regions(source_spec: Option<&str>) -> RegionData {
    let Some(spec) = source_spec else {
        return RegionData::Unconfigured;
    };

    let source = source_for(spec);
    match load_region_records(source.as_ref()).await {
        Ok(records) => {
            tracing::info!(regions = records.len(), "Region dataset loaded");
            RegionData::Ready(shade_regions(&records))
        }
        Err(e) => {
            tracing::error!(error = %e, source = spec, "Failed to load region dataset");
            RegionData::Failed { message: e.to_string() }
        }
    }
}
