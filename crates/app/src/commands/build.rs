//! `creatorhub build` - render the static site

use std::path::PathBuf;
use std::time::Instant;

use creatorhub_core::{parse_mock_live, SiteDataStore, StreamHistoryStore};
use creatorhub_domain::{Result, StreamHistory, Theme};
use creatorhub_infra::SiteRenderer;
use tracing::{error, info, warn};

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Flags of the `build` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Output directory; defaults to `site.output_dir`.
    pub out_dir: Option<PathBuf>,
    /// Preview override of the live status, e.g. `both:VIDEO_ID:channel`.
    pub mock_live: Option<String>,
    pub theme: Option<Theme>,
}

pub async fn run_build(context: &AppContext, options: &BuildOptions) -> Result<Vec<PathBuf>> {
    let start = Instant::now();
    let result = build_site(context, options).await;
    log_command_execution("build", start.elapsed(), result.is_ok());

    if let Err(err) = &result {
        error!(error = %err, error_type = error_label(err), "Build failed");
    }
    result
}

async fn build_site(context: &AppContext, options: &BuildOptions) -> Result<Vec<PathBuf>> {
    let data = context.data_store.load().await?;
    let history = context.history_store.load().await.unwrap_or_else(|err| {
        warn!(error = %err, "Stream history unreadable, rendering calendars without markers");
        StreamHistory::empty()
    });

    let mut renderer = SiteRenderer::new(context.config.clone(), data, history);
    if let Some(theme) = options.theme {
        renderer = renderer.with_theme(theme);
    }
    if let Some(spec) = &options.mock_live {
        match parse_mock_live(spec) {
            Some(live) => {
                info!(mock_live = %spec, "Rendering with mocked live status");
                renderer = renderer.with_live_stream(live);
            }
            None => warn!(mock_live = %spec, "Ignoring unrecognised --mock-live value"),
        }
    }

    let out_dir = options.out_dir.clone().unwrap_or_else(|| PathBuf::from(&context.config.site.output_dir));
    renderer.write_to(&out_dir).await
}
