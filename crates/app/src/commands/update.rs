//! `creatorhub update` - refresh `data.json` from the platform APIs

use std::time::Instant;

use chrono::Utc;
use creatorhub_core::UpdateReport;
use creatorhub_domain::Result;
use tracing::{error, warn};

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

pub async fn run_update(context: &AppContext) -> Result<UpdateReport> {
    let start = Instant::now();
    let result = context.update_service().run(Utc::now()).await;
    log_command_execution("update", start.elapsed(), result.is_ok());

    match &result {
        Ok(report) if !report.is_clean() => {
            warn!(failed = ?report.errors, "Some platforms could not be refreshed");
        }
        Ok(_) => {}
        Err(err) => error!(error = %err, error_type = error_label(err), "Update failed"),
    }
    result
}
