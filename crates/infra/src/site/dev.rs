//! Developer page: raw dump of `data.json`

use creatorhub_domain::{Result, SiteData};
use maud::{html, Markup};

use super::layout::{page, PageContext};
use crate::errors::InfraError;

pub(crate) fn dev_page(ctx: &PageContext<'_>, data: &SiteData) -> Result<Markup> {
    let data_json = serde_json::to_string_pretty(data).map_err(InfraError::from)?;
    let debug_json = serde_json::to_string_pretty(&data.debug_info).map_err(InfraError::from)?;
    let last_updated = data
        .last_updated
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| ctx.t("notAvailable").to_string());

    Ok(page(
        ctx,
        ctx.t("devPageTitle"),
        html! {
            section class="dev" {
                h1 { (ctx.t("devPageTitle")) }
                p {
                    strong { (ctx.t("devLastUpdatedLabel")) }
                    " "
                    span id="last-updated" { (last_updated) }
                }
                h2 { (ctx.t("devDataJsonContentLabel")) }
                pre { code { (data_json) } }
                h2 { (ctx.t("devDebugInfoContentLabel")) }
                pre { code { (debug_json) } }
                a class="back-link" href=(ctx.href("index.html")) { (ctx.t("backToMainText")) }
            }
        },
    ))
}
