//! Static site renderer
//!
//! Turns the site config, `data.json` and the stream history into HTML with
//! [`maud`]. Output layout, for a default locale `ru`:
//!
//! ```text
//! index.html                 en/index.html
//! links/index.html           en/links/index.html
//! calendar/2024-05.html      en/calendar/2024-05.html
//! dev.html                   (development mode only)
//! ```
//!
//! Calendar pages cover every month from the earliest recorded stream
//! through the month after the current one. Rendering itself is pure; only
//! [`SiteRenderer::write_to`] touches the filesystem.

mod calendar;
mod components;
mod dev;
mod home;
mod layout;
mod links;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use creatorhub_core::{annotate_month, months_between, AppState, StreamSchedule, Translations};
use creatorhub_domain::constants::DEFAULT_EMBED_PARENT;
use creatorhub_domain::{
    CalendarViewState, LiveStream, Locale, Result, SiteConfig, SiteData, SiteSettings, StreamHistory,
    Theme,
};
use maud::Markup;
use tracing::{debug, info};
use url::Url;

use self::calendar::{month_page, month_page_path, MonthRange};
use self::home::{home_page, HomeInputs};
use self::layout::PageContext;
use crate::errors::InfraError;

/// One rendered HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub html: String,
}

fn rendered(ctx: &PageContext<'_>, markup: Markup) -> RenderedPage {
    RenderedPage { path: PathBuf::from(ctx.output_path()), html: markup.into_string() }
}

/// Host passed to the Twitch player: the configured one, or the host of
/// `base_url` while `embed_parent` is left at its default.
fn resolve_embed_parent(site: &SiteSettings) -> String {
    if site.embed_parent != DEFAULT_EMBED_PARENT {
        return site.embed_parent.clone();
    }
    site.base_url
        .as_deref()
        .and_then(|base| Url::parse(base).ok())
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| site.embed_parent.clone())
}

pub struct SiteRenderer {
    config: SiteConfig,
    translations: Translations,
    data: SiteData,
    history: StreamHistory,
    today: NaiveDate,
    theme: Theme,
}

impl SiteRenderer {
    pub fn new(mut config: SiteConfig, data: SiteData, history: StreamHistory) -> Self {
        let translations = Translations::with_overrides(config.site.default_locale, &config.strings);
        config.site.embed_parent = resolve_embed_parent(&config.site);
        let theme = config.site.default_theme;
        Self { config, translations, data, history, today: Local::now().date_naive(), theme }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the fetched live status, for previewing the live layouts.
    pub fn with_live_stream(mut self, live: LiveStream) -> Self {
        self.data.live_stream = live;
        self
    }

    fn state(&self, locale: Locale) -> AppState {
        AppState::new(locale, self.theme, CalendarViewState::containing(self.today))
    }

    fn schedule(&self) -> StreamSchedule {
        StreamSchedule::new(self.config.site.stream_weekday)
    }

    /// Months with a calendar page.
    fn month_range(&self) -> MonthRange {
        let current = CalendarViewState::containing(self.today);
        let earliest = self
            .history
            .events
            .iter()
            .filter_map(|event| NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").ok())
            .min()
            .map(CalendarViewState::containing)
            .filter(|month| *month < current)
            .unwrap_or(current);

        MonthRange { first: earliest, last: current.next() }
    }

    /// Render every page in memory.
    pub fn pages(&self) -> Result<Vec<RenderedPage>> {
        let range = self.month_range();
        let schedule = self.schedule();
        let events = &self.history.events;
        let mut pages = Vec::new();

        for locale in Locale::ALL {
            let state = self.state(locale);
            let current = state.calendar;

            let home_calendar =
                annotate_month(current.year, current.month as i32, events, self.today, schedule);
            let inputs = HomeInputs {
                config: &self.config,
                data: &self.data,
                calendar: &home_calendar,
                months: range,
            };
            let ctx = PageContext::new(state, &self.translations, "index.html");
            pages.push(rendered(&ctx, home_page(&ctx, &inputs)));

            let ctx = PageContext::new(state, &self.translations, "links/index.html");
            pages.push(rendered(&ctx, links::links_page(&ctx, &self.config, &self.data)));

            for month in months_between(range.first, range.last) {
                let view = annotate_month(month.year, month.month as i32, events, self.today, schedule);
                let path = month_page_path(month);
                let ctx = PageContext::new(state, &self.translations, &path);
                pages.push(rendered(&ctx, month_page(&ctx, &view, range)));
            }
        }

        if self.config.sections.development_mode {
            let state = self.state(self.translations.default_locale());
            let ctx = PageContext::new(state, &self.translations, "dev.html");
            pages.push(rendered(&ctx, dev::dev_page(&ctx, &self.data)?));
        }

        debug!(pages = pages.len(), first_month = %range.first.slug(), last_month = %range.last.slug(), "site.rendered");
        Ok(pages)
    }

    /// Render and write every page under `out_dir`, returning the written
    /// paths.
    pub async fn write_to(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let pages = self.pages()?;
        let mut written = Vec::with_capacity(pages.len());

        for page in pages {
            let target = out_dir.join(&page.path);
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent).await.map_err(InfraError::from)?;
            }
            tokio::fs::write(&target, page.html).await.map_err(InfraError::from)?;
            written.push(target);
        }

        info!(out_dir = %out_dir.display(), pages = written.len(), "site.written");
        Ok(written)
    }
}
