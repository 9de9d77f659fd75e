//! Page shell and relative-path helpers

use creatorhub_core::{AppState, Translations};
use creatorhub_domain::{Locale, Theme};
use maud::{html, Markup, DOCTYPE};

/// Where a page sits in the output tree and the state it renders.
///
/// Pages of the default locale live at the root; every other locale gets a
/// `<code>/` subtree with the same layout. All links between pages are
/// relative so the site works from any base path and from `file://`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageContext<'a> {
    pub state: AppState,
    pub translations: &'a Translations,
    /// Path inside the locale tree, e.g. `links/index.html`.
    pub page: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn new(state: AppState, translations: &'a Translations, page: &'a str) -> Self {
        Self { state, translations, page }
    }

    pub fn locale(&self) -> Locale {
        self.state.locale
    }

    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.translations.get(self.state.locale, key)
    }

    /// `fallback` unless `configured` has text.
    pub fn label_or<'k>(&self, configured: &'k str, fallback: &'k str) -> &'k str
    where
        'a: 'k,
    {
        if configured.trim().is_empty() {
            self.t(fallback)
        } else {
            configured
        }
    }

    fn locale_prefix(&self, locale: Locale) -> String {
        if locale == self.translations.default_locale() {
            String::new()
        } else {
            format!("{}/", locale.as_str())
        }
    }

    /// Path of this page relative to the output directory.
    pub fn output_path(&self) -> String {
        format!("{}{}", self.locale_prefix(self.locale()), self.page)
    }

    /// Relative prefix from this page back to the output root.
    pub fn root(&self) -> String {
        "../".repeat(self.output_path().matches('/').count())
    }

    /// Relative link to `page` in the tree of `locale`.
    pub fn href_in(&self, locale: Locale, page: &str) -> String {
        format!("{}{}{}", self.root(), self.locale_prefix(locale), page)
    }

    /// Relative link to `page` in this page's locale.
    pub fn href(&self, page: &str) -> String {
        self.href_in(self.locale(), page)
    }

    /// Resolve a configured asset URL against the output root.
    /// Absolute URLs, root-relative paths and fragments pass through.
    pub fn asset(&self, url: &str) -> String {
        if is_external(url) {
            url.to_string()
        } else {
            format!("{}{}", self.root(), url.trim_start_matches("./"))
        }
    }

    /// Like [`asset`](Self::asset), but relative URLs point into this page's
    /// locale tree.
    pub fn local_link(&self, url: &str) -> String {
        if is_external(url) {
            url.to_string()
        } else {
            self.href(url.trim_start_matches("./"))
        }
    }
}

fn is_external(url: &str) -> bool {
    const PASS_THROUGH: [&str; 4] = ["/", "#", "data:", "mailto:"];
    url.contains("://") || PASS_THROUGH.iter().any(|p| url.starts_with(p))
}

fn theme_toggle_label(theme: Theme) -> &'static str {
    match theme.toggled() {
        Theme::Light => "themeLight",
        Theme::Dark => "themeDark",
    }
}

/// Full HTML document around `content`.
pub(crate) fn page(ctx: &PageContext<'_>, title: &str, content: Markup) -> Markup {
    let locale = ctx.locale();
    let theme = ctx.state.theme;
    let other = locale.toggled();

    html! {
        (DOCTYPE)
        html lang=(locale.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href={ (ctx.root()) "assets/style.css" };
                link rel="alternate" hreflang=(other.as_str()) href=(ctx.href_in(other, ctx.page));
            }
            body class=(theme.body_class()) data-theme=(theme.as_str()) {
                header class="topbar" {
                    a class="lang-toggle" href=(ctx.href_in(other, ctx.page)) hreflang=(other.as_str()) {
                        (other.as_str().to_uppercase())
                    }
                    button type="button" class="theme-toggle" data-theme-toggle title=(ctx.t(theme_toggle_label(theme))) {
                        span class="material-symbols-outlined" { (theme.toggle_icon()) }
                    }
                }
                main { (content) }
            }
        }
    }
}
