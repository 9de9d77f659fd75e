//! Home page

use creatorhub_core::{live_embed, total_followers, MonthView};
use creatorhub_domain::{format_count, HomeContent, HomeLinks, SiteConfig, SiteData, TimelineEntry};
use maud::{html, Markup};

use super::calendar::{month_widget, MonthRange};
use super::components::{live_player, skin_viewer, video_carousel};
use super::layout::{page, PageContext};

pub(crate) struct HomeInputs<'a> {
    pub config: &'a SiteConfig,
    pub data: &'a SiteData,
    pub calendar: &'a MonthView,
    pub months: MonthRange,
}

fn hero(ctx: &PageContext<'_>, name: &str, content: &HomeContent, links: &HomeLinks, data: &SiteData) -> Markup {
    let ui = &content.ui;
    let links_href = ctx.local_link(links.links_page_url_or_default());

    html! {
        section class="hero" {
            h1 { (name) }
            @if !content.texts.hero_tagline.is_empty() {
                p class="tagline" { (content.texts.hero_tagline) }
            }
            p class="hero-followers" {
                (ctx.label_or(&ui.followers_label, "totalFollowers"))
                strong { (format_count(total_followers(&data.follower_counts))) }
            }
            div class="cta" {
                a class="btn primary go-links" href=(links_href) { (ctx.t("homeMyLinks")) }
                @if !links.youtube_subscribe_url.is_empty() {
                    a class="btn" href=(links.youtube_subscribe_url) target="_blank" rel="noopener" {
                        (ctx.t("homeSubscribeYoutube"))
                    }
                }
                @if !links.telegram_url.is_empty() {
                    a class="btn" href=(links.telegram_url) target="_blank" rel="noopener" { "Telegram" }
                }
                @if !links.support_url.is_empty() {
                    a class="btn" href=(links.support_url) target="_blank" rel="noopener" { (ctx.t("homeSupport")) }
                }
            }
            @if !ui.nav_title.is_empty() {
                div class="nav-card card" {
                    h2 { (ui.nav_title) }
                    @if !ui.nav_desc.is_empty() {
                        p { (ui.nav_desc) }
                    }
                    a class="btn" href=(links_href) { (ctx.label_or(&ui.nav_cta, "homeMyLinks")) }
                }
            }
        }
    }
}

/// Player while live; otherwise the schedule note and the current month.
fn live_block(ctx: &PageContext<'_>, inputs: &HomeInputs<'_>, content: &HomeContent) -> Markup {
    let parent = &inputs.config.site.embed_parent;
    let notice = (
        ctx.label_or(&content.ui.twitch_also, "twitchAlsoLive"),
        ctx.label_or(&content.ui.twitch_cta, "watchOnTwitch"),
    );

    html! {
        section class="live" id="live" {
            @if let Some(player) = live_player(ctx, &inputs.data.live_stream, parent, notice) {
                (player)
            } @else {
                div class="live-empty card" {
                    h3 { (ctx.t("liveEmptyTitle")) }
                    p { (ctx.t("liveEmptySub")) }
                }
                (month_widget(ctx, inputs.calendar, inputs.months))
            }
        }
    }
}

fn timeline(title: &str, entries: &[TimelineEntry]) -> Markup {
    html! {
        section class="timeline-list" {
            h2 { (title) }
            @for (index, entry) in entries.iter().enumerate() {
                details class="timeline card" open[index == 0] {
                    summary { (entry.year) " — " (entry.title) }
                    @for paragraph in entry.body.split("\n\n").filter(|p| !p.trim().is_empty()) {
                        p { (paragraph.trim()) }
                    }
                }
            }
        }
    }
}

pub(crate) fn home_page(ctx: &PageContext<'_>, inputs: &HomeInputs<'_>) -> Markup {
    let config = inputs.config;
    let content = config.home_content(ctx.locale());
    let texts = &content.texts;
    let name = ctx.t(&config.profile.name_key);
    let sections = config.sections;
    let live = sections.live_stream && live_embed(&inputs.data.live_stream, &config.site.embed_parent).is_some();
    let title = if live { format!("{name} · LIVE") } else { name.to_string() };

    page(
        ctx,
        &title,
        html! {
            (hero(ctx, name, &content, &config.home.links, inputs.data))
            @if sections.live_stream {
                (live_block(ctx, inputs, &content))
            }
            @if !texts.about_intro.is_empty() {
                p class="about" { (texts.about_intro) }
            }
            @if !texts.timeline.is_empty() {
                (timeline(ctx.label_or(&content.ui.timeline_title, "homeTimeline"), &texts.timeline))
            }
            @if !texts.about_outro.is_empty() {
                p class="about" { (texts.about_outro) }
            }
            @if sections.youtube_videos && !inputs.data.youtube_videos.is_empty() {
                section class="videos" {
                    h2 { (ctx.label_or(&content.ui.videos_title, "recentVideosTitle")) }
                    (video_carousel(&inputs.data.youtube_videos))
                }
            }
            @if sections.minecraft_skin {
                (skin_viewer(
                    ctx,
                    &config.profile.minecraft_skin_url,
                    ctx.label_or(&content.ui.skin_title, "minecraftTitle"),
                    ctx.label_or(&content.ui.skin_download, "downloadSkin"),
                ))
            }
        },
    )
}
