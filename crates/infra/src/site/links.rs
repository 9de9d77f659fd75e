//! Links page

use creatorhub_core::{
    link_follower_count, linked_follower_total, swipe_target, visible_links, SwipeDirection,
};
use creatorhub_domain::{format_count, LinkConfig, SiteConfig, SiteData};
use maud::{html, Markup};

use super::components::{live_player, skin_viewer, video_carousel};
use super::layout::{page, PageContext};

fn count_or_loading(ctx: &PageContext<'_>, count: Option<u64>) -> String {
    count.map(format_count).unwrap_or_else(|| ctx.t("loading").to_string())
}

/// One link card. Social cards carry both swipe targets so the browser
/// side only has to read them.
fn link_card(ctx: &PageContext<'_>, link: &LinkConfig, data: &SiteData) -> Markup {
    let swipe = link
        .is_social
        .then(|| (swipe_target(link, SwipeDirection::Left, data), swipe_target(link, SwipeDirection::Right, data)));
    let class = if link.is_social { "card link-card swipe-target" } else { "card link-card" };

    html! {
        a class=(class) href=(link.url) target="_blank" rel="noopener"
            data-link-id=(link.label_key)
            data-platform-id=[link.platform_id.as_deref()]
            data-swipe-left=[swipe.as_ref().map(|(left, _)| left.as_str())]
            data-swipe-right=[swipe.as_ref().map(|(_, right)| right.as_str())]
        {
            @if let Some(icon_url) = &link.custom_icon_url {
                img class="link-icon" src=(ctx.asset(icon_url)) alt="";
            } @else {
                span class="material-symbols-outlined link-icon" { (link.icon) }
            }
            span class="link-label" { (ctx.t(&link.label_key)) }
            @if link.is_social && link.show_subscriber_count {
                span class="follower-count-display" {
                    (count_or_loading(ctx, link_follower_count(link, &data.follower_counts)))
                }
            }
        }
    }
}

fn profile(ctx: &PageContext<'_>, config: &SiteConfig, data: &SiteData) -> Markup {
    let name = ctx.t(&config.profile.name_key);
    let total = linked_follower_total(&config.links, &data.follower_counts);

    html! {
        section class="profile" {
            img class="avatar" src=(ctx.asset(&config.profile.avatar)) alt=(name);
            h1 { (name) }
            p class="description" { (ctx.t(&config.profile.description_key)) }
            p class="total-followers" {
                (ctx.t("totalFollowers"))
                span class="follower-count-display" { (count_or_loading(ctx, total)) }
            }
        }
    }
}

pub(crate) fn links_page(ctx: &PageContext<'_>, config: &SiteConfig, data: &SiteData) -> Markup {
    let sections = config.sections;
    let support_url = config.profile.support_url.as_deref().filter(|url| !url.is_empty());
    let player = if sections.live_stream {
        live_player(
            ctx,
            &data.live_stream,
            &config.site.embed_parent,
            (ctx.t("twitchAlsoLive"), ctx.t("watchOnTwitch")),
        )
    } else {
        None
    };

    page(
        ctx,
        ctx.t(&config.profile.name_key),
        html! {
            @if sections.profile {
                (profile(ctx, config, data))
            }
            @if let Some(player) = player {
                section class="live" id="live" { (player) }
            }
            @if sections.links {
                nav class="links" {
                    @for link in visible_links(&config.links) {
                        (link_card(ctx, link, data))
                    }
                }
            }
            @if let Some(url) = support_url.filter(|_| sections.support_button) {
                a class="btn support-btn" href=(url) target="_blank" rel="noopener" { (ctx.t("supportButton")) }
            }
            @if sections.youtube_videos && !data.youtube_videos.is_empty() {
                section class="videos" {
                    h2 { (ctx.t("recentVideosTitle")) }
                    (video_carousel(&data.youtube_videos))
                }
            }
            @if sections.minecraft_skin {
                (skin_viewer(ctx, &config.profile.minecraft_skin_url, ctx.t("minecraftTitle"), ctx.t("downloadSkin")))
            }
            a class="back-link" href=(ctx.href("index.html")) { (ctx.t("backToMainText")) }
        },
    )
}
