//! Blocks shared by the home and links pages

use creatorhub_core::{live_embed, SkinAnimation};
use creatorhub_domain::{LiveStream, YoutubeVideo};
use maud::{html, Markup};

use super::layout::PageContext;

/// Live player, or nothing when no stream is on.
///
/// `twitch_notice` is the text of the banner shown when a Twitch stream runs
/// alongside the embedded YouTube one.
pub(crate) fn live_player(
    ctx: &PageContext<'_>,
    live: &LiveStream,
    parent_host: &str,
    twitch_notice: (&str, &str),
) -> Option<Markup> {
    let embed = live_embed(live, parent_host)?;
    let (notice, cta) = twitch_notice;

    Some(html! {
        div class="live-frame" {
            iframe src=(embed.src) title=(ctx.t("liveStreamTitle")) allow="autoplay; fullscreen" allowfullscreen {}
        }
        @if let Some(url) = &embed.twitch_channel_url {
            div class="twitch-notice card" {
                span { (notice) }
                " "
                a href=(url) target="_blank" rel="noopener" { (cta) }
            }
        }
    })
}

/// Horizontal strip of video cards.
pub(crate) fn video_carousel(videos: &[YoutubeVideo]) -> Markup {
    html! {
        div class="carousel" {
            @for video in videos {
                a class="video card" href=(video.watch_url()) target="_blank" rel="noopener" {
                    @if let Some(thumb) = &video.thumbnail_url {
                        img src=(thumb) alt=(video.title) loading="lazy";
                    }
                    div class="p-3" {
                        p { (video.title) }
                    }
                }
            }
        }
    }
}

/// Animation controls, the canvas the browser-side viewer draws into and a
/// download link for the texture.
pub(crate) fn skin_viewer(ctx: &PageContext<'_>, skin_url: &str, title: &str, download: &str) -> Markup {
    let skin_href = ctx.asset(skin_url);

    html! {
        section class="skin card" id="skin" {
            h2 { (title) }
            div class="skin-controls" {
                @for animation in SkinAnimation::ALL {
                    button type="button"
                        class=(if animation == SkinAnimation::default() { "mini-btn active" } else { "mini-btn" })
                        data-anim=(animation.as_str())
                        title=(animation.as_str())
                    {
                        span class="material-symbols-outlined" { (animation.icon()) }
                    }
                }
            }
            canvas id="skin-canvas" width="300" height="400" data-skin-url=(skin_href) {}
            a class="btn" href=(skin_href) download="minecraft_skin.png" { (download) }
        }
    }
}

#[cfg(test)]
mod tests {
    use creatorhub_core::{parse_mock_live, AppState, Translations};
    use creatorhub_domain::{CalendarViewState, Locale, Theme};

    use super::*;

    fn with_ctx(f: impl FnOnce(&PageContext<'_>)) {
        let translations = Translations::builtin(Locale::En);
        let state = AppState::new(Locale::En, Theme::Dark, CalendarViewState::new(2024, 0));
        f(&PageContext::new(state, &translations, "links/index.html"));
    }

    #[test]
    fn youtube_player_with_twitch_banner() {
        with_ctx(|ctx| {
            let live = parse_mock_live("both:vid42:streamer").unwrap();
            let html = live_player(ctx, &live, "example.org", ("Also on Twitch", "Watch")).unwrap().into_string();
            assert!(html.contains("https://www.youtube.com/embed/vid42?autoplay=1&amp;mute=1"));
            assert!(html.contains(r#"href="https://www.twitch.tv/streamer""#));
            assert!(html.contains("Also on Twitch"));
        });
    }

    #[test]
    fn offline_renders_nothing() {
        with_ctx(|ctx| {
            assert!(live_player(ctx, &LiveStream::Offline, "h", ("", "")).is_none());
        });
    }

    #[test]
    fn videos_link_to_watch_pages() {
        let videos = vec![YoutubeVideo {
            id: "abc".into(),
            title: "Fish & chips".into(),
            thumbnail_url: Some("https://i.ytimg.com/vi/abc/hq.jpg".into()),
        }];
        let html = video_carousel(&videos).into_string();
        assert!(html.contains(r#"href="https://www.youtube.com/watch?v=abc""#));
        assert!(html.contains("Fish &amp; chips"));
    }

    #[test]
    fn skin_controls_start_idle() {
        with_ctx(|ctx| {
            let html = skin_viewer(ctx, "./assets/skin.png", "Skin", "Download").into_string();
            assert!(html.contains(r#"class="mini-btn active" data-anim="idle""#));
            assert!(html.contains(r#"data-anim="stop""#));
            assert!(html.contains(r#"data-skin-url="../assets/skin.png""#));
            assert!(html.contains(r#"download="minecraft_skin.png""#));
        });
    }
}
