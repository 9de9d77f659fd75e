//! Live stream embed resolution

use creatorhub_domain::{LiveStream, TwitchLive};

/// What the live block of a page shows while a stream is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveEmbed {
    /// Player iframe source.
    pub src: String,
    /// Channel page of a Twitch stream running alongside a YouTube one.
    pub twitch_channel_url: Option<String>,
}

/// Resolve the player for the current live status.
///
/// `parent_host` is the host the page is served from; the Twitch player
/// refuses to load without it. A YouTube stream without an id or a Twitch
/// stream without a channel yields no embed.
pub fn live_embed(live: &LiveStream, parent_host: &str) -> Option<LiveEmbed> {
    match live {
        LiveStream::Offline => None,
        LiveStream::Youtube { id, twitch_live, .. } if !id.is_empty() => Some(LiveEmbed {
            src: format!("https://www.youtube.com/embed/{id}?autoplay=1&mute=1"),
            twitch_channel_url: twitch_live
                .as_ref()
                .filter(|tw| !tw.twitch_channel_name.is_empty())
                .map(|tw| twitch_channel_url(&tw.twitch_channel_name)),
        }),
        LiveStream::Youtube { .. } => None,
        LiveStream::Twitch(tw) if !tw.twitch_channel_name.is_empty() => Some(LiveEmbed {
            src: format!(
                "https://player.twitch.tv/?channel={}&parent={}&autoplay=true&mute=1",
                tw.twitch_channel_name, parent_host
            ),
            twitch_channel_url: None,
        }),
        LiveStream::Twitch(_) => None,
    }
}

pub fn twitch_channel_url(channel: &str) -> String {
    format!("https://www.twitch.tv/{channel}")
}

/// Parse a preview override of the live status.
///
/// Accepted forms: `none`, `youtube:ID`, `twitch:CHANNEL`,
/// `both:ID:CHANNEL`. Anything else returns `None` and the fetched status is
/// kept.
pub fn parse_mock_live(spec: &str) -> Option<LiveStream> {
    let spec = spec.trim();
    if spec == "none" {
        return Some(LiveStream::Offline);
    }

    let mock_twitch = |channel: &str| TwitchLive {
        id: "mock".to_string(),
        title: "Mock TW".to_string(),
        twitch_channel_name: channel.to_string(),
    };
    let mock_youtube = |id: &str, twitch_live: Option<TwitchLive>| LiveStream::Youtube {
        id: id.to_string(),
        title: "Mock YT".to_string(),
        youtube_channel_id: None,
        twitch_live,
    };

    let mut parts = spec.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("youtube"), Some(id), None) => Some(mock_youtube(id, None)),
        (Some("twitch"), Some(channel), None) => Some(LiveStream::Twitch(mock_twitch(channel))),
        (Some("both"), Some(id), Some(channel)) => Some(mock_youtube(id, Some(mock_twitch(channel)))),
        _ => None,
    }
}
