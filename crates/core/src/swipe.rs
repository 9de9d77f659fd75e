//! Swipe gesture recognition for link cards

use creatorhub_domain::constants::{PLATFORM_YOUTUBE, SWIPE_FEEDBACK_PX, SWIPE_THRESHOLD_RATIO};
use creatorhub_domain::{LinkConfig, SiteData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Visual state of a card while it is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeFeedback {
    Idle,
    Left,
    Right,
}

impl SwipeFeedback {
    /// Class toggled on the card element.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Left => Some("swiping-left"),
            Self::Right => Some("swiping-right"),
        }
    }
}

/// One horizontal drag, from press to release. Nothing survives between
/// gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start_x: f64,
    current_x: f64,
}

impl SwipeTracker {
    pub fn start(x: f64) -> Self {
        Self { start_x: x, current_x: x }
    }

    pub fn move_to(&mut self, x: f64) -> SwipeFeedback {
        self.current_x = x;
        self.feedback()
    }

    pub fn delta(&self) -> f64 {
        self.current_x - self.start_x
    }

    pub fn feedback(&self) -> SwipeFeedback {
        let dx = self.delta();
        if dx > SWIPE_FEEDBACK_PX {
            SwipeFeedback::Right
        } else if dx < -SWIPE_FEEDBACK_PX {
            SwipeFeedback::Left
        } else {
            SwipeFeedback::Idle
        }
    }

    /// Release the card. A swipe is recognized only when the horizontal
    /// displacement exceeds a quarter of the card width.
    pub fn finish(self, card_width: f64) -> Option<SwipeDirection> {
        let dx = self.delta();
        if dx.abs() > card_width * SWIPE_THRESHOLD_RATIO {
            Some(if dx > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left })
        } else {
            None
        }
    }
}

/// URL opened when `link` is swiped in `direction`.
///
/// Right opens the subscribe URL when configured. Left on the YouTube card
/// opens the live stream, else the latest upload; every other case opens the
/// link itself.
pub fn swipe_target(link: &LinkConfig, direction: SwipeDirection, data: &SiteData) -> String {
    match direction {
        SwipeDirection::Right => link.subscribe_url.clone().unwrap_or_else(|| link.url.clone()),
        SwipeDirection::Left if link.platform_id.as_deref() == Some(PLATFORM_YOUTUBE) => {
            if let Some(id) = data.live_stream.youtube_video_id() {
                format!("https://www.youtube.com/watch?v={id}")
            } else if let Some(video) = data.latest_video() {
                video.watch_url()
            } else {
                link.url.clone()
            }
        }
        SwipeDirection::Left => link.url.clone(),
    }
}
