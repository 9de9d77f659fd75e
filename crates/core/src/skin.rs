//! Minecraft skin viewer controls
//!
//! The 3D viewer itself runs in the browser; the site only renders the
//! control strip and the canvas the viewer attaches to.

use creatorhub_domain::impl_keyword_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinAnimation {
    #[default]
    Idle,
    Walk,
    Run,
    Rotate,
    Stop,
}

impl_keyword_conversions!(SkinAnimation {
    Idle => "idle",
    Walk => "walk",
    Run => "run",
    Rotate => "rotate",
    Stop => "stop",
});

impl SkinAnimation {
    /// Control strip order.
    pub const ALL: [SkinAnimation; 5] = [Self::Idle, Self::Walk, Self::Run, Self::Rotate, Self::Stop];

    /// Material Symbols icon of the control button.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Idle => "accessibility",
            Self::Walk => "directions_walk",
            Self::Run => "directions_run",
            Self::Rotate => "autorenew",
            Self::Stop => "stop_circle",
        }
    }
}
