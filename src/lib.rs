//! AuraFX compiles layered particle scenes into timed MythicMobs skill scripts.
//!
//! A [`CompileRequest`] carries the authored layers, mode toggles and an optional
//! interaction log. [`compile`] turns it into script text:
//!
//! - Replay the log into live positions, colors and recorded keyframes
//! - Order each layer (authored, chain or proximity)
//! - Synthesize static or animated frames
//! - Optionally collapse circle groups into rings and merge stacked points
//! - Emit one primitive line per drawn element, with `delay` directives between frames
//!
//! The compiler is pure; the optional `network` feature adds the banner fetch and the
//! fire-and-forget generation notification around it.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod compile;
pub(crate) mod emit;
pub(crate) mod notify;
pub(crate) mod optimize;
pub(crate) mod order;
pub(crate) mod replay;
pub(crate) mod scene;

pub use crate::foundation::color::{Rgb8, hsv_to_rgb, hue_hex, same_color};
pub use crate::foundation::core::{
    Frame, FrameElement, FrameMode, MAX_FRAMES, Placement, Point, Vec2, centroid,
    clamp_frame_count, format_utc_timestamp, now_utc_timestamp,
};
pub use crate::foundation::error::{AuraError, AuraResult};

pub use crate::scene::action::{ActionData, ActionKind, ActionRecord, PositionSample};
pub use crate::scene::model::{
    Element, ElementShape, GroupOrigin, Layer, Position, PrimitiveKind,
};
pub use crate::scene::modes::{
    ChainItem, LocalRotateSettings, ModeFlags, ModeSettings, MoveSettings, NO_DIRECTION,
    ProximitySettings, RainbowSettings, RiseSettings, RotateSettings,
};
pub use crate::scene::params::PrimitiveParams;

pub use crate::replay::replayer::{LiveAttributes, Replay, replay};

pub use crate::animation::frames::{FRAMES_PER_SECOND, FrameSpec, frame_count};
pub use crate::animation::synth::{SynthInput, Synthesizer, resolve_color};

pub use crate::order::chain::{ChainStep, chain_order};
pub use crate::order::plan::{Arrangement, OrderSource, OrderStep, arrange};
pub use crate::order::proximity::proximity_order;

pub use crate::optimize::compact::compact;
pub use crate::optimize::ring::{DrawItem, Drawn, RingGroup, collapse_rings};

pub use crate::emit::line::{LineSpec, render_line};
pub use crate::emit::params::{ParamList, ParamValue, alias};
pub use crate::emit::script::{ScriptHeader, ScriptWriter};

#[cfg(feature = "network")]
pub use crate::compile::compiler::compile_and_notify;
pub use crate::compile::compiler::{
    CompiledScript, ScriptContext, ScriptStats, compile, compile_or_comment,
};
pub use crate::compile::project::{Project, Session, compile_project};
pub use crate::compile::request::{CompileRequest, ScriptSettings};

pub use crate::notify::banner::{BANNER_SOURCE_ENV, BannerConfig, FALLBACK_BANNER};
#[cfg(feature = "network")]
pub use crate::notify::banner::fetch_banner;
pub use crate::notify::webhook::{EffectSummary, NotifyConfig, WEBHOOK_ENV, payload};
#[cfg(feature = "network")]
pub use crate::notify::webhook::{dispatch, send};
