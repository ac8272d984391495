//! Icon Drift - a floating decorative icon field
//!
//! Core modules:
//! - `field`: Deterministic layout simulation (placement, repulsion, frame advance)
//! - `engine`: Lifecycle facade the host drives (`start`/`frame`/`stop`)
//! - `tuning`: Data-driven behavior knobs
//! - `dom`: Browser host wiring (wasm only)

pub mod engine;
pub mod field;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use engine::{Engine, Placement, RunPhase, Viewport};
pub use tuning::Tuning;

/// Engine configuration constants
pub mod consts {
    /// Margin kept between any icon and the container edge (logical px)
    pub const EDGE_PADDING: f32 = 80.0;

    /// Pointer-to-icon distance below which flee behavior engages
    pub const REPEL_RADIUS: f32 = 150.0;
    /// Fraction of the remaining radius converted into displacement per frame
    pub const REPEL_STRENGTH: f32 = 0.5;
    /// Multiplier applied to the push when the first escape lands in a zone
    pub const ZONE_ESCAPE_BOOST: f32 = 2.0;
    /// Per-frame ease fraction back toward an icon's home position
    pub const RETURN_FACTOR: f32 = 0.02;

    /// Rejection-sampling budget for one placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;

    /// Viewport width (logical px) below which touch modality applies
    pub const TOUCH_BREAKPOINT: f32 = 768.0;

    /// Icon caps per modality
    pub const DESKTOP_MAX_ICONS: usize = 10;
    pub const TOUCH_MAX_ICONS: usize = 6;

    /// Cosmetic scale ranges per modality
    pub const DESKTOP_SCALE: (f32, f32) = (0.8, 1.2);
    pub const TOUCH_SCALE: (f32, f32) = (0.6, 0.9);

    /// Animation stagger drawn per icon (seconds)
    pub const PHASE_STAGGER: f32 = 2.0;

    /// Touch-mode bob cycle (seconds) and peak vertical offset (logical px)
    pub const BOB_PERIOD: f32 = 4.0;
    pub const BOB_AMPLITUDE: f32 = 8.0;
}
