//! Engine lifecycle facade
//!
//! Owns the field state, the pointer tracker, and the modality policy, and
//! exposes the explicit `start`/`frame`/`stop` contract a host drives. All
//! methods are synchronous; the host's frame callback supplies the cadence,
//! and the rendering layer reads `placements()` after each frame.

use glam::Vec2;
use serde::Serialize;

use crate::field::{
    CatalogItem, ContainerRect, ExclusionZone, FieldState, Icon, Modality, PointerState,
    PointerTracker, advance, build_pool,
};
use crate::tuning::Tuning;

/// Viewport dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Per-icon transform record consumed by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation: f32,
}

/// Engine lifecycle; `Stopped` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Uninitialized,
    Running,
    Stopped,
}

/// One icon field instance. State is private to the instance; nothing is
/// shared across instances and nothing outlives `stop()`.
pub struct Engine {
    catalog: Vec<CatalogItem>,
    tuning: Tuning,
    state: FieldState,
    pointer: PointerTracker,
    container: ContainerRect,
    phase: RunPhase,
}

impl Engine {
    pub fn new(
        catalog: Vec<CatalogItem>,
        zones: Vec<ExclusionZone>,
        tuning: Tuning,
        seed: u64,
    ) -> Self {
        Self {
            catalog,
            tuning,
            state: FieldState::new(seed, zones),
            pointer: PointerTracker::new(false),
            container: ContainerRect::from_viewport(0.0, 0.0),
            phase: RunPhase::Uninitialized,
        }
    }

    /// Begin running: derive the modality and build the first pool.
    ///
    /// `container` is the measured layout rect when available; a viewport-sized
    /// stand-in is used until the first resize reports a real one. Calling
    /// `start` on anything but a fresh instance is a no-op.
    pub fn start(&mut self, viewport: Viewport, container: Option<ContainerRect>, fine_pointer: bool) {
        if self.phase != RunPhase::Uninitialized {
            log::warn!("start ignored in phase {:?}", self.phase);
            return;
        }
        self.phase = RunPhase::Running;
        self.apply_environment(viewport, container, fine_pointer);
        log::info!("engine started (seed {})", self.state.rng_state.seed);
    }

    /// Resize or capability change: re-derive the modality and rebuild the
    /// pool against the new bounds. Safe to call on every raw resize event;
    /// debouncing is the host's choice.
    pub fn environment_changed(
        &mut self,
        viewport: Viewport,
        container: Option<ContainerRect>,
        fine_pointer: bool,
    ) {
        if self.phase != RunPhase::Running {
            return;
        }
        self.apply_environment(viewport, container, fine_pointer);
    }

    fn apply_environment(
        &mut self,
        viewport: Viewport,
        container: Option<ContainerRect>,
        fine_pointer: bool,
    ) {
        self.container = container
            .unwrap_or_else(|| ContainerRect::from_viewport(viewport.width, viewport.height));
        let modality = Modality::derive(viewport.width, fine_pointer, self.tuning.touch_breakpoint);
        self.state.modality = modality;
        self.state.bounds = self.container.bounds();
        self.pointer.set_enabled(modality.pointer_driven());
        self.rebuild_pool();
    }

    fn rebuild_pool(&mut self) {
        self.state.rng_state.next_generation();
        let mut rng = self.state.rng_state.to_rng();
        self.state.icons = build_pool(
            &self.catalog,
            self.state.modality,
            self.state.bounds,
            &self.state.zones,
            &self.tuning,
            &mut rng,
        );
        log::info!(
            "pool rebuilt: {} icons, {:?}, {:.0}x{:.0}",
            self.state.icons.len(),
            self.state.modality,
            self.state.bounds.width,
            self.state.bounds.height,
        );
    }

    /// Raw pointer move in viewport coordinates, with the container rect as
    /// measured by the host at event time
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32, rect: ContainerRect) {
        if self.phase != RunPhase::Running {
            return;
        }
        self.pointer
            .pointer_moved(Vec2::new(client_x, client_y), rect);
    }

    /// Pointer left the container or the window
    pub fn pointer_left(&mut self) {
        if self.phase != RunPhase::Running {
            return;
        }
        self.pointer.pointer_left();
    }

    /// Advance one frame; `dt` is seconds since the previous frame
    pub fn frame(&mut self, dt: f32) {
        if self.phase != RunPhase::Running {
            return;
        }
        advance(&mut self.state, self.pointer.current(), &self.tuning, dt);
    }

    /// Stop for good. Idempotent; `frame` and all event inputs become no-ops.
    /// A stopped engine cannot be restarted; create a new instance instead.
    pub fn stop(&mut self) {
        if self.phase == RunPhase::Stopped {
            return;
        }
        self.phase = RunPhase::Stopped;
        self.pointer.pointer_left();
        log::info!("engine stopped");
    }

    /// Per-icon transforms for the rendering layer; borrows, no allocation
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.state.icons.iter().map(|icon| Placement {
            id: icon.id,
            x: icon.pos.x,
            y: icon.pos.y,
            scale: icon.scale,
            rotation: icon.rotation,
        })
    }

    /// Live icons, in pool order. Hosts use this after a rebuild to (re)create
    /// their visual nodes and look up catalog assignments.
    pub fn icons(&self) -> &[Icon] {
        &self.state.icons
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    pub fn modality(&self) -> Modality {
        self.state.modality
    }

    pub fn run_phase(&self) -> RunPhase {
        self.phase
    }
}
