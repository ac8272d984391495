//! Pointer tracking
//!
//! Keeps the freshest container-relative pointer position, or `Inactive` when
//! the pointer is outside the container or absent. Touch modality disables
//! tracking entirely: without a continuous hover signal, flee-on-hover has no
//! defined meaning.

use glam::Vec2;

use super::zone::ContainerRect;

/// Latest pointer signal as read by the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerState {
    /// Pointer position relative to the container origin
    Active(Vec2),
    /// Pointer absent, outside the container, or tracking disabled
    Inactive,
}

/// Last-write-wins pointer state owned by one engine instance
#[derive(Debug, Clone)]
pub struct PointerTracker {
    state: PointerState,
    enabled: bool,
}

impl PointerTracker {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: PointerState::Inactive,
            enabled,
        }
    }

    /// Toggle on modality change; disabling drops any held position
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.state = PointerState::Inactive;
        }
    }

    /// Record a raw pointer move in viewport coordinates
    pub fn pointer_moved(&mut self, client: Vec2, rect: ContainerRect) {
        if !self.enabled {
            return;
        }
        self.state = if rect.contains(client) {
            PointerState::Active(rect.to_local(client))
        } else {
            PointerState::Inactive
        };
    }

    /// Pointer left the container or the window
    pub fn pointer_left(&mut self) {
        self.state = PointerState::Inactive;
    }

    /// Freshest state, read once at the start of each frame
    pub fn current(&self) -> PointerState {
        self.state
    }
}
