//! Deterministic layout module
//!
//! All placement and motion logic lives here. This module must be pure and
//! deterministic:
//! - Seeded RNG only
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies

pub mod placement;
pub mod pointer;
pub mod pool;
pub mod repulsion;
pub mod state;
pub mod tick;
pub mod zone;

pub use placement::scatter_point;
pub use pointer::{PointerState, PointerTracker};
pub use pool::build_pool;
pub use repulsion::step;
pub use state::{CatalogItem, FieldState, Icon, Modality, RngState};
pub use tick::{advance, bob_offset};
pub use zone::{ContainerBounds, ContainerRect, ExclusionZone, clamp_to_padded, in_any_zone};
