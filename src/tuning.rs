//! Data-driven behavior knobs
//!
//! Defaults come from `consts`; hosts may override any subset via JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Behavior knobs for one engine instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Margin between icons and the container edge (logical px)
    pub edge_padding: f32,
    /// Pointer distance below which flee behavior engages
    pub repel_radius: f32,
    /// Fraction of the remaining radius converted into displacement per frame
    pub repel_strength: f32,
    /// Push multiplier when the first zone escape fails
    pub zone_escape_boost: f32,
    /// Per-frame ease fraction back toward home
    pub return_factor: f32,
    /// Rejection-sampling budget per placement
    pub placement_attempts: u32,
    /// Viewport width below which touch modality applies
    pub touch_breakpoint: f32,
    /// Touch-mode bob peak offset (logical px)
    pub bob_amplitude: f32,
    /// Touch-mode bob cycle (seconds)
    pub bob_period: f32,
    /// Pin icons at rest (hosts map prefers-reduced-motion here)
    pub reduced_motion: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            edge_padding: EDGE_PADDING,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            zone_escape_boost: ZONE_ESCAPE_BOOST,
            return_factor: RETURN_FACTOR,
            placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            touch_breakpoint: TOUCH_BREAKPOINT,
            bob_amplitude: BOB_AMPLITUDE,
            bob_period: BOB_PERIOD,
            reduced_motion: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.edge_padding, 80.0);
        assert_eq!(tuning.repel_radius, 150.0);
        assert_eq!(tuning.return_factor, 0.02);
        assert_eq!(tuning.placement_attempts, 50);
        assert!(!tuning.reduced_motion);
    }

    #[test]
    fn test_partial_json_override() {
        // Hosts override a subset; everything else keeps its default
        let tuning: Tuning =
            serde_json::from_str(r#"{"repel_radius": 200.0, "reduced_motion": true}"#).unwrap();
        assert_eq!(tuning.repel_radius, 200.0);
        assert!(tuning.reduced_motion);
        assert_eq!(tuning.edge_padding, 80.0);
    }
}
