//! Per-frame advance
//!
//! One pass over the pool per frame. Desktop commits the repulsion step for
//! every icon; touch ignores the pointer entirely and bobs each icon around
//! its home as a pure function of elapsed time and per-icon phase.

use std::f32::consts::TAU;

use glam::Vec2;

use super::pointer::PointerState;
use super::repulsion;
use super::state::{FieldState, Modality};
use super::zone::clamp_to_padded;
use crate::tuning::Tuning;

/// Advance every icon by one frame. `dt` is seconds since the previous frame.
pub fn advance(state: &mut FieldState, pointer: PointerState, tuning: &Tuning, dt: f32) {
    state.elapsed += dt;

    if tuning.reduced_motion {
        for icon in &mut state.icons {
            icon.pos = icon.home;
        }
        return;
    }

    match state.modality {
        Modality::Desktop => {
            for i in 0..state.icons.len() {
                let next = repulsion::step(
                    &state.icons[i],
                    pointer,
                    state.bounds,
                    &state.zones,
                    tuning,
                );
                state.icons[i].pos = next;
            }
        }
        Modality::Touch => {
            let elapsed = state.elapsed;
            for icon in &mut state.icons {
                let lift = bob_offset(elapsed, icon.phase_offset, tuning);
                icon.pos = clamp_to_padded(
                    icon.home + Vec2::new(0.0, lift),
                    state.bounds,
                    tuning.edge_padding,
                );
            }
        }
    }
}

/// Vertical bob displacement for touch mode; pure in `(elapsed, phase_offset)`
pub fn bob_offset(elapsed: f32, phase_offset: f32, tuning: &Tuning) -> f32 {
    (TAU * (elapsed + phase_offset) / tuning.bob_period).sin() * tuning.bob_amplitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::state::Icon;
    use crate::field::zone::{ContainerBounds, ExclusionZone};

    fn state_with_icons(modality: Modality, icons: Vec<Icon>) -> FieldState {
        let mut state = FieldState::new(1, Vec::new());
        state.modality = modality;
        state.bounds = ContainerBounds::new(800.0, 600.0);
        state.icons = icons;
        state
    }

    fn icon(home: Vec2, phase_offset: f32) -> Icon {
        Icon {
            id: 0,
            catalog_index: 0,
            home,
            pos: home,
            scale: 1.0,
            rotation: 0.0,
            phase_offset,
        }
    }

    #[test]
    fn test_desktop_commits_repulsion_step() {
        let tuning = Tuning::default();
        let mut state = state_with_icons(
            Modality::Desktop,
            vec![icon(Vec2::new(300.0, 300.0), 0.0)],
        );

        advance(
            &mut state,
            PointerState::Active(Vec2::new(300.0, 350.0)),
            &tuning,
            1.0 / 60.0,
        );
        // Pushed straight up, away from the pointer
        assert!(state.icons[0].pos.y < 300.0);
        assert!((state.icons[0].pos.x - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_touch_ignores_pointer() {
        let tuning = Tuning::default();
        let home = Vec2::new(300.0, 300.0);
        let mut with_pointer = state_with_icons(Modality::Touch, vec![icon(home, 0.5)]);
        let mut without = state_with_icons(Modality::Touch, vec![icon(home, 0.5)]);

        advance(
            &mut with_pointer,
            PointerState::Active(Vec2::new(300.0, 310.0)),
            &tuning,
            0.2,
        );
        advance(&mut without, PointerState::Inactive, &tuning, 0.2);
        assert_eq!(with_pointer.icons[0].pos, without.icons[0].pos);
    }

    #[test]
    fn test_touch_bob_is_pure_in_time_and_phase() {
        let tuning = Tuning::default();
        assert_eq!(bob_offset(1.0, 0.5, &tuning), bob_offset(1.0, 0.5, &tuning));
        // One full period later the offset repeats
        let a = bob_offset(0.3, 0.0, &tuning);
        let b = bob_offset(0.3 + tuning.bob_period, 0.0, &tuning);
        assert!((a - b).abs() < 0.001);
        // Peak never exceeds the amplitude
        for i in 0..100 {
            let lift = bob_offset(i as f32 * 0.137, 1.3, &tuning);
            assert!(lift.abs() <= tuning.bob_amplitude + 0.001);
        }
    }

    #[test]
    fn test_touch_bob_moves_vertically_around_home() {
        let tuning = Tuning::default();
        let home = Vec2::new(300.0, 300.0);
        let mut state = state_with_icons(Modality::Touch, vec![icon(home, 0.0)]);

        advance(&mut state, PointerState::Inactive, &tuning, 1.0);
        let pos = state.icons[0].pos;
        assert_eq!(pos.x, home.x);
        assert!((pos.y - home.y).abs() <= tuning.bob_amplitude);
    }

    #[test]
    fn test_bounds_invariant_over_many_frames() {
        let tuning = Tuning::default();
        let zones = vec![ExclusionZone::new(0.2, 0.3, 0.6, 0.4)];
        let mut state = state_with_icons(
            Modality::Desktop,
            vec![
                icon(Vec2::new(100.0, 100.0), 0.0),
                icon(Vec2::new(700.0, 500.0), 0.7),
            ],
        );
        state.zones = zones;

        // Chase the icons around with a moving pointer
        for i in 0..600 {
            let t = i as f32 * 0.05;
            let pointer = Vec2::new(
                400.0 + 350.0 * t.cos(),
                300.0 + 250.0 * t.sin(),
            );
            advance(&mut state, PointerState::Active(pointer), &tuning, 1.0 / 60.0);
            for icon in &state.icons {
                assert!(icon.pos.x >= tuning.edge_padding);
                assert!(icon.pos.x <= state.bounds.width - tuning.edge_padding);
                assert!(icon.pos.y >= tuning.edge_padding);
                assert!(icon.pos.y <= state.bounds.height - tuning.edge_padding);
            }
        }
    }

    #[test]
    fn test_reduced_motion_pins_icons_home() {
        let tuning = Tuning {
            reduced_motion: true,
            ..Tuning::default()
        };
        let home = Vec2::new(300.0, 300.0);
        let mut state = state_with_icons(Modality::Desktop, vec![icon(home, 0.0)]);
        state.icons[0].pos = Vec2::new(350.0, 350.0);

        advance(
            &mut state,
            PointerState::Active(Vec2::new(310.0, 310.0)),
            &tuning,
            1.0 / 60.0,
        );
        assert_eq!(state.icons[0].pos, home);
    }
}
