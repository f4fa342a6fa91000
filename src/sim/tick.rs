//! Per-frame simulation tick
//!
//! One call advances the Play session by exactly one rendered frame.

use super::collision::landing;
use super::state::GameState;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session continues
    Alive,
    /// Player fell past the bottom; carries the final score
    Died { score: u64 },
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> TickOutcome {
    let cfg = &state.config;
    let right_bound = state.right_bound();
    let player = &mut state.player;

    player.pos += player.vel;

    if player.pos.x > right_bound {
        player.pos.x = right_bound;
        player.vel.x = -player.vel.x;
    }
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
        player.vel.x = -player.vel.x;
    }

    if player.vel.y < cfg.terminal_velocity {
        player.vel.y += cfg.gravity;
    }

    if player.pos.y >= cfg.death_y {
        log::debug!("Player fell at y={:.1}, score {}", player.pos.y, state.score);
        return TickOutcome::Died { score: state.score };
    }

    // Independent per-platform checks; a later platform may re-snap y
    for platform in &state.platforms {
        if let Some(y) = landing(player.pos, player.vel.y, platform) {
            player.pos.y = y;
            player.vel.y = 0.0;
        }
    }

    scroll_platforms(state);

    state.score += 1;
    TickOutcome::Alive
}

/// Scroll every platform down, wrapping those past the bottom to the top
fn scroll_platforms(state: &mut GameState) {
    let threshold = state.config.respawn_threshold;
    let respawn_y = state.config.respawn_y;
    let speed = state.config.scroll_speed;

    for i in 0..state.platforms.len() {
        if state.platforms[i].pos.y > threshold {
            let x = state.next_slot_x();
            let platform = &mut state.platforms[i];
            platform.pos.x = x;
            platform.pos.y = respawn_y;
            log::trace!("Respawned {:?} platform at x={}", platform.kind, x);
        } else {
            state.platforms[i].pos.y += speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{PLATFORM_COUNT, PlatformKind};
    use glam::Vec2;
    use proptest::prelude::*;

    /// Park every ledge far from the player so only the base matters
    fn clear_ledges(state: &mut GameState) {
        for p in &mut state.platforms[1..] {
            p.pos = Vec2::new(-250.0, -600.0);
        }
    }

    #[test]
    fn test_resting_on_base_stays_resting() {
        let mut state = GameState::new(1);
        clear_ledges(&mut state);

        // First frame: player falls from 530 onto the base at 590
        assert_eq!(tick(&mut state), TickOutcome::Alive);
        for _ in 0..20 {
            assert_eq!(tick(&mut state), TickOutcome::Alive);
            assert!(state.player.is_resting());
            // The base scrolled on after the snap
            let base_y = state.platforms[0].pos.y - SCROLL_SPEED;
            assert_eq!(state.player.pos.y, base_y - REST_OFFSET);
        }
    }

    #[test]
    fn test_tap_on_base_jumps_next_frame() {
        let mut state = GameState::new(1);
        clear_ledges(&mut state);
        tick(&mut state);
        assert!(state.player.is_resting());

        let y_before = state.player.pos.y;
        assert!(state.request_jump());
        assert_eq!(state.player.vel.y, JUMP_VELOCITY);

        tick(&mut state);
        assert_eq!(state.player.pos.y, y_before + JUMP_VELOCITY);
        assert_eq!(state.player.vel.y, JUMP_VELOCITY + GRAVITY);
    }

    #[test]
    fn test_gravity_increments_until_cap() {
        let mut state = GameState::new(1);
        clear_ledges(&mut state);
        state.platforms[0].pos.y = -600.0;
        state.player.vel.y = JUMP_VELOCITY;

        let mut prev = state.player.vel.y;
        for _ in 0..200 {
            if tick(&mut state) != TickOutcome::Alive {
                break;
            }
            let vy = state.player.vel.y;
            if prev < TERMINAL_VELOCITY {
                assert!((vy - (prev + GRAVITY)).abs() < 1e-4, "{} -> {}", prev, vy);
            } else {
                assert_eq!(vy, prev);
            }
            prev = vy;
        }
        assert!(prev >= TERMINAL_VELOCITY);
        assert!(prev <= TERMINAL_VELOCITY + GRAVITY);
    }

    #[test]
    fn test_bounce_off_right_wall() {
        let mut state = GameState::new(1);
        state.player.pos.x = 438.0;
        state.player.vel.x = 5.0;
        tick(&mut state);
        assert_eq!(state.player.pos.x, 440.0);
        assert_eq!(state.player.vel.x, -5.0);

        // Next frame moves away without flipping again
        tick(&mut state);
        assert_eq!(state.player.pos.x, 435.0);
        assert_eq!(state.player.vel.x, -5.0);
    }

    #[test]
    fn test_bounce_off_left_wall() {
        let mut state = GameState::new(1);
        state.player.pos.x = 2.0;
        state.player.vel.x = -5.0;
        tick(&mut state);
        assert_eq!(state.player.pos.x, 0.0);
        assert_eq!(state.player.vel.x, 5.0);
    }

    #[test]
    fn test_score_counts_frames() {
        let mut state = GameState::new(3);
        clear_ledges(&mut state);
        for expected in 1..=30 {
            tick(&mut state);
            assert_eq!(state.score, expected);
        }
    }

    #[test]
    fn test_death_reports_score_before_increment() {
        let mut state = GameState::new(1);
        clear_ledges(&mut state);
        state.platforms[0].pos.y = -600.0;
        state.score = 41;
        state.player.pos.y = 795.0;
        state.player.vel.y = 9.0;

        assert_eq!(tick(&mut state), TickOutcome::Died { score: 41 });
        assert_eq!(state.score, 41);
    }

    #[test]
    fn test_platform_respawns_past_threshold() {
        let mut state = GameState::new(5);
        state.platforms[2].pos = Vec2::new(0.0, 800.5);
        tick(&mut state);

        let p = state.platforms[2];
        assert_eq!(p.pos.y, RESPAWN_Y);
        let slot = p.pos.x / SLOT_SPACING;
        assert_eq!(slot.fract(), 0.0);
        assert!((-5.0..=5.0).contains(&slot));
        assert_eq!(p.kind, PlatformKind::Ledge);
        assert_eq!(p.width, LEDGE_WIDTH);
    }

    #[test]
    fn test_platform_at_threshold_still_scrolls() {
        let mut state = GameState::new(5);
        state.platforms[3].pos.y = 800.0;
        tick(&mut state);
        assert_eq!(state.platforms[3].pos.y, 801.5);
    }

    #[test]
    fn test_base_wraps_like_ledges() {
        let mut state = GameState::new(5);
        state.platforms[0].pos.y = 801.0;
        tick(&mut state);
        assert_eq!(state.platforms[0].pos.y, RESPAWN_Y);
        assert_eq!(state.platforms[0].kind, PlatformKind::Base);
        assert_eq!(state.platforms[0].width, BASE_WIDTH);
    }

    #[test]
    fn test_later_platform_wins_overlapping_bands() {
        let mut state = GameState::new(1);
        clear_ledges(&mut state);
        state.player.pos = Vec2::new(100.0, 330.0);
        state.player.vel = Vec2::new(0.0, 0.0);
        // After integration y=330, gravity -> vy 0.3; bands (384, 398)
        state.platforms[0].pos = Vec2::new(0.0, 390.0);
        state.platforms[1].pos = Vec2::new(0.0, 395.0);

        tick(&mut state);
        // base snaps to 331, then ledge (band 385..399) re-snaps to 336
        assert_eq!(state.player.pos.y, 336.0);
        assert!(state.player.is_resting());
    }

    proptest! {
        #[test]
        fn prop_player_x_stays_in_bounds(
            seed in any::<u64>(),
            taps in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let mut state = GameState::new(seed);
            for tap in taps {
                if tap {
                    state.request_jump();
                }
                if tick(&mut state) != TickOutcome::Alive {
                    break;
                }
                prop_assert!(state.player.pos.x >= 0.0);
                prop_assert!(state.player.pos.x <= FIELD_WIDTH - PLAYER_WIDTH);
                prop_assert_eq!(state.player.vel.x.abs(), PLAYER_SPEED_X);
            }
        }

        #[test]
        fn prop_vy_never_exceeds_cap(
            seed in any::<u64>(),
            taps in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let mut state = GameState::new(seed);
            for tap in taps {
                if tap {
                    state.request_jump();
                }
                if tick(&mut state) != TickOutcome::Alive {
                    break;
                }
                prop_assert!(state.player.vel.y <= TERMINAL_VELOCITY + GRAVITY);
            }
        }

        #[test]
        fn prop_score_monotone_and_platforms_stay_on_slots(
            seed in any::<u64>(),
            frames in 1usize..1500,
        ) {
            let mut state = GameState::new(seed);
            let mut last = state.score;
            for _ in 0..frames {
                state.request_jump();
                if tick(&mut state) != TickOutcome::Alive {
                    break;
                }
                prop_assert_eq!(state.score, last + 1);
                last = state.score;
                prop_assert_eq!(state.platforms.len(), PLATFORM_COUNT);
                for p in &state.platforms {
                    prop_assert!(p.pos.y <= RESPAWN_THRESHOLD + SCROLL_SPEED);
                    let slot = p.pos.x / SLOT_SPACING;
                    prop_assert_eq!(slot.fract(), 0.0);
                    prop_assert!((SLOT_MIN as f32..=SLOT_MAX as f32).contains(&slot));
                }
            }
        }
    }
}
