//! Scene manager
//!
//! Owns the active scene and the Play session. Every transition replaces the
//! whole scene, so the previous display list and per-frame callback are
//! dropped before the new scene exists.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::build::{end_scene, play_scene, start_scene};
use super::{Scene, SceneKind, UiAction};
use crate::config::GameConfig;
use crate::sim::{GameState, TickOutcome};
use crate::ui::{Stage, Tappable, share_url};

/// Result of a tap, for the host to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing was hit, or the hit had no effect
    Ignored,
    /// Jump request honored
    Jumped,
    /// A scene transition happened
    SceneChanged(SceneKind),
    /// The host should open this external link
    OpenLink(String),
}

pub struct SceneManager {
    config: GameConfig,
    /// Seeds each new Play session
    seeder: Pcg32,
    session: GameState,
    scene: Scene,
}

impl SceneManager {
    /// Create a manager showing the Start scene
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let mut seeder = Pcg32::seed_from_u64(seed);
        let session = GameState::with_config(seeder.random(), config.clone());
        log::info!("Scene manager ready (seed {})", seed);
        Self {
            config,
            seeder,
            session,
            scene: start_scene(),
        }
    }

    pub fn show_start(&mut self) {
        self.replace_scene(start_scene());
    }

    /// Start a fresh session (score 0, new layout) and register its tick
    pub fn show_play(&mut self) {
        let seed = self.seeder.random();
        self.session = GameState::with_config(seed, self.config.clone());
        let scene = play_scene(&self.session);
        self.replace_scene(scene);
        log::info!("New session (seed {})", seed);
    }

    pub fn show_end(&mut self, final_score: u64) {
        self.replace_scene(end_scene(final_score));
        log::info!("Session over, score {}", final_score);
    }

    fn replace_scene(&mut self, scene: Scene) {
        log::info!("Scene {:?} -> {:?}", self.scene.kind, scene.kind);
        // Assignment drops the old stage, taps and callback
        self.scene = scene;
    }

    /// Run the active scene's per-frame callback once, if it has one.
    /// Returns the new scene kind if the frame caused a transition.
    pub fn frame(&mut self) -> Option<SceneKind> {
        let callback = self.scene.on_frame.as_mut()?;
        match callback(&mut self.session, &mut self.scene.stage) {
            TickOutcome::Alive => None,
            TickOutcome::Died { score } => {
                self.show_end(score);
                Some(SceneKind::End)
            }
        }
    }

    /// Deliver a tap at a play-field position
    pub fn tap(&mut self, point: Vec2) -> TapOutcome {
        let action = self.scene.taps.iter().rev().find_map(|region| region.hit(point));

        match action {
            None => TapOutcome::Ignored,
            Some(UiAction::StartGame) | Some(UiAction::Retry) => {
                self.show_play();
                TapOutcome::SceneChanged(SceneKind::Play)
            }
            Some(UiAction::Share { score }) => TapOutcome::OpenLink(share_url(
                &self.config.share_base_url,
                &self.config.game_url,
                score,
            )),
            Some(UiAction::Jump) => {
                if self.session.request_jump() {
                    TapOutcome::Jumped
                } else {
                    TapOutcome::Ignored
                }
            }
        }
    }

    pub fn active(&self) -> SceneKind {
        self.scene.kind
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn stage(&self) -> &Stage {
        &self.scene.stage
    }

    pub fn has_frame_callback(&self) -> bool {
        self.scene.has_frame_callback()
    }

    pub fn session(&self) -> &GameState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameState {
        &mut self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::ui::{self, DisplayObject};

    fn manager() -> SceneManager {
        SceneManager::new(42, GameConfig::default())
    }

    fn center(pos: Vec2) -> Vec2 {
        pos + ui::BUTTON_SIZE / 2.0
    }

    /// Drop the player into the void so the next frame ends the session
    fn doom(manager: &mut SceneManager) {
        let session = manager.session_mut();
        for p in &mut session.platforms {
            p.pos = Vec2::new(-250.0, -600.0);
        }
        session.player.pos.y = 795.0;
        session.player.vel.y = 9.0;
    }

    #[test]
    fn test_starts_on_start_scene() {
        let m = manager();
        assert_eq!(m.active(), SceneKind::Start);
        assert!(!m.has_frame_callback());
        assert_eq!(m.stage().texts().collect::<Vec<_>>(), vec![ui::TITLE, "Start"]);
        assert_eq!(m.scene().taps().len(), 1);
    }

    #[test]
    fn test_start_button_enters_play() {
        let mut m = manager();
        assert_eq!(
            m.tap(center(ui::START_BUTTON_POS)),
            TapOutcome::SceneChanged(SceneKind::Play)
        );
        assert_eq!(m.active(), SceneKind::Play);
        assert!(m.has_frame_callback());
        assert_eq!(m.session().score, 0);
    }

    #[test]
    fn test_tap_outside_button_ignored() {
        let mut m = manager();
        assert_eq!(m.tap(Vec2::new(10.0, 10.0)), TapOutcome::Ignored);
        assert_eq!(m.active(), SceneKind::Start);
    }

    #[test]
    fn test_frames_do_nothing_outside_play() {
        let mut m = manager();
        assert_eq!(m.frame(), None);
        assert_eq!(m.session().score, 0);
    }

    #[test]
    fn test_play_frames_update_score_and_sprites() {
        let mut m = manager();
        m.show_play();

        assert_eq!(m.frame(), None);
        // Text is refreshed before the tick
        assert!(m.stage().texts().any(|t| t == "SCORE:0m"));
        assert_eq!(m.frame(), None);
        assert!(m.stage().texts().any(|t| t == "SCORE:1m"));
        assert_eq!(m.session().score, 2);

        let player = m.session().player.pos;
        let player_sprite = m.stage().iter().any(|n| {
            matches!(n, DisplayObject::Sprite { asset: crate::platform::AssetId::Player, pos } if *pos == player)
        });
        assert!(player_sprite);
    }

    #[test]
    fn test_jump_tap_only_when_resting() {
        let mut m = manager();
        m.show_play();
        m.frame(); // land on the base

        assert!(m.session().player.is_resting());
        assert_eq!(m.tap(Vec2::new(250.0, 400.0)), TapOutcome::Jumped);
        assert_eq!(m.session().player.vel.y, JUMP_VELOCITY);
        assert_eq!(m.tap(Vec2::new(250.0, 400.0)), TapOutcome::Ignored);
        assert_eq!(m.session().player.vel.y, JUMP_VELOCITY);
    }

    #[test]
    fn test_fall_ends_session_with_exact_score() {
        let mut m = manager();
        m.show_play();
        for _ in 0..10 {
            assert_eq!(m.frame(), None);
        }
        doom(&mut m);

        assert_eq!(m.frame(), Some(SceneKind::End));
        assert_eq!(m.active(), SceneKind::End);
        assert!(!m.has_frame_callback());
        assert!(m.stage().texts().any(|t| t == ui::result_label(10)));

        // Play's tick is gone: further frames change nothing
        let before = m.session().player.pos;
        assert_eq!(m.frame(), None);
        assert_eq!(m.session().player.pos, before);
        assert_eq!(m.session().score, 10);
    }

    #[test]
    fn test_retry_starts_fresh_session() {
        let mut m = manager();
        m.show_play();
        for _ in 0..25 {
            m.frame();
        }
        doom(&mut m);
        m.frame();
        assert_eq!(m.active(), SceneKind::End);

        assert_eq!(
            m.tap(center(ui::RETRY_BUTTON_POS)),
            TapOutcome::SceneChanged(SceneKind::Play)
        );
        assert_eq!(m.session().score, 0);
        assert_eq!(m.session().player.vel.y, 0.0);
        assert_eq!(m.session().player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    }

    #[test]
    fn test_share_opens_link_with_score() {
        let mut m = manager();
        m.show_end(321);
        match m.tap(center(ui::SHARE_BUTTON_POS)) {
            TapOutcome::OpenLink(url) => {
                assert!(url.starts_with(SHARE_BASE_URL));
                assert!(url.contains("321m"));
            }
            other => panic!("expected link, got {:?}", other),
        }
        // Sharing does not leave the End scene
        assert_eq!(m.active(), SceneKind::End);
    }

    #[test]
    fn test_repeated_transitions_leave_one_scene() {
        let mut m = manager();
        m.show_play();
        let nodes = m.stage().len();
        m.show_play();
        assert_eq!(m.active(), SceneKind::Play);
        assert!(m.has_frame_callback());
        assert_eq!(m.stage().len(), nodes);
        assert_eq!(m.scene().taps().len(), 1);

        // One callback: one frame advances the score by exactly one
        m.frame();
        assert_eq!(m.session().score, 1);

        m.show_start();
        m.show_start();
        assert_eq!(m.active(), SceneKind::Start);
        assert!(!m.has_frame_callback());
        assert_eq!(m.scene().taps().len(), 1);

        m.show_play();
        m.show_end(5);
        m.show_end(5);
        assert_eq!(m.active(), SceneKind::End);
        assert!(!m.has_frame_callback());
        assert_eq!(m.scene().taps().len(), 2);
        assert_eq!(
            m.stage().texts().filter(|t| *t == ui::result_label(5)).count(),
            1
        );
    }

    #[test]
    fn test_new_sessions_get_new_seeds() {
        let mut m = manager();
        m.show_play();
        let first = m.session().seed;
        m.show_play();
        assert_ne!(m.session().seed, first);
    }
}
