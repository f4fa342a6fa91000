//! Scene construction

use glam::Vec2;

use super::{Scene, SceneKind, UiAction};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::platform::AssetId;
use crate::sim::{GameState, PlatformKind, tick};
use crate::ui::{self, Anchor, Button, Stage, TapRegion, TextStyle};

fn headline(stage: &mut Stage, text: String) {
    stage.text(text, ui::HEADLINE_POS, TextStyle::HEADLINE, Anchor::TopCenter);
}

pub(super) fn start_scene() -> Scene {
    let mut stage = Stage::new();
    stage.sprite(AssetId::Background, Vec2::ZERO);
    headline(&mut stage, ui::TITLE.to_string());

    let start = Button::new("Start", ui::BUTTON_SIZE, ui::RED, UiAction::StartGame)
        .at(ui::START_BUTTON_POS)
        .build(&mut stage);

    Scene {
        kind: SceneKind::Start,
        stage,
        taps: vec![start],
        on_frame: None,
    }
}

/// Build the Play scene around a fresh session
pub(super) fn play_scene(state: &GameState) -> Scene {
    let mut stage = Stage::new();
    stage.sprite(AssetId::Background, Vec2::ZERO);

    let platform_nodes = state.platforms.map(|p| {
        let asset = match p.kind {
            PlatformKind::Base => AssetId::BasePlatform,
            PlatformKind::Ledge => AssetId::Platform,
        };
        stage.sprite(asset, p.pos)
    });
    let player_node = stage.sprite(AssetId::Player, state.player.pos);
    let score_node = stage.text(
        ui::score_label(state.score),
        Vec2::ZERO,
        TextStyle::LABEL,
        Anchor::TopLeft,
    );

    // The whole field is the jump target
    let backdrop = TapRegion::new(
        Vec2::ZERO,
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        UiAction::Jump,
    );

    Scene {
        kind: SceneKind::Play,
        stage,
        taps: vec![backdrop],
        on_frame: Some(Box::new(move |state: &mut GameState, stage: &mut Stage| {
            stage.set_text(score_node, &ui::score_label(state.score));
            let outcome = tick(state);
            stage.set_position(player_node, state.player.pos);
            for (node, platform) in platform_nodes.iter().zip(&state.platforms) {
                stage.set_position(*node, platform.pos);
            }
            outcome
        })),
    }
}

pub(super) fn end_scene(score: u64) -> Scene {
    let mut stage = Stage::new();
    stage.sprite(AssetId::Background, Vec2::ZERO);
    headline(&mut stage, ui::result_label(score));

    let retry = Button::new("Retry", ui::BUTTON_SIZE, ui::RED, UiAction::Retry)
        .at(ui::RETRY_BUTTON_POS)
        .build(&mut stage);
    let share = Button::new("Share", ui::BUTTON_SIZE, ui::BLUE, UiAction::Share { score })
        .at(ui::SHARE_BUTTON_POS)
        .build(&mut stage);

    Scene {
        kind: SceneKind::End,
        stage,
        taps: vec![retry, share],
        on_frame: None,
    }
}
