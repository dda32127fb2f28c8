use super::game::GameAction;
use crate::games::{ActiveGame, SequenceGame};
use crate::judge::{Verdict, format_verdict_message};
use crate::model::RoundStatus;
use crate::ui::helpers::{FAIL_RED, PINK, SUCCESS_GREEN, action_button, card_button};
use egui::{Color32, Grid, RichText, Ui, vec2};

const COLS: usize = 3;

pub fn ui_sequence(ui: &mut Ui, game: &SequenceGame, active: &ActiveGame) -> Option<GameAction> {
    let mut action = None;

    ui.vertical_centered(|ui| match game.armed {
        Some(idx) => {
            ui.label(
                RichText::new(format!("Image {} selected. Click another to swap!", idx + 1))
                    .color(PINK)
                    .strong(),
            );
        }
        None => {
            ui.label(RichText::new("Select an image to start swapping").color(Color32::GRAY));
        }
    });
    ui.add_space(10.0);

    let gap = 12.0;
    let card_w = (ui.available_width() - gap * (COLS as f32 - 1.0)) / COLS as f32;
    let idle = active.round.is_idle();

    Grid::new("sequence_grid")
        .num_columns(COLS)
        .spacing([gap, gap])
        .show(ui, |ui| {
            for (idx, tile) in game.tiles.iter().enumerate() {
                let text = format!("#{}\n{}", idx + 1, tile.caption);
                let armed = game.armed == Some(idx);
                if card_button(ui, text, vec2(card_w, 120.0), armed, idle, Some(tile.asset.as_str())) {
                    action = Some(GameAction::Click(idx));
                }
                if (idx + 1) % COLS == 0 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(20.0);
    let (label, fill) = match active.status() {
        RoundStatus::Evaluating => ("Checking...", PINK),
        RoundStatus::Failed => (format_verdict_message(Verdict::Fail), FAIL_RED),
        RoundStatus::Success => (format_verdict_message(Verdict::Pass), SUCCESS_GREEN),
        RoundStatus::Idle => ("✔ Submit Timeline", PINK),
    };
    if action_button(ui, label, fill, active.can_submit()) {
        action = Some(GameAction::Submit);
    }
    action
}
