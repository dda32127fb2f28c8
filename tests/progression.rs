// Tests de integración del controlador de progreso.
// Se conduce `JourneyApp` con instantes explícitos y rng con semilla, sin egui.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sabji_journey::JourneyApp;
use sabji_journey::data::read_levels_embedded;
use sabji_journey::games::MiniGame;
use sabji_journey::model::{ALL_COMPLETE, AppState, RoundStatus};

fn app() -> JourneyApp {
    app_with_seed(7)
}

fn app_with_seed(seed: u64) -> JourneyApp {
    let bank = read_levels_embedded().expect("banco embebido válido");
    JourneyApp::with_rng(bank, StdRng::seed_from_u64(seed))
}

/// Id de la opción real del minijuego de elección montado.
fn real_choice(app: &JourneyApp) -> usize {
    match &app.active.as_ref().expect("nivel montado").game {
        MiniGame::Choice(g) => g.items.iter().find(|i| i.real).expect("opción real").id,
        other => panic!("se esperaba elección, hay {other:?}"),
    }
}

fn fake_choice(app: &JourneyApp) -> usize {
    match &app.active.as_ref().expect("nivel montado").game {
        MiniGame::Choice(g) => g.items.iter().find(|i| !i.real).expect("opción falsa").id,
        other => panic!("se esperaba elección, hay {other:?}"),
    }
}

fn tile_orders(app: &JourneyApp) -> Vec<usize> {
    match &app.active.as_ref().expect("nivel montado").game {
        MiniGame::Sequence(g) => g.orders(),
        other => panic!("se esperaba secuencia, hay {other:?}"),
    }
}

/// Ordena el tablero del nivel 3 con clics, como el jugador.
fn solve_sequence(app: &mut JourneyApp) {
    for target in 0..9 {
        let pos = tile_orders(app)
            .iter()
            .position(|&o| o == target + 1)
            .expect("pieza presente");
        if pos != target {
            app.click_tile(target);
            app.click_tile(pos);
        }
    }
}

#[test]
fn starts_at_level_one_on_home() {
    let app = app();
    assert_eq!(app.progress.unlocked_level, 1);
    assert_eq!(app.state, AppState::Home);
    assert!(app.progress.transient_message.is_none());
    assert!(!app.progress.show_finale);
    assert!(app.active.is_none());
}

#[test]
fn success_on_frontier_level_unlocks_next() {
    let mut app = app();
    for id in 1..=3 {
        assert_eq!(app.progress.unlocked_level, id);
        assert!(app.select_level(id));
        app.report_success(id, id as f64);
        assert_eq!(app.progress.unlocked_level, id + 1);
        assert_eq!(app.state, AppState::Home);
        assert!(app.active.is_none());
    }
}

#[test]
fn replaying_completed_level_does_not_change_progress() {
    let mut app = app();
    app.report_success(1, 0.0);
    app.report_success(2, 0.0);
    assert_eq!(app.progress.unlocked_level, 3);

    assert!(app.select_level(1));
    app.report_success(1, 1.0);
    assert_eq!(app.progress.unlocked_level, 3);
    assert_eq!(app.state, AppState::Home);
}

#[test]
fn finale_flag_then_all_complete_after_delay() {
    let mut app = app();
    for id in 1..=3 {
        app.report_success(id, 0.0);
    }
    assert!(app.select_level(4));
    app.report_success(4, 100.0);
    assert!(app.progress.show_finale);
    assert_eq!(app.progress.unlocked_level, 4);
    assert_eq!(app.state, AppState::Game(4));

    app.tick(105.9);
    assert!(app.progress.show_finale);

    app.tick(106.0);
    assert!(!app.progress.show_finale);
    assert_eq!(app.progress.unlocked_level, ALL_COMPLETE);
    assert_eq!(app.state, AppState::Home);
    assert!(app.is_journey_complete());
}

#[test]
fn failure_returns_home_immediately_and_message_fades() {
    for level in 1..=4 {
        let mut app = app();
        app.progress.unlocked_level = 4;
        assert!(app.select_level(level));
        app.report_failure(10.0);
        assert_eq!(app.state, AppState::Home);
        assert!(app.active.is_none());
        assert_eq!(
            app.progress.transient_message.as_deref(),
            Some("You failed! Try again.")
        );

        app.tick(12.9);
        assert!(app.progress.transient_message.is_some());
        app.tick(13.0);
        assert!(app.progress.transient_message.is_none());
    }
}

#[test]
fn newer_failure_keeps_its_full_message_time() {
    let mut app = app();
    app.report_failure(0.0);
    app.report_failure(2.0);
    app.tick(3.0);
    assert!(app.progress.transient_message.is_some());
    app.tick(5.0);
    assert!(app.progress.transient_message.is_none());
}

#[test]
fn message_clear_is_independent_of_finale_timer() {
    let mut app = app();
    app.progress.unlocked_level = 4;
    app.report_failure(0.0);
    app.report_success(4, 1.0);
    app.tick(3.0);
    assert!(app.progress.transient_message.is_none());
    assert!(app.progress.show_finale);
    app.tick(7.0);
    assert!(!app.progress.show_finale);
}

#[test]
fn locked_level_selection_is_a_no_op() {
    let mut app = app();
    let before = app.progress.clone();
    for locked in [2, 3, 4, 5, 0, 99] {
        assert!(!app.select_level(locked));
        assert_eq!(app.progress, before);
        assert_eq!(app.state, AppState::Home);
        assert!(app.active.is_none());
    }
    assert!(app.select_level(1));
    assert_eq!(app.state, AppState::Game(1));
}

#[test]
fn restart_clears_everything_including_pending_finale() {
    let mut app = app();
    app.progress.unlocked_level = 4;
    assert!(app.select_level(4));
    app.report_failure(0.0);
    app.report_success(4, 0.5);
    assert!(app.has_pending_timers());

    app.restart();
    assert_eq!(app.progress.unlocked_level, 1);
    assert_eq!(app.state, AppState::Home);
    assert!(app.progress.transient_message.is_none());
    assert!(!app.progress.show_finale);
    assert!(!app.has_pending_timers());

    // el temporizador del final ya no puede completar el viaje
    app.tick(100.0);
    assert_eq!(app.progress.unlocked_level, 1);
}

#[test]
fn celebration_duration_depends_on_level() {
    let mut app = app();
    app.report_success(1, 0.0);
    assert_eq!(app.celebrations.last().map(|c| c.duration()), Some(3.0));

    app.progress.unlocked_level = 4;
    app.report_success(4, 0.0);
    assert_eq!(app.celebrations.last().map(|c| c.duration()), Some(8.0));

    app.tick(20.0);
    assert!(app.celebrations.is_empty());
}

#[test]
fn level_one_pick_flows_through_feedback_delay() {
    let mut app = app();
    assert!(app.select_level(1));
    let real = real_choice(&app);
    app.pick(real, 0.0);
    assert_eq!(app.active.as_ref().map(|g| g.status()), Some(RoundStatus::Success));

    app.tick(1.0);
    assert_eq!(app.state, AppState::Game(1));
    app.tick(1.5);
    assert_eq!(app.state, AppState::Home);
    assert_eq!(app.progress.unlocked_level, 2);
}

#[test]
fn level_one_wrong_pick_fails_and_second_pick_is_ignored() {
    let mut app = app();
    assert!(app.select_level(1));
    let fake = fake_choice(&app);
    let real = real_choice(&app);
    app.pick(fake, 0.0);
    app.pick(real, 0.1);
    app.tick(1.5);
    assert_eq!(app.state, AppState::Home);
    assert_eq!(app.progress.unlocked_level, 1);
    assert!(app.progress.transient_message.is_some());
}

#[test]
fn remounting_level_two_reshuffles_consistently() {
    let mut app = app_with_seed(3);
    app.progress.unlocked_level = 2;
    let mut seen = Vec::new();
    for round in 0..6 {
        assert!(app.select_level(2));
        let ids: Vec<usize> = match &app.active.as_ref().expect("montado").game {
            MiniGame::Choice(g) => g.items.iter().map(|i| i.id).collect(),
            other => panic!("se esperaba elección, hay {other:?}"),
        };
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        seen.push(ids);

        let real = real_choice(&app);
        assert_eq!(real, 2);
        app.pick(real, round as f64 * 10.0);
        app.tick(round as f64 * 10.0 + 2.0);
        assert_eq!(app.state, AppState::Home);
    }
    assert!(seen.iter().any(|ids| ids != &seen[0]));
    assert_eq!(app.progress.unlocked_level, 3);
}

#[test]
fn remounting_level_three_reshuffles_and_still_solves() {
    let mut app = app_with_seed(11);
    app.progress.unlocked_level = 3;
    let mut shuffles = Vec::new();
    for _ in 0..4 {
        assert!(app.select_level(3));
        let orders = tile_orders(&app);
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=9).collect::<Vec<_>>());
        shuffles.push(orders);

        // volver al mapa descarta la instancia
        app.go_home();
        assert!(app.active.is_none());
    }
    assert!(shuffles.iter().any(|s| s != &shuffles[0]));

    assert!(app.select_level(3));
    solve_sequence(&mut app);
    assert_eq!(tile_orders(&app), (1..=9).collect::<Vec<_>>());
    app.submit(50.0);
    assert_eq!(app.active.as_ref().map(|g| g.status()), Some(RoundStatus::Evaluating));
    app.tick(50.9);
    assert_eq!(app.active.as_ref().map(|g| g.status()), Some(RoundStatus::Success));
    app.tick(52.0);
    assert_eq!(app.state, AppState::Home);
    assert_eq!(app.progress.unlocked_level, 4);
}

#[test]
fn level_three_wrong_order_fails_after_feedback() {
    let mut app = app_with_seed(11);
    app.progress.unlocked_level = 3;
    assert!(app.select_level(3));
    solve_sequence(&mut app);
    // un intercambio deja el tablero mal
    app.click_tile(0);
    app.click_tile(8);
    app.submit(0.0);
    app.tick(0.9);
    assert_eq!(app.active.as_ref().map(|g| g.status()), Some(RoundStatus::Failed));
    app.tick(2.4);
    assert_eq!(app.state, AppState::Home);
    assert_eq!(app.progress.unlocked_level, 3);
    assert!(app.progress.transient_message.is_some());
}

#[test]
fn level_four_waits_for_continue_then_plays_finale() {
    let mut app = app();
    app.progress.unlocked_level = 4;
    assert!(app.select_level(4));
    for id in [1, 3, 4, 5, 7] {
        app.toggle(id);
    }
    app.submit(0.0);
    app.tick(0.9);
    app.tick(30.0);
    // no avanza solo
    assert_eq!(app.state, AppState::Game(4));
    assert!(!app.progress.show_finale);
    assert!(app.active.as_ref().is_some_and(|g| g.reveal_labels()));

    app.continue_after_success(31.0);
    assert!(app.progress.show_finale);
    app.continue_after_success(31.5);
    app.tick(37.0);
    assert_eq!(app.progress.unlocked_level, ALL_COMPLETE);
    assert_eq!(app.state, AppState::Home);
}

#[test]
fn level_four_extra_date_fails() {
    let mut app = app();
    app.progress.unlocked_level = 4;
    assert!(app.select_level(4));
    for id in [1, 3, 4, 5, 7, 9] {
        app.toggle(id);
    }
    app.submit(0.0);
    app.tick(0.9);
    assert_eq!(app.active.as_ref().map(|g| g.status()), Some(RoundStatus::Failed));
    app.tick(2.4);
    assert_eq!(app.state, AppState::Home);
    assert_eq!(app.progress.unlocked_level, 4);
}

#[test]
fn stale_round_timer_cannot_fire_after_leaving() {
    let mut app = app();
    assert!(app.select_level(1));
    let fake = fake_choice(&app);
    app.pick(fake, 0.0);
    // el jugador reinicia antes de que venza el feedback
    app.restart();
    app.tick(5.0);
    assert!(app.progress.transient_message.is_none());
    assert_eq!(app.state, AppState::Home);
}

#[test]
fn map_nodes_and_marker_follow_progress() {
    use sabji_journey::app::NodeState;

    let mut app = app();
    let states: Vec<NodeState> = app.level_nodes().iter().map(|n| n.state).collect();
    assert_eq!(
        states,
        vec![NodeState::Unlocked, NodeState::Locked, NodeState::Locked, NodeState::Locked]
    );
    assert_eq!(app.marker(), app.bank.levels[0].map);

    app.report_success(1, 0.0);
    app.report_success(2, 0.0);
    let states: Vec<NodeState> = app.level_nodes().iter().map(|n| n.state).collect();
    assert_eq!(
        states,
        vec![NodeState::Completed, NodeState::Completed, NodeState::Unlocked, NodeState::Locked]
    );
    assert_eq!(app.marker(), app.bank.levels[2].map);

    app.progress.unlocked_level = ALL_COMPLETE;
    assert_eq!(app.marker(), app.bank.destination);
}
