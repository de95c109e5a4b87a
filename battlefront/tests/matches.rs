mod common;

use battlefront::{
    assets::Sound,
    deploy::{DeployTarget, Heading, ShipKind},
    menu::MenuId,
    AttackOutcome, Cell, Clock, Difficulty, Effect, FrameInput, Key, Mode, PlacementError, Point,
    Resolution, Session,
};

use common::Harness;

fn harness(difficulty: Difficulty) -> Harness {
    Harness::new(Session::new(Resolution::Res800x600, difficulty))
}

#[test]
fn play_starts_deployment_with_current_difficulty() {
    let mut h = harness(Difficulty::Medium);
    h.click_button(MenuId::Main, "PLAY");
    assert_eq!(h.session.current(), Mode::Deploying);
    assert_eq!(h.field.started, vec![Difficulty::Medium]);
    assert!(!h.session.human_lost());
}

#[test]
fn deployment_places_the_selected_ship() {
    let mut h = harness(Difficulty::Easy);
    h.click_button(MenuId::Main, "PLAY");

    h.click_cell(Cell::new(2, 3));
    h.click_control(DeployTarget::Ship(ShipKind::Destroyer));
    h.key(Key::Down);
    h.click_cell(Cell::new(5, 0));
    h.click_control(DeployTarget::LeftRight);
    h.click_cell(Cell::new(9, 9));

    assert_eq!(
        h.field.placed,
        vec![
            (ShipKind::Tug, Cell::new(2, 3), Heading::LeftRight),
            (ShipKind::Destroyer, Cell::new(5, 0), Heading::UpDown),
            (ShipKind::Destroyer, Cell::new(9, 9), Heading::LeftRight),
        ]
    );
    assert_eq!(h.session.current(), Mode::Deploying);
}

#[test]
fn rejected_placement_becomes_the_message() {
    let mut h = harness(Difficulty::Easy);
    h.click_button(MenuId::Main, "PLAY");
    h.field.reject_placement = Some(PlacementError::Overlap);
    assert_eq!(
        h.click_cell(Cell::new(0, 0)),
        vec![Effect::PlaySound(Sound::Error)]
    );
    assert_eq!(h.session.message(), Some("ship overlaps another ship"));
    assert!(h.field.placed.is_empty());

    // An accepted placement is silent and clears the message.
    h.field.reject_placement = None;
    assert!(h.click_cell(Cell::new(0, 0)).is_empty());
    assert_eq!(h.session.message(), None);
}

#[test]
fn clicks_off_the_player_grid_are_ignored() {
    let mut h = harness(Difficulty::Easy);
    h.click_button(MenuId::Main, "PLAY");
    h.click(Point::new(340.0, 130.0));
    h.click(Point::new(790.0, 580.0));
    assert!(h.field.placed.is_empty());
    assert_eq!(h.session.message(), None);
}

#[test]
fn play_needs_a_complete_fleet() {
    let mut h = harness(Difficulty::Easy);
    h.click_button(MenuId::Main, "PLAY");
    h.click_control(DeployTarget::Play);
    assert_eq!(h.session.current(), Mode::Deploying);

    h.click_control(DeployTarget::Randomize);
    assert_eq!(h.field.randomized, 1);
    h.click_control(DeployTarget::Play);
    assert_eq!(h.session.current(), Mode::Discovering);
    assert_eq!(
        h.session.stack().iter().copied().collect::<Vec<_>>(),
        vec![Mode::MainMenu, Mode::Discovering]
    );
}

#[test]
fn attacks_only_reach_the_enemy_grid_in_bounds() {
    let mut h = harness(Difficulty::Easy);
    h.start_discovering();
    h.field.outcomes.push_back(AttackOutcome::Hit);

    h.click_cell(Cell::new(10, 0));
    h.click_cell(Cell::new(0, -1));
    assert!(h.field.attacks.is_empty());

    h.click_cell(Cell::new(4, 7));
    assert_eq!(h.field.attacks, vec![Cell::new(4, 7)]);
    assert_eq!(h.session.message(), Some("Hit!"));
    assert_eq!(h.session.current(), Mode::Discovering);
}

#[test]
fn every_shot_plays_its_sound() {
    let mut h = harness(Difficulty::Easy);
    h.start_discovering();
    let shots = [
        (AttackOutcome::Miss, Sound::Miss),
        (AttackOutcome::Hit, Sound::Hit),
        (AttackOutcome::Destroyed(ShipKind::Tug), Sound::Sink),
        (AttackOutcome::ShotAlready, Sound::Error),
    ];
    for &(outcome, sound) in shots.iter() {
        h.field.outcomes.push_back(outcome);
        assert_eq!(
            h.click_cell(Cell::new(1, 1)),
            vec![Effect::PlaySound(sound)],
            "{:?}",
            outcome
        );
    }
    assert_eq!(h.session.current(), Mode::Discovering);
}

#[test]
fn winning_shot_ends_the_match() {
    let mut h = harness(Difficulty::Easy);
    h.start_discovering();
    h.field.outcomes.push_back(AttackOutcome::Won);
    assert_eq!(
        h.click_cell(Cell::new(0, 0)),
        vec![
            Effect::PlaySound(Sound::Winner),
            Effect::MatchOver { human_won: true }
        ]
    );
    assert_eq!(h.session.current(), Mode::EndingGame);
    assert!(!h.session.human_lost());

    h.key(Key::Enter);
    assert_eq!(h.session.current(), Mode::MainMenu);
}

#[test]
fn losing_shot_ends_the_match() {
    let mut h = harness(Difficulty::Easy);
    h.start_discovering();
    h.field.outcomes.push_back(AttackOutcome::Lost);
    assert_eq!(
        h.click_cell(Cell::new(3, 3)),
        vec![
            Effect::PlaySound(Sound::Lose),
            Effect::MatchOver { human_won: false }
        ]
    );
    assert_eq!(h.session.current(), Mode::EndingGame);
    assert!(h.session.human_lost());
}

#[test]
fn watchdog_ends_the_match_at_the_limit() {
    let mut h = harness(Difficulty::Hard);
    h.start_discovering();

    h.wait(179);
    assert!(h.idle().is_empty());
    assert_eq!(h.session.current(), Mode::Discovering);
    assert_eq!(h.session.elapsed_label(h.clock.now()), "02:59");

    h.wait(1);
    assert_eq!(h.idle(), vec![Effect::MatchOver { human_won: false }]);
    assert_eq!(h.session.current(), Mode::EndingGame);
    assert!(h.session.human_lost());
    assert_eq!(
        h.session.stack().iter().copied().collect::<Vec<_>>(),
        vec![Mode::MainMenu, Mode::EndingGame]
    );
}

#[test]
fn watchdog_catches_a_skipped_second() {
    let mut h = harness(Difficulty::Medium);
    h.start_discovering();
    h.wait(299);
    h.idle();
    h.clock.advance(std::time::Duration::from_millis(1500));
    assert_eq!(h.idle(), vec![Effect::MatchOver { human_won: false }]);
}

#[test]
fn game_menu_pauses_the_timer() {
    let mut h = harness(Difficulty::Hard);
    h.start_discovering();
    h.wait(40);
    h.key(Key::Escape);
    assert_eq!(h.session.current(), Mode::GameMenu);

    h.wait(1000);
    assert!(h.idle().is_empty());
    h.click_button(MenuId::Game, "RETURN");
    assert_eq!(h.session.current(), Mode::Discovering);
    assert_eq!(h.session.elapsed_label(h.clock.now()), "00:40");

    h.wait(139);
    assert!(h.idle().is_empty());
    h.wait(1);
    assert_eq!(h.idle(), vec![Effect::MatchOver { human_won: false }]);
}

#[test]
fn escape_on_game_menu_returns_to_the_match() {
    let mut h = harness(Difficulty::Easy);
    h.click_button(MenuId::Main, "PLAY");
    h.key(Key::Escape);
    assert_eq!(h.session.current(), Mode::GameMenu);
    h.key(Key::Escape);
    assert_eq!(h.session.current(), Mode::Deploying);
}

#[test]
fn surrender_returns_to_the_main_menu() {
    let mut h = harness(Difficulty::Easy);
    h.start_discovering();
    h.wait(30);
    h.key(Key::Escape);
    assert!(h.click_button(MenuId::Game, "SURRENDER").is_empty());
    assert_eq!(h.session.current(), Mode::MainMenu);
    assert_eq!(h.session.stack().len(), 1);
    assert_eq!(h.session.elapsed(h.clock.now()).as_secs(), 0);
    assert!(h.session.is_running());

    // A new match starts its timer from zero.
    h.start_discovering();
    h.wait(5);
    assert_eq!(h.session.elapsed_label(h.clock.now()), "00:05");
}

#[test]
fn quit_from_the_game_menu_stops_input() {
    let mut h = harness(Difficulty::Easy);
    h.start_discovering();
    h.key(Key::Escape);
    h.click_button(MenuId::Game, "QUIT");
    assert_eq!(h.session.current(), Mode::Quitting);
    assert!(!h.session.is_running());

    h.wait(10_000);
    assert!(h.idle().is_empty());
    assert!(h.key(Key::Escape).is_empty());
    assert_eq!(h.session.current(), Mode::Quitting);
}

#[test]
fn shift_c_reveals_the_enemy_only_while_discovering() {
    let mut h = harness(Difficulty::Easy);
    let input = FrameInput {
        held: Key::Shift | Key::C,
        ..FrameInput::idle(Point::default())
    };
    assert!(!h.session.reveal_enemy(&input));
    h.start_discovering();
    assert!(h.session.reveal_enemy(&input));
    assert!(!h.session.reveal_enemy(&FrameInput {
        held: Key::Shift.into(),
        ..input
    }));
}
