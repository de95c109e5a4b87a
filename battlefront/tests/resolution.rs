mod common;

use battlefront::{
    layout::{cell_rect, pointer_to_cell},
    menu::MenuId,
    Cell, Difficulty, Effect, Mode, Resolution, Session,
};

use common::Harness;

#[test]
fn switching_resolution_rescales_input() {
    let mut h = Harness::new(Session::new(Resolution::Res800x600, Difficulty::Easy));

    h.click_button(MenuId::Main, "RESOLUTION");
    assert_eq!(h.session.current(), Mode::AlteringResolution);
    assert_eq!(
        h.click_button(MenuId::Resolution, "1024x768"),
        vec![Effect::Resize(Resolution::Res1024x768)]
    );
    assert_eq!(h.session.current(), Mode::MainMenu);

    let profile = h.session.profile();
    assert_eq!(profile.scale_multiplier, 1.28);
    assert_eq!((profile.offset_x, profile.offset_y), (224, 168));

    // The old button position no longer hits anything at the new resolution: 800x600
    // PLAY is at (40, 570), scaled it starts at (51, 730).
    h.click(battlefront::Point::new(100.0, 580.0));
    assert_eq!(h.session.current(), Mode::MainMenu);

    h.click_button(MenuId::Main, "RESOLUTION");
    assert_eq!(
        h.click_button(MenuId::Resolution, "800x600"),
        vec![Effect::Resize(Resolution::Res800x600)]
    );
    let profile = h.session.profile();
    assert_eq!(profile.scale_multiplier, 1.0);
    assert_eq!((profile.offset_x, profile.offset_y), (0, 0));
}

#[test]
fn cell_clicks_follow_the_resolution() {
    for &res in Resolution::ALL {
        let mut h = Harness::new(Session::new(res, Difficulty::Easy));
        h.start_discovering();
        h.click_cell(Cell::new(6, 2));
        assert_eq!(h.field.attacks, vec![Cell::new(6, 2)], "at {}", res);

        let center = cell_rect(Cell::new(6, 2), &res.profile()).center();
        assert_eq!(pointer_to_cell(center, &h.session.profile()), Cell::new(6, 2));
    }
}
