//! Routes a frame's input to the handler for the current mode.
use std::time::Duration;

use log::{debug, info};

use crate::{
    assets::Sound,
    deploy::{DeployPanel, DeployTarget, Heading},
    input::{FrameInput, Key},
    layout::pointer_to_cell,
    menu::{MenuAction, MenuId},
    session::{AttackOutcome, Battlefield, Effect, Session},
    state::Mode,
};

impl Session {
    /// Handle one frame of input. Exactly one mode handler runs, chosen by the mode on
    /// top of the stack when the frame begins.
    pub fn handle_input<B: Battlefield + ?Sized>(
        &mut self,
        input: &FrameInput,
        now: Duration,
        battlefield: &mut B,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.running {
            return effects;
        }
        let mode = self.current();
        match mode {
            Mode::MainMenu
            | Mode::GameMenu
            | Mode::Settings
            | Mode::AlteringMusic
            | Mode::AlteringResolution => {
                for &menu in mode.menus() {
                    if self.handle_menu(menu, input, now, battlefield, &mut effects) {
                        break;
                    }
                }
            }
            Mode::HighScores | Mode::EndingGame => self.handle_dismiss(input, now, &mut effects),
            Mode::Deploying => self.handle_deployment(input, now, battlefield, &mut effects),
            Mode::Discovering => self.handle_discovery(input, now, battlefield, &mut effects),
            Mode::Quitting => {}
        }
        effects
    }

    /// Handle input for one menu level. Returns false if a click missed every button,
    /// so the menu beneath can be offered the same click.
    fn handle_menu<B: Battlefield + ?Sized>(
        &mut self,
        menu: MenuId,
        input: &FrameInput,
        now: Duration,
        battlefield: &mut B,
        effects: &mut Vec<Effect>,
    ) -> bool {
        if input.typed(Key::Escape) {
            if self.current() == Mode::MainMenu {
                effects.push(Effect::QuitRequested);
            } else {
                self.pop(now, effects);
            }
            return true;
        }

        if input.clicked {
            let level = self.menus.level(menu);
            if let Some(index) = level.hit_test(input.pointer, &self.profile()) {
                let action = level.entries()[index].action;
                debug!("{:?} menu: {}", menu, level.entries()[index].label);
                self.perform(action, now, battlefield, effects);
                if menu.is_sub_menu() {
                    self.pop(now, effects);
                }
                return true;
            }
            if level.level() > 0 {
                // Clicking off a sub-menu closes it.
                self.pop(now, effects);
            }
        }
        false
    }

    fn perform<B: Battlefield + ?Sized>(
        &mut self,
        action: MenuAction,
        now: Duration,
        battlefield: &mut B,
        effects: &mut Vec<Effect>,
    ) {
        match action {
            MenuAction::StartMatch => {
                info!("starting a {} match", self.difficulty);
                battlefield.start_match(self.difficulty);
                self.timer.reset();
                self.human_lost = false;
                self.message = None;
                self.deploy = DeployPanel::new();
                self.push(Mode::Deploying, now);
            }
            MenuAction::Open(mode) => self.push(mode, now),
            MenuAction::Close | MenuAction::ReturnToMatch => self.pop(now, effects),
            MenuAction::Surrender => {
                info!("surrendered after {}", self.elapsed_label(now));
                // Game menu, then the match itself.
                self.pop(now, effects);
                self.pop(now, effects);
                self.timer.reset();
            }
            MenuAction::Quit => {
                info!("quitting");
                self.push(Mode::Quitting, now);
            }
            MenuAction::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
            MenuAction::StopMusic => effects.push(Effect::StopMusic),
            MenuAction::PlayMusic(track) => effects.push(Effect::PlayMusic(track)),
            MenuAction::SetResolution(resolution) => {
                self.set_resolution(resolution);
                effects.push(Effect::Resize(resolution));
            }
        }
    }

    /// Screens that close on any click, enter or escape.
    fn handle_dismiss(&mut self, input: &FrameInput, now: Duration, effects: &mut Vec<Effect>) {
        if input.clicked || input.typed(Key::Enter) || input.typed(Key::Escape) {
            self.pop(now, effects);
        }
    }

    fn handle_deployment<B: Battlefield + ?Sized>(
        &mut self,
        input: &FrameInput,
        now: Duration,
        battlefield: &mut B,
        effects: &mut Vec<Effect>,
    ) {
        if input.typed(Key::Escape) {
            self.push(Mode::GameMenu, now);
            return;
        }

        if input.typed(Key::Up) || input.typed(Key::Down) {
            self.deploy.heading = Heading::UpDown;
        }
        if input.typed(Key::Left) || input.typed(Key::Right) {
            self.deploy.heading = Heading::LeftRight;
        }
        if input.typed(Key::R) {
            battlefield.randomize_fleet();
        }

        if !input.clicked {
            return;
        }
        let profile = self.profile();
        match self
            .deploy
            .target(input.pointer, &profile, battlefield.fleet_ready())
        {
            Some(DeployTarget::Ship(ship)) => self.deploy.selected = ship,
            Some(DeployTarget::Play) => {
                info!("fleet deployed");
                self.message = None;
                self.switch(Mode::Discovering, now);
            }
            Some(DeployTarget::UpDown) => self.deploy.heading = Heading::UpDown,
            Some(DeployTarget::LeftRight) => self.deploy.heading = Heading::LeftRight,
            Some(DeployTarget::Randomize) => battlefield.randomize_fleet(),
            None => {
                let cell = pointer_to_cell(input.pointer, &profile);
                if battlefield.player_grid().contains(cell) {
                    let DeployPanel { selected, heading } = self.deploy;
                    self.message = match battlefield.place_ship(selected, cell, heading) {
                        Ok(()) => None,
                        Err(err) => {
                            effects.push(Effect::PlaySound(Sound::Error));
                            Some(err.to_string())
                        }
                    };
                }
            }
        }
    }

    fn handle_discovery<B: Battlefield + ?Sized>(
        &mut self,
        input: &FrameInput,
        now: Duration,
        battlefield: &mut B,
        effects: &mut Vec<Effect>,
    ) {
        if input.typed(Key::Escape) {
            self.push(Mode::GameMenu, now);
            return;
        }
        if !input.clicked {
            return;
        }
        let cell = pointer_to_cell(input.pointer, &self.profile());
        if !battlefield.enemy_grid().contains(cell) {
            return;
        }
        let outcome = battlefield.attack(cell);
        debug!("attack {:?}: {:?}", cell, outcome);
        let (message, sound) = match outcome {
            AttackOutcome::Miss => ("Miss", Sound::Miss),
            AttackOutcome::Hit => ("Hit!", Sound::Hit),
            AttackOutcome::Destroyed(_) => ("You destroyed a ship!", Sound::Sink),
            AttackOutcome::ShotAlready => ("You have already shot this square", Sound::Error),
            AttackOutcome::Won => ("You win!", Sound::Winner),
            AttackOutcome::Lost => ("You lost", Sound::Lose),
        };
        self.message = Some(message.to_owned());
        effects.push(Effect::PlaySound(sound));
        let human_won = match outcome {
            AttackOutcome::Won => true,
            AttackOutcome::Lost => false,
            _ => return,
        };
        info!(
            "match over after {}, human {}",
            self.elapsed_label(now),
            if human_won { "won" } else { "lost" }
        );
        self.human_lost = !human_won;
        self.switch(Mode::EndingGame, now);
        effects.push(Effect::MatchOver { human_won });
    }
}
