use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader},
    thread,
    time::Duration,
};

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use battlefront::{
    assets::{self, AssetCatalog},
    layout::{field_rect, Point},
    Clock, Effect, FrameInput, InputTracker, ManualClock, Mode, RawInput, Session, Settings,
    SystemClock,
};

use self::{
    script::{Command, InputReader, HELP},
    skirmish::{GridCell, Skirmish},
};

mod script;
mod skirmish;

/// Time between two frames.
const FRAME_STEP: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("Battleships")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Headless driver for the Battleships front end, fed by a script of pointer and key events.")
        .arg(
            Arg::with_name("resolution")
                .short("r")
                .long("resolution")
                .value_name("WIDTHxHEIGHT")
                .help("display resolution to start at")
                .takes_value(true)
                .possible_values(&["800x600", "1024x768", "1280x960"]),
        )
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .value_name("DIFFICULTY")
                .help("difficulty of the first match, which sets its time limit")
                .takes_value(true)
                .possible_values(&["easy", "medium", "hard"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("TOML settings file; command line flags take precedence")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("script")
                .short("s")
                .long("script")
                .value_name("FILE")
                .help("read commands from a file instead of the terminal")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the computer player, for repeatable runs")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("realtime")
                .long("realtime")
                .help("time the match by the wall clock instead of counting frames"),
        )
        .get_matches();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = load_settings(&matches)?;
    let rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };
    let clock = if matches.is_present("realtime") {
        FrameClock::Realtime(SystemClock::new())
    } else {
        FrameClock::Scripted(ManualClock::new())
    };
    let mut driver = Driver::new(&settings, Skirmish::new(rng), clock);

    match matches.value_of("script") {
        Some(path) => {
            let file = File::open(path)?;
            driver.run(InputReader::new(BufReader::new(file)))?;
        }
        None => {
            println!("Type help or ? for commands.");
            let stdin = io::stdin();
            driver.run(InputReader::interactive(stdin.lock(), ">"))?;
        }
    }
    Ok(())
}

/// Read the settings file if one was given, then apply command line overrides.
fn load_settings(matches: &ArgMatches) -> Result<Settings, Box<dyn Error>> {
    let mut settings = match matches.value_of("config") {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(res) = matches.value_of("resolution") {
        settings.resolution = res.parse()?;
    }
    if let Some(difficulty) = matches.value_of("difficulty") {
        settings.difficulty = difficulty.parse()?;
    }
    Ok(settings)
}

/// Where frame times come from.
#[derive(Debug)]
enum FrameClock {
    /// Every frame moves time on by [`FRAME_STEP`], so runs are reproducible.
    Scripted(ManualClock),
    /// Frames are [`FRAME_STEP`] apart in real time and the match timer follows the
    /// wall clock, including time spent waiting for the next command.
    Realtime(SystemClock),
}

impl FrameClock {
    /// Wait until the next frame is due.
    fn tick(&self) {
        match self {
            FrameClock::Scripted(clock) => clock.advance(FRAME_STEP),
            FrameClock::Realtime(_) => thread::sleep(FRAME_STEP),
        }
    }
}

impl Clock for FrameClock {
    fn now(&self) -> Duration {
        match self {
            FrameClock::Scripted(clock) => clock.now(),
            FrameClock::Realtime(clock) => clock.now(),
        }
    }
}

/// Turns script commands into device samples and runs the session one frame per
/// sample.
struct Driver {
    session: Session,
    field: Skirmish<StdRng>,
    catalog: AssetCatalog,
    clock: FrameClock,
    tracker: InputTracker,
    raw: RawInput,
}

impl Driver {
    fn new(settings: &Settings, field: Skirmish<StdRng>, clock: FrameClock) -> Self {
        let mut driver = Self {
            session: Session::from_settings(settings),
            field,
            catalog: AssetCatalog::new(settings.assets.clone()),
            clock,
            tracker: InputTracker::new(),
            raw: RawInput::idle(Point::default()),
        };
        info!(
            "starting at {} on {}",
            driver.session.resolution(),
            driver.session.difficulty()
        );
        if let Some(track) = settings.music {
            driver.apply(Effect::PlayMusic(track));
        }
        driver
    }

    /// Run commands until the input ends, the script quits or the session stops.
    fn run(&mut self, mut input: InputReader<impl BufRead>) -> io::Result<()> {
        while self.session.is_running() {
            let cmd = match input.next_command()? {
                Some(Command::Quit) | None => break,
                Some(cmd) => cmd,
            };
            match cmd {
                Command::Move(point) => {
                    self.raw.pointer = point;
                    self.step();
                }
                Command::Press => self.set_primary(true),
                Command::Release => self.set_primary(false),
                Command::Click(point) => {
                    self.raw.pointer = point;
                    self.set_primary(true);
                    self.set_primary(false);
                }
                Command::Key(key) => {
                    self.raw.keys_down.insert(key);
                    self.step();
                    self.raw.keys_down.remove(key);
                    self.step();
                }
                Command::Hold(key) => {
                    self.raw.keys_down.insert(key);
                    self.step();
                }
                Command::Lift(key) => {
                    self.raw.keys_down.remove(key);
                    self.step();
                }
                Command::Wait(time) => {
                    let frames = (time.as_secs_f64() / FRAME_STEP.as_secs_f64()).ceil() as u64;
                    for _ in 0..frames {
                        if !self.session.is_running() {
                            break;
                        }
                        self.step();
                    }
                }
                Command::Show => self.show(),
                Command::Help => println!("{}", HELP),
                Command::Quit => unreachable!(),
            }
        }
        if !self.session.is_running() {
            info!("session ended in {:?}", self.session.current());
        }
        Ok(())
    }

    fn set_primary(&mut self, down: bool) {
        self.raw.primary_down = down;
        self.step();
    }

    /// Wait for the next frame and run the session on the current sample.
    fn step(&mut self) {
        self.clock.tick();
        let input = self.tracker.sample(self.raw);
        let effects = self
            .session
            .frame(&input, self.clock.now(), &mut self.field);
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::PlayMusic(track) => {
                if let Some(path) = self.catalog.music(track) {
                    info!("playing {}", path.display());
                }
            }
            Effect::StopMusic => info!("music stopped"),
            Effect::PlaySound(sound) => {
                if let Some(path) = self.catalog.sound(sound) {
                    info!("sound {}", path.display());
                }
            }
            Effect::Resize(res) => {
                let profile = res.profile();
                info!("window resized to {}x{}", profile.width, profile.height);
            }
            Effect::QuitRequested => self.session.shutdown(),
            Effect::MatchOver { human_won: true } => println!("You won the match!"),
            Effect::MatchOver { human_won: false } => {
                println!("You lost the match after {}.", self.session.elapsed_label(self.clock.now()))
            }
            Effect::Shutdown => info!("last screen closed"),
        }
    }

    /// Print what would be on screen.
    fn show(&self) {
        let mode = self.session.current();
        let res = self.session.resolution();
        println!("{:?} at {}, {}", mode, res, self.session.difficulty());
        if let Some(role) = assets::background(mode) {
            self.show_image("background", role, res);
        }
        if let Some((role, origin)) = assets::overlay(mode, res) {
            println!("overlay at ({}, {}):", origin.x, origin.y);
            self.show_image("overlay", role, res);
        }

        let input = FrameInput {
            primary_down: self.raw.primary_down,
            held: self.raw.keys_down,
            ..FrameInput::idle(self.raw.pointer)
        };
        for (menu, button) in self.session.visible_buttons(&input) {
            println!(
                "{:>10} {:<12} at ({}, {}){}",
                format!("{:?}", menu),
                button.label,
                button.rect.left,
                button.rect.top,
                if button.highlighted { " *" } else { "" }
            );
        }

        if matches!(mode, Mode::Deploying | Mode::Discovering) {
            let field = field_rect(&self.session.profile());
            println!(
                "field at ({}, {}) {}x{}",
                field.left, field.top, field.width, field.height
            );
        }
        match mode {
            Mode::Deploying => {
                let panel = self.session.deploy_panel();
                println!("placing {:?} {:?}", panel.selected, panel.heading);
                show_board(self.field.human_rows());
            }
            Mode::Discovering => {
                println!("time {}", self.session.elapsed_label(self.clock.now()));
                println!("Enemy waters:");
                show_board(self.field.computer_rows(self.session.reveal_enemy(&input)));
                println!("Your fleet:");
                show_board(self.field.human_rows());
            }
            Mode::EndingGame if self.session.human_lost() => println!("You lost."),
            Mode::EndingGame => println!("You won."),
            _ => {}
        }
        if let Some(message) = self.session.message() {
            println!("{}", message);
        }
    }

    fn show_image(&self, what: &str, role: assets::AssetRole, res: battlefront::Resolution) {
        match self.catalog.image(role, res) {
            Some(path) => println!("{} {}", what, path.display()),
            None => warn!("drawing {} without {}", what, role.file_name(res)),
        }
    }
}

/// Print a 10x10 grid with row and column numbers.
fn show_board(rows: impl Iterator<Item = impl Iterator<Item = GridCell>>) {
    print!("   ");
    for i in 0..10 {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(clock: FrameClock) -> Driver {
        Driver::new(
            &Settings::default(),
            Skirmish::new(StdRng::seed_from_u64(3)),
            clock,
        )
    }

    #[test]
    fn scripted_frames_advance_by_a_fixed_step() {
        let mut driver = driver(FrameClock::Scripted(ManualClock::new()));
        driver
            .run(InputReader::new("wait 2\nmove 10,10\n".as_bytes()))
            .unwrap();
        assert_eq!(driver.clock.now(), Duration::from_millis(2100));
    }

    #[test]
    fn realtime_frames_follow_the_wall_clock() {
        let mut driver = driver(FrameClock::Realtime(SystemClock::new()));
        let before = driver.clock.now();
        driver.run(InputReader::new("wait 0.3\n".as_bytes())).unwrap();
        assert!(driver.clock.now() >= before + Duration::from_millis(300));
        assert!(driver.session.is_running());
    }

    #[test]
    fn realtime_match_timer_counts_real_time() {
        let mut driver = driver(FrameClock::Realtime(SystemClock::new()));
        // PLAY, randomize, then the play control at 800x600.
        let script = "click 100,580\nkey r\nclick 733,95\nwait 0.2\n";
        driver.run(InputReader::new(script.as_bytes())).unwrap();
        assert_eq!(driver.session.current(), Mode::Discovering);
        assert!(driver.session.elapsed(driver.clock.now()) >= Duration::from_millis(200));
    }
}
