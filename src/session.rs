//! The per-frame game state machine.
//!
//! A [`GameSession`] is created once at startup and advanced once per frame with [`GameSession::tick`].
//! It knows nothing about rendering: the front end reads the current [`Mode`] and draws it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::direction::Movement;
use crate::entity::{first_overlap, Gem, Letter};
use crate::geometry::{Hitbox, PlayArea};
use crate::options::Options;
use crate::placement::scatter;
use crate::words::WordList;

/// Slack for phase timers, so summing frame times does not cost an extra frame.
const TIMER_TOLERANCE: f64 = 1e-6;

/// Everything the session needs from the host for one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Movement keys held down.
    pub movement: Movement,
    /// Return to the menu (escape key).
    pub cancel: bool,
    /// Button clicked in the menu.
    pub menu_choice: Option<MenuChoice>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    Spelling,
    Gems,
}

/// The current mode together with the state that only exists while playing it.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Menu,
    Spelling(SpellingRound),
    Gems(GemRound),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpellingPhase {
    Playing,
    /// A letter was touched out of order.
    TryAgain,
    /// All letters were collected.
    WordComplete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpellingRound {
    word: String,
    letters: Vec<Letter>,
    next_index: usize,
    phase: SpellingPhase,
    timer: f64,
    hue: f32,
}

impl SpellingRound {
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The letters in word order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters collected so far, i.e. the index of the next required letter.
    pub fn progress(&self) -> usize {
        self.next_index
    }

    pub fn phase(&self) -> SpellingPhase {
        self.phase
    }

    /// Seconds spent in the current phase.
    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Hue in degrees of the celebration text.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    fn enter(&mut self, phase: SpellingPhase) {
        self.phase = phase;
        self.timer = 0.;
    }

    /// Accumulate `dt` and report whether `limit` seconds have passed in the current phase.
    fn elapsed(&mut self, dt: f32, limit: f32) -> bool {
        self.timer += dt as f64;
        self.timer >= limit as f64 - TIMER_TOLERANCE
    }

    fn advance(&mut self, context: &mut TickContext<'_>) -> Vec<SessionEvent> {
        let mut events = vec![];

        match self.phase {
            SpellingPhase::Playing => {
                let Some(index) = first_overlap(&context.player, &self.letters, context.options.letter_size) else {
                    return events;
                };
                let letter = &mut self.letters[index];
                if index == self.next_index {
                    letter.collected = true;
                    self.next_index += 1;
                    events.push(SessionEvent::LetterCollected(letter.ch));
                    if self.next_index >= self.letters.len() {
                        log::info!("word {} completed", self.word);
                        self.enter(SpellingPhase::WordComplete);
                        events.push(SessionEvent::WordCompleted(self.word.clone()));
                    }
                } else {
                    log::debug!("letter {} touched out of order", letter.ch);
                    events.push(SessionEvent::WrongLetter(letter.ch));
                    self.enter(SpellingPhase::TryAgain);
                }
            }
            SpellingPhase::TryAgain => {
                if self.elapsed(context.dt, context.options.try_again_secs) {
                    self.letters = context.spawner.letters(context.rng, &self.word);
                    self.next_index = 0;
                    self.enter(SpellingPhase::Playing);
                    events.push(SessionEvent::LettersShuffled);
                }
            }
            SpellingPhase::WordComplete => {
                self.hue = (self.hue + context.dt * context.options.hue_speed).rem_euclid(360.);
                if self.elapsed(context.dt, context.options.word_complete_secs) {
                    self.word = context.words.pick(context.rng).to_string();
                    self.letters = context.spawner.letters(context.rng, &self.word);
                    self.next_index = 0;
                    self.hue = 0.;
                    self.enter(SpellingPhase::Playing);
                    log::info!("next word is {}", self.word);
                    events.push(SessionEvent::NewWord(self.word.clone()));
                }
            }
        }

        events
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GemRound {
    gems: Vec<Gem>,
    score: u32,
}

impl GemRound {
    pub fn gems(&self) -> &[Gem] {
        &self.gems
    }

    /// Total number of gems collected since the mode was entered.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Collect at most one gem and replace the batch once it is used up.
    fn advance(&mut self, context: &mut TickContext<'_>) -> Vec<SessionEvent> {
        let mut events = vec![];

        if let Some(index) = first_overlap(&context.player, &self.gems, context.options.gem_size) {
            self.gems[index].collected = true;
            self.score += 1;
            events.push(SessionEvent::GemCollected { score: self.score });
        }

        if !self.gems.is_empty() && self.gems.iter().all(|gem| gem.collected) {
            self.gems = context.spawner.gems(context.rng, self.gems.len());
            log::debug!("all gems collected, new batch of {}", self.gems.len());
            events.push(SessionEvent::BatchRefilled);
        }

        events
    }
}

/// Things that happened during a tick, in order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionEvent {
    EnteredMenu,
    EnteredSpelling,
    EnteredGems,
    NewWord(String),
    LetterCollected(char),
    WrongLetter(char),
    WordCompleted(String),
    LettersShuffled,
    GemCollected { score: u32 },
    BatchRefilled,
}

/// Places new letters and gems.
#[derive(Copy, Clone, Debug)]
struct Spawner {
    area: PlayArea,
    min_separation: f32,
    attempts: u32,
}

impl Spawner {
    fn new(options: &Options) -> Self {
        Spawner {
            area: PlayArea::new(
                options.field_width,
                options.field_height,
                options.margin,
                options.header_height,
            ),
            min_separation: options.min_separation,
            attempts: options.placement_attempts,
        }
    }

    fn letters(&self, rng: &mut Pcg32, word: &str) -> Vec<Letter> {
        let positions = scatter(rng, word.chars().count(), &self.area, self.min_separation, self.attempts);
        word.chars()
            .zip(positions)
            .map(|(ch, position)| Letter::new(ch, position))
            .collect()
    }

    fn gems(&self, rng: &mut Pcg32, count: usize) -> Vec<Gem> {
        scatter(rng, count, &self.area, self.min_separation, self.attempts)
            .into_iter()
            .map(Gem::new)
            .collect()
    }
}

/// The parts of the session a round needs while it is advanced.
struct TickContext<'a> {
    player: Hitbox,
    dt: f32,
    options: &'a Options,
    rng: &'a mut Pcg32,
    words: &'a WordList,
    spawner: &'a Spawner,
}

pub struct GameSession {
    options: Options,
    rng: Pcg32,
    words: WordList,
    spawner: Spawner,
    mode: Mode,
    player: Vec2,
}

impl GameSession {
    /// Create a new session in the menu. Uses `options.seed` if given, a random seed otherwise.
    pub fn new(options: Options, words: WordList) -> Self {
        let rng = match options.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        Self::with_rng(options, words, rng)
    }

    pub fn with_rng(options: Options, words: WordList, rng: Pcg32) -> Self {
        let spawner = Spawner::new(&options);
        let player = Self::field_center(&options);
        GameSession {
            options,
            rng,
            words,
            spawner,
            mode: Mode::Menu,
            player,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Center of the player's hitbox.
    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn player_hitbox(&self) -> Hitbox {
        Hitbox::centered(self.player, self.options.player_size)
    }

    fn field_center(options: &Options) -> Vec2 {
        Vec2::new(options.field_width / 2., options.field_height / 2.)
    }

    /// Leave the current mode (if any) and start spelling a fresh word.
    pub fn start_spelling(&mut self) -> Vec<SessionEvent> {
        let word = self.words.pick(&mut self.rng).to_string();
        let letters = self.spawner.letters(&mut self.rng, &word);
        log::info!("spelling mode started with word {word}");

        self.player = Self::field_center(&self.options);
        self.mode = Mode::Spelling(SpellingRound {
            word: word.clone(),
            letters,
            next_index: 0,
            phase: SpellingPhase::Playing,
            timer: 0.,
            hue: 0.,
        });
        vec![SessionEvent::EnteredSpelling, SessionEvent::NewWord(word)]
    }

    /// Leave the current mode (if any) and start collecting gems with a score of zero.
    pub fn start_gems(&mut self) -> Vec<SessionEvent> {
        let gems = self.spawner.gems(&mut self.rng, self.options.gems_per_batch);
        log::info!("gem mode started with {} gems", gems.len());

        self.player = Self::field_center(&self.options);
        self.mode = Mode::Gems(GemRound { gems, score: 0 });
        vec![SessionEvent::EnteredGems]
    }

    /// Return to the menu, dropping all progress of the current mode.
    pub fn return_to_menu(&mut self) -> Vec<SessionEvent> {
        if self.mode == Mode::Menu {
            return vec![];
        }
        log::info!("returning to menu");
        self.mode = Mode::Menu;
        vec![SessionEvent::EnteredMenu]
    }

    /// Advance the session by one frame.
    pub fn tick(&mut self, input: &TickInput) -> Vec<SessionEvent> {
        if self.mode == Mode::Menu {
            return match input.menu_choice {
                Some(MenuChoice::Spelling) => self.start_spelling(),
                Some(MenuChoice::Gems) => self.start_gems(),
                None => vec![],
            };
        }

        self.move_player(&input.movement, input.dt);

        if input.cancel {
            return self.return_to_menu();
        }

        let mut context = TickContext {
            player: self.player_hitbox(),
            dt: input.dt,
            options: &self.options,
            rng: &mut self.rng,
            words: &self.words,
            spawner: &self.spawner,
        };

        match &mut self.mode {
            Mode::Menu => vec![],
            Mode::Spelling(round) => round.advance(&mut context),
            Mode::Gems(round) => round.advance(&mut context),
        }
    }

    /// Apply the movement and keep the player's hitbox inside the field.
    fn move_player(&mut self, movement: &Movement, dt: f32) {
        let half = self.options.player_size / 2.;
        let min = Vec2::splat(half);
        let max = Vec2::new(self.options.field_width - half, self.options.field_height - half).max(min);
        let moved = self.player + movement.displacement(self.options.move_speed, dt);
        self.player = moved.clamp(min, max);
    }
}
