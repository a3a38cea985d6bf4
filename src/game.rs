use eframe::{egui, Storage};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::animation::SpriteAnimation;
use crate::assets::Assets;
use crate::background::{Background, NoiseField};
use crate::direction::{Direction, Movement};
use crate::entity::Collectible;
use crate::menu::{MainMenu, MenuEvent};
use crate::options::Options;
use crate::session::{GameSession, GemRound, Mode, SpellingPhase, SpellingRound, TickInput};
use crate::words::WordList;

const LETTER_FONT_SIZE: f32 = 36.;
const HUD_FONT_SIZE: f32 = 26.;
const HUD_Y: f32 = 30.;
const SPRITE_SCALE: f32 = 2.;

/// The running game: session, background and everything needed to draw them.
pub struct Game {
    session: GameSession,
    assets: Assets,
    background: Background,
    background_texture: egui::TextureHandle,
    // Cosmetic randomness only, the session owns its own generator.
    rng: Pcg32,
    animation: SpriteAnimation,
    menu: MainMenu,
}

impl Game {
    pub fn new(
        context: &egui::Context,
        options: Options,
        words: WordList,
        assets: Assets,
        settings: Settings,
    ) -> Self {
        let mut rng = match options.seed {
            Some(seed) => Pcg32::seed_from_u64(seed.wrapping_add(1)),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        let background = Background::new(NoiseField::new(&mut rng), &options);
        let background_texture = context.load_texture(
            "background",
            Self::background_image(&background),
            egui::TextureOptions::NEAREST,
        );
        let animation = SpriteAnimation::new(assets.sprite_sheet().frame_count());

        Self {
            session: GameSession::new(options, words),
            assets,
            background,
            background_texture,
            rng,
            animation,
            menu: MainMenu::new(settings),
        }
    }

    pub fn settings(&self) -> Settings {
        self.menu.settings()
    }

    /// Run one frame: read the input, advance the simulation and draw everything.
    pub fn update(&mut self, ui: &mut egui::Ui) {
        let mut input = Self::read_input(ui);

        // Avoid half pixels, textures get blurry otherwise.
        let top_left = ui.max_rect().left_top();
        let origin = egui::pos2(top_left.x.floor(), top_left.y.floor());
        let options = self.session.options();
        let size = egui::vec2(options.field_width, options.field_height);

        self.background.advance(input.dt as f64);
        self.background_texture
            .set(Self::background_image(&self.background), egui::TextureOptions::NEAREST);
        ui.painter().image(
            self.background_texture.id(),
            egui::Rect::from_min_size(origin, size),
            egui::Rect::from_min_max(egui::pos2(0., 0.), egui::pos2(1., 1.)),
            egui::Color32::WHITE,
        );

        if matches!(self.session.mode(), Mode::Menu) {
            let direction = self.background.field().direction();
            for event in self.menu.update(ui, origin, size, direction) {
                match event {
                    MenuEvent::Start(choice) => input.menu_choice = Some(choice),
                    MenuEvent::RandomizeDirection => {
                        self.background.field_mut().randomize_direction(&mut self.rng)
                    }
                    MenuEvent::SettingsChanged(settings) => log::debug!("settings changed: {settings:?}"),
                }
            }
        } else {
            self.animation.update(input.dt);
        }

        for event in self.session.tick(&input) {
            log::debug!("{event:?}");
        }

        match self.session.mode() {
            Mode::Menu => {}
            Mode::Spelling(round) => self.draw_spelling(round, origin, size, ui),
            Mode::Gems(round) => self.draw_gems(round, origin, ui),
        }

        ui.ctx().request_repaint();
    }

    fn read_input(ui: &egui::Ui) -> TickInput {
        ui.input(|i| {
            let mut movement = Movement::new();
            movement.set(Direction::Left, i.key_down(egui::Key::ArrowLeft) || i.key_down(egui::Key::A));
            movement.set(Direction::Right, i.key_down(egui::Key::ArrowRight) || i.key_down(egui::Key::D));
            movement.set(Direction::Up, i.key_down(egui::Key::ArrowUp) || i.key_down(egui::Key::W));
            movement.set(Direction::Down, i.key_down(egui::Key::ArrowDown) || i.key_down(egui::Key::S));
            TickInput {
                dt: i.stable_dt,
                movement,
                cancel: i.key_pressed(egui::Key::Escape),
                menu_choice: None,
            }
        })
    }

    fn background_image(background: &Background) -> egui::ColorImage {
        egui::ColorImage::from_rgb(background.size(), background.pixels())
    }

    fn draw_spelling(&self, round: &SpellingRound, origin: egui::Pos2, size: egui::Vec2, ui: &egui::Ui) {
        let painter = ui.painter();

        if round.phase() != SpellingPhase::WordComplete {
            for letter in round.letters().iter().filter(|letter| !letter.collected()) {
                painter.text(
                    to_screen(origin, letter.position()),
                    egui::Align2::CENTER_CENTER,
                    letter.char(),
                    egui::FontId::monospace(LETTER_FONT_SIZE),
                    egui::Color32::YELLOW,
                );
            }
        }

        self.draw_player(origin, painter);

        // HUD: "Spell: C A _ " followed by the word's icon
        let font = egui::FontId::monospace(HUD_FONT_SIZE);
        let mut cursor = origin + egui::vec2(10., HUD_Y);
        let rect = painter.text(cursor, egui::Align2::LEFT_CENTER, "Spell: ", font.clone(), egui::Color32::WHITE);
        cursor.x = rect.right();
        for (i, ch) in round.word().chars().enumerate() {
            let (text, color) = if i < round.progress() {
                (format!("{ch} "), egui::Color32::LIGHT_GREEN)
            } else {
                ("_ ".to_string(), egui::Color32::WHITE)
            };
            let rect = painter.text(cursor, egui::Align2::LEFT_CENTER, text, font.clone(), color);
            cursor.x = rect.right();
        }
        if let Some(icon) = self.assets.word_icon(round.word()) {
            let icon_rect = egui::Rect::from_center_size(
                cursor + egui::vec2(40., 0.),
                icon.size_vec2() * SPRITE_SCALE,
            );
            painter.image(icon.id(), icon_rect, full_uv(), egui::Color32::WHITE);
        }

        let field = egui::Rect::from_min_size(origin, size);
        match round.phase() {
            SpellingPhase::Playing => {}
            SpellingPhase::TryAgain => {
                painter.rect_filled(field, 0., egui::Color32::from_black_alpha(150));
                painter.text(
                    field.center(),
                    egui::Align2::CENTER_CENTER,
                    "Try Again!",
                    egui::FontId::monospace(40.),
                    egui::Color32::RED,
                );
            }
            SpellingPhase::WordComplete => {
                painter.rect_filled(field, 0., egui::Color32::from_black_alpha(150));
                painter.text(
                    field.center(),
                    egui::Align2::CENTER_CENTER,
                    round.word(),
                    egui::FontId::monospace(52.),
                    hue_color(round.hue()),
                );
            }
        }
    }

    fn draw_gems(&self, round: &GemRound, origin: egui::Pos2, ui: &egui::Ui) {
        let painter = ui.painter();

        let texture = self.assets.gem();
        for gem in round.gems().iter().filter(|gem| !gem.collected()) {
            let rect = egui::Rect::from_center_size(
                to_screen(origin, gem.position()),
                texture.size_vec2() * SPRITE_SCALE,
            );
            painter.image(texture.id(), rect, full_uv(), egui::Color32::WHITE);
        }

        self.draw_player(origin, painter);

        painter.text(
            origin + egui::vec2(10., HUD_Y),
            egui::Align2::LEFT_CENTER,
            format!("Gems: {}", round.score()),
            egui::FontId::monospace(HUD_FONT_SIZE),
            egui::Color32::YELLOW,
        );
    }

    fn draw_player(&self, origin: egui::Pos2, painter: &egui::Painter) {
        let sheet = self.assets.sprite_sheet();
        let rect = egui::Rect::from_center_size(
            to_screen(origin, self.session.player()),
            sheet.frame_size() * SPRITE_SCALE,
        );
        painter.image(
            sheet.texture().id(),
            rect,
            sheet.uv(self.animation.frame()),
            egui::Color32::WHITE,
        );
    }
}

fn to_screen(origin: egui::Pos2, position: glam::Vec2) -> egui::Pos2 {
    origin + egui::vec2(position.x, position.y)
}

/// Fully saturated color for a hue in degrees.
fn hue_color(degrees: f32) -> egui::Color32 {
    egui::ecolor::Hsva::new(degrees.rem_euclid(360.) / 360., 1., 1., 1.).into()
}

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0., 0.), egui::pos2(1., 1.))
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Settings {
    pub show_debug: bool,
}

impl Settings {
    pub fn read(storage: &dyn Storage) -> Self {
        let mut settings = Self::default();

        if let Some(s) = storage.get_string("show_debug") &&
            let Ok(value) = s.parse::<bool>() { settings.show_debug = value };

        settings
    }

    pub fn write(&self, storage: &mut dyn Storage) {
        storage.set_string("show_debug", self.show_debug.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn settings_round_trip() {
        let mut storage = MemoryStorage::default();
        assert_eq!(Settings::read(&storage), Settings::default());

        Settings { show_debug: true }.write(&mut storage);
        assert_eq!(Settings::read(&storage), Settings { show_debug: true });

        storage.set_string("show_debug", "garbage".into());
        assert_eq!(Settings::read(&storage), Settings::default());
    }

    #[test]
    fn hue_colors() {
        assert_eq!(hue_color(0.), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(hue_color(120.), egui::Color32::from_rgb(0, 255, 0));
        assert_eq!(hue_color(240.), egui::Color32::from_rgb(0, 0, 255));
        assert_eq!(hue_color(360.), hue_color(0.));
    }

    #[test]
    fn screen_mapping() {
        let origin = egui::pos2(3., 4.);
        assert_eq!(to_screen(origin, glam::Vec2::new(10., 20.)), egui::pos2(13., 24.));
    }
}
