use eframe::egui;

use crate::game::Settings;
use crate::session::MenuChoice;

/// The title screen with one button per game mode.
pub struct MainMenu {
    settings: Settings,
}

impl MainMenu {
    const TITLE: &'static str = "UNICORN TOOTS";
    const BUTTON_SIZE: egui::Vec2 = egui::vec2(300., 60.);

    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Draw the menu onto a field whose top left corner is at `origin`. `direction` is the
    /// background's scroll direction, shown when debugging.
    pub fn update(&mut self, ui: &mut egui::Ui, origin: egui::Pos2, size: egui::Vec2, direction: [f64; 2]) -> Vec<MenuEvent> {
        let mut events = vec![];
        let center = origin + size / 2.;

        ui.painter().text(
            center - egui::vec2(0., 120.),
            egui::Align2::CENTER_CENTER,
            Self::TITLE,
            egui::FontId::monospace(52.),
            egui::Color32::YELLOW,
        );

        let spelling_rect = egui::Rect::from_center_size(center - egui::vec2(0., 20.), Self::BUTTON_SIZE);
        let spelling_label = format!("{} SPELLING MODE", egui_phosphor::regular::PENCIL_SIMPLE);
        if Self::mode_button(ui, spelling_rect, spelling_label, egui::Color32::DARK_GREEN).clicked() {
            events.push(MenuEvent::Start(MenuChoice::Spelling));
        }

        let gems_rect = egui::Rect::from_center_size(center + egui::vec2(0., 50.), Self::BUTTON_SIZE);
        let gems_label = format!("{} GEM MODE", egui_phosphor::regular::DIAMOND);
        if Self::mode_button(ui, gems_rect, gems_label, egui::Color32::DARK_BLUE).clicked() {
            events.push(MenuEvent::Start(MenuChoice::Gems));
        }

        let checkbox_rect = egui::Rect::from_min_size(
            origin + egui::vec2(size.x - 110., 10.),
            egui::vec2(100., 24.),
        );
        if ui
            .put(checkbox_rect, egui::Checkbox::new(&mut self.settings.show_debug, "Debug"))
            .clicked()
        {
            events.push(MenuEvent::SettingsChanged(self.settings));
        }

        if self.settings.show_debug {
            ui.painter().text(
                origin + egui::vec2(10., size.y - 30.),
                egui::Align2::LEFT_CENTER,
                format!("DirX: {:.2}, DirY: {:.2}", direction[0], direction[1]),
                egui::FontId::monospace(20.),
                egui::Color32::WHITE,
            );
            let reroll_rect = egui::Rect::from_min_size(
                origin + egui::vec2(size.x - 50., size.y - 50.),
                egui::vec2(40., 40.),
            );
            let reroll = egui::Button::new(
                egui::RichText::new(egui_phosphor::regular::ARROWS_CLOCKWISE).size(20.),
            );
            if ui.put(reroll_rect, reroll).on_hover_text("New background direction").clicked() {
                events.push(MenuEvent::RandomizeDirection);
            }
        }

        events
    }

    fn mode_button(ui: &mut egui::Ui, rect: egui::Rect, label: String, fill: egui::Color32) -> egui::Response {
        let text = egui::RichText::new(label)
            .size(24.)
            .color(egui::Color32::WHITE);
        ui.put(rect, egui::Button::new(text).fill(fill))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuEvent {
    Start(MenuChoice),
    RandomizeDirection,
    SettingsChanged(Settings),
}
