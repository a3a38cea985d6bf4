use eframe::egui;

use unicorn_toots::assets::{self, Assets};
use unicorn_toots::game::{Game, Settings};
use unicorn_toots::options::Options;


fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([options.field_width, options.field_height])
            .with_resizable(false)
            .with_title("Unicorn Toots"),
        ..Default::default()
    };

    eframe::run_native(
        "Unicorn Toots",
        native_options,
        Box::new(move |cc| Ok(Box::new(Application::new(cc, options)?))),
    )
}

struct Application {
    game: Game,
}

impl Application {
    fn new(cc: &eframe::CreationContext<'_>, options: Options) -> Result<Self, assets::AssetError> {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let assets = Assets::load(&options.asset_root, &cc.egui_ctx)?;
        let words = assets::load_word_list(&assets::word_list_path(&options.asset_root))?;
        log::info!("loaded {} words", words.len());

        let settings = cc.storage.map(Settings::read).unwrap_or_default();

        Ok(Application {
            game: Game::new(&cc.egui_ctx, options, words, assets, settings),
        })
    }
}

impl eframe::App for Application {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.game.update(ui));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.game.settings().write(storage);
    }
}
