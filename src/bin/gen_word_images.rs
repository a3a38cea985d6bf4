//! Draw the word icons and save them into `assets/words`.

use std::path::Path;

use unicorn_toots::icons;

fn main() -> Result<(), icons::IconError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dir = Path::new("assets/words");
    let count = icons::write_all(dir)?;
    log::info!("generated {count} word images in {}", dir.display());

    Ok(())
}
