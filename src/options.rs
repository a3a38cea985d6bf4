use std::path::PathBuf;

/// The game options, e.g. the size of the play field, speeds and timings.
///
/// All distances are in pixels, all durations in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Width of the play field (and of the window).
    pub field_width: f32,
    /// Height of the play field (and of the window).
    pub field_height: f32,
    /// Distance between the play field's border and any placed entity.
    pub margin: f32,
    /// Height of the band at the top of the field which is reserved for the HUD.
    pub header_height: f32,
    /// Side length of the player's square hitbox.
    pub player_size: f32,
    /// Side length of a letter's square hitbox.
    pub letter_size: f32,
    /// Side length of a gem's square hitbox.
    pub gem_size: f32,
    /// Player speed in pixels per second.
    pub move_speed: f32,
    /// Desired minimum distance between two entities of the same batch.
    pub min_separation: f32,
    /// Number of random draws per entity before the separation rule is given up.
    pub placement_attempts: u32,
    /// Number of gems in each batch.
    pub gems_per_batch: usize,
    /// Time the "Try Again!" message is shown before the word is reshuffled.
    pub try_again_secs: f32,
    /// Time a completed word is celebrated before the next word is picked.
    pub word_complete_secs: f32,
    /// Hue rotation of the celebration text in degrees per second.
    pub hue_speed: f32,
    /// Output pixels per background noise sample.
    pub background_cell_size: usize,
    /// Distance in noise space between two neighboring background samples.
    pub noise_scale: f64,
    /// Directory containing the sprite sheet, the gem image, the word list and the word icons.
    pub asset_root: PathBuf,
    /// Seed for all game randomness. A random seed is used if `None`.
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            field_width: 800.,
            field_height: 600.,
            margin: 60.,
            header_height: 60.,
            player_size: 64.,
            letter_size: 30.,
            gem_size: 30.,
            move_speed: 200.,
            min_separation: 70.,
            placement_attempts: 100,
            gems_per_batch: 5,
            try_again_secs: 2.,
            word_complete_secs: 3.,
            hue_speed: 180.,
            background_cell_size: 8,
            noise_scale: 0.02,
            asset_root: PathBuf::from("assets"),
            seed: None,
        }
    }
}
