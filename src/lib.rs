//! Unicorn Toots, a small educational game implemented in pure Rust, using egui.
//!
//! The player steers a unicorn across a field and either collects the letters of a word in the
//! right order or picks up gems. The game logic lives in [`session`] and knows nothing about
//! rendering, the egui front end is in [`game`] and [`menu`].
//!

pub mod animation;
pub mod assets;
pub mod background;
pub mod direction;
pub mod entity;
pub mod game;
pub mod geometry;
pub mod icons;
pub mod menu;
pub mod noise;
pub mod options;
pub mod placement;
pub mod session;
pub mod words;
