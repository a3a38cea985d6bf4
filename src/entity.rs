//! Collectible entities and the collision test against them.

use glam::Vec2;

use crate::geometry::Hitbox;

/// Something the player can pick up by touching it.
pub trait Collectible {
    fn position(&self) -> Vec2;
    fn collected(&self) -> bool;
}

/// A letter of the word currently being spelled. Its index in the batch is its index in the word.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Letter {
    pub(crate) ch: char,
    pub(crate) position: Vec2,
    pub(crate) collected: bool,
}

impl Letter {
    pub fn new(ch: char, position: Vec2) -> Self {
        Letter {
            ch,
            position,
            collected: false,
        }
    }

    pub fn char(&self) -> char {
        self.ch
    }
}

impl Collectible for Letter {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn collected(&self) -> bool {
        self.collected
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gem {
    pub(crate) position: Vec2,
    pub(crate) collected: bool,
}

impl Gem {
    pub fn new(position: Vec2) -> Self {
        Gem {
            position,
            collected: false,
        }
    }
}

impl Collectible for Gem {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn collected(&self) -> bool {
        self.collected
    }
}

/// Return the index of the first uncollected entity whose hitbox (side length `entity_size`)
/// intersects `player`. Further overlaps in the same frame are ignored.
pub fn first_overlap<T: Collectible>(player: &Hitbox, entities: &[T], entity_size: f32) -> Option<usize> {
    entities.iter().position(|entity| {
        !entity.collected() && player.intersects(&Hitbox::centered(entity.position(), entity_size))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_overlap_skips_collected() {
        let player = Hitbox::centered(Vec2::new(100., 100.), 64.);
        let mut gems = vec![
            Gem::new(Vec2::new(400., 400.)),
            Gem::new(Vec2::new(110., 100.)),
            Gem::new(Vec2::new(90., 100.)),
        ];
        assert_eq!(first_overlap(&player, &gems, 30.), Some(1));

        gems[1].collected = true;
        assert_eq!(first_overlap(&player, &gems, 30.), Some(2));

        gems[2].collected = true;
        assert_eq!(first_overlap(&player, &gems, 30.), None);
    }

    #[test]
    fn letters() {
        let letter = Letter::new('C', Vec2::new(5., 6.));
        assert_eq!(letter.char(), 'C');
        assert_eq!(letter.position(), Vec2::new(5., 6.));
        assert!(!letter.collected());
    }
}
