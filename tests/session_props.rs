use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use unicorn_toots::direction::{Direction, Movement};
use unicorn_toots::entity::Collectible;
use unicorn_toots::options::Options;
use unicorn_toots::session::{GameSession, MenuChoice, Mode, SessionEvent, TickInput};
use unicorn_toots::words::WordList;

fn any_movement() -> impl Strategy<Value = Movement> {
    prop::array::uniform4(any::<bool>()).prop_map(|held| {
        let mut movement = Movement::new();
        movement.set(Direction::Right, held[0]);
        movement.set(Direction::Up, held[1]);
        movement.set(Direction::Left, held[2]);
        movement.set(Direction::Down, held[3]);
        movement
    })
}

fn any_tick() -> impl Strategy<Value = TickInput> {
    (0.0_f32..0.5, any_movement()).prop_map(|(dt, movement)| TickInput {
        dt,
        movement,
        ..Default::default()
    })
}

fn session(seed: u64, choice: MenuChoice) -> GameSession {
    let words = WordList::new(["CAT", "MOON", "SUN"]).unwrap();
    let mut session = GameSession::with_rng(Options::default(), words, Pcg32::seed_from_u64(seed));
    session.tick(&TickInput {
        menu_choice: Some(choice),
        ..Default::default()
    });
    session
}

proptest! {
    #[test]
    fn player_stays_on_the_field(
        seed in any::<u64>(),
        gems in any::<bool>(),
        ticks in prop::collection::vec(any_tick(), 1..200),
    ) {
        let choice = if gems { MenuChoice::Gems } else { MenuChoice::Spelling };
        let mut session = session(seed, choice);
        let half = session.options().player_size / 2.;
        let (width, height) = (session.options().field_width, session.options().field_height);

        for tick in &ticks {
            session.tick(tick);
            let player = session.player();
            prop_assert!(player.x >= half && player.x <= width - half, "{player}");
            prop_assert!(player.y >= half && player.y <= height - half, "{player}");
        }
    }

    #[test]
    fn gem_score_only_grows(
        seed in any::<u64>(),
        ticks in prop::collection::vec(any_tick(), 1..300),
    ) {
        let mut session = session(seed, MenuChoice::Gems);
        let batch = session.options().gems_per_batch;
        let mut last_score = 0;

        for tick in &ticks {
            let events = session.tick(tick);
            let collected = events
                .iter()
                .filter(|event| matches!(event, SessionEvent::GemCollected { .. }))
                .count();
            prop_assert!(collected <= 1);

            let Mode::Gems(round) = session.mode() else {
                panic!("left gem mode without cancel");
            };
            prop_assert_eq!(round.score(), last_score + collected as u32);
            prop_assert_eq!(round.gems().len(), batch);
            last_score = round.score();
        }
    }

    #[test]
    fn spelling_word_comes_from_the_list(
        seed in any::<u64>(),
        ticks in prop::collection::vec(any_tick(), 1..300),
    ) {
        let mut session = session(seed, MenuChoice::Spelling);

        for tick in &ticks {
            session.tick(tick);
            let Mode::Spelling(round) = session.mode() else {
                panic!("left spelling mode without cancel");
            };
            prop_assert!(["CAT", "MOON", "SUN"].contains(&round.word()));
            prop_assert_eq!(round.letters().len(), round.word().len());
            prop_assert!(round.progress() <= round.word().len());
            let collected = round.letters().iter().filter(|letter| letter.collected()).count();
            prop_assert_eq!(collected, round.progress());
        }
    }
}

#[test]
fn cancel_always_returns_to_the_menu() {
    for choice in [MenuChoice::Spelling, MenuChoice::Gems] {
        let mut session = session(7, choice);
        let events = session.tick(&TickInput {
            dt: 0.016,
            cancel: true,
            ..Default::default()
        });
        assert_eq!(events, vec![SessionEvent::EnteredMenu]);
        assert_eq!(*session.mode(), Mode::Menu);
    }
}
