use cubebit_display::{LedCube, MemoryStrip};
use cubebit_geom::Dims;
use cubebit_tron::{OccupancyMode, Step, TronConfig, TronGame};
use proptest::prelude::*;

fn occupancy() -> impl Strategy<Value = OccupancyMode> {
    prop_oneof![Just(OccupancyMode::Rendered), Just(OccupancyMode::Tracked)]
}

fn config() -> impl Strategy<Value = TronConfig> {
    (1usize..=4, 1usize..=25, any::<u64>(), occupancy()).prop_map(
        |(cycles, tail_len, seed, occupancy)| TronConfig {
            cycles,
            tail_len,
            occupancy,
            seed: Some(seed),
            ..TronConfig::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Heads stay inside, trails stay bounded, moves are single steps that never double back
    #[test]
    fn cycles_respect_movement_rules(config in config(), ticks in 1usize..80) {
        let dims = Dims::CUBE5;
        let mut game = TronGame::new(&config, dims).unwrap();
        let mut display = LedCube::new(dims, MemoryStrip::new()).unwrap();

        for _ in 0..ticks {
            let before: Vec<_> = game.cycles().iter().map(|c| (c.head(), c.direction())).collect();
            let report = game.tick(&mut display).unwrap();
            for ((cycle, (head, dir)), step) in game.cycles().iter().zip(before).zip(&report.steps) {
                prop_assert!(dims.contains(cycle.head()));
                prop_assert_eq!(cycle.trail().capacity(), config.tail_len);
                prop_assert!(cycle.trail().len() <= cycle.trail().capacity());
                prop_assert_eq!(cycle.trail().newest(), Some(head));
                match step {
                    Step::Stalled => {
                        prop_assert_eq!(cycle.head(), head);
                        prop_assert_eq!(cycle.direction(), dir);
                    }
                    Step::Straight => {
                        prop_assert_eq!(cycle.direction(), dir);
                        prop_assert_eq!(cycle.head(), head.step(dir));
                    }
                    Step::Turned(d) => {
                        prop_assert_ne!(*d, dir);
                        prop_assert_ne!(*d, dir.opposite());
                        prop_assert_eq!(cycle.direction(), *d);
                        prop_assert_eq!(cycle.head(), head.step(*d));
                    }
                }
            }
        }
        prop_assert_eq!(display.frames_rendered(), ticks as u64);
    }

    // The same seed replays the same run
    #[test]
    fn seeded_runs_are_deterministic(config in config(), ticks in 1usize..40) {
        let dims = Dims::CUBE5;
        let mut a = TronGame::new(&config, dims).unwrap();
        let mut b = TronGame::new(&config, dims).unwrap();
        let mut da = LedCube::new(dims, MemoryStrip::new()).unwrap();
        let mut db = LedCube::new(dims, MemoryStrip::new()).unwrap();
        for _ in 0..ticks {
            prop_assert_eq!(a.tick(&mut da).unwrap(), b.tick(&mut db).unwrap());
        }
        prop_assert_eq!(da.frame(), db.frame());
    }
}
