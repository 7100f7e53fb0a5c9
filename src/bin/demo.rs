//! End-to-end demo: seats bot agents and plays hands until the requested
//! count or until only one funded player remains.
//!
//! ```sh
//! RUST_LOG=debug cargo run --features cli --bin holdem-demo -- 20
//! ```

use holdem_engine::agents::{run_hand, Caller, RandomBot, SeatAgent};
use holdem_engine::table::Table;

fn main() {
    env_logger::init();
    let hands: usize = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(10);

    let mut table = Table::new(
        &[("alice", 1000), ("bob", 1000), ("carol", 1000), ("dave", 1000)],
        5,
        10,
    );
    let mut agents: Vec<Box<dyn SeatAgent>> = vec![
        Box::new(RandomBot::seeded(1)),
        Box::new(Caller),
        Box::new(RandomBot::seeded(2).with_aggression(0.5)),
        Box::new(RandomBot::seeded(3)),
    ];

    for hand in 1..=hands {
        println!("--- hand {hand} ---");
        if let Err(e) = run_hand(&mut table, &mut agents) {
            println!("stopping: {e}");
            break;
        }
        for event in table.drain_events() {
            println!("{event}");
        }
    }

    println!("--- final stacks ---");
    for player in table.players() {
        println!("{}: {}", player.name(), player.stack());
    }
}
