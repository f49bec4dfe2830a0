//! Shared fixtures for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use dominion_client::cards::{Card, CardCategory, SupplyPile};
use dominion_client::core::{GameSnapshot, Player, PlayerId};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn copper() -> Card {
    Card::treasure("Copper", 0)
}

pub fn silver() -> Card {
    Card::treasure("Silver", 3)
}

pub fn estate() -> Card {
    Card::victory("Estate", 2, 1)
}

pub fn village() -> Card {
    Card::action("Village", 3)
}

pub fn witch() -> Card {
    Card::action("Witch", 5).with_category(CardCategory::Attack)
}

/// The base supply used across tests.
pub fn base_supply() -> Vec<SupplyPile> {
    vec![
        SupplyPile::new(copper(), 46),
        SupplyPile::new(silver(), 40),
        SupplyPile::new(estate(), 8),
        SupplyPile::new(village(), 10),
        SupplyPile::new(witch(), 10),
        SupplyPile::new(Card::action("Market", 5), 10),
    ]
}

/// A player with one action, one buy, and the given money and hand.
pub fn player(id: u8, money: i64, hand: Vec<Card>) -> Player {
    Player::new(PlayerId::new(id))
        .with_name(format!("P{}", id))
        .with_actions(1)
        .with_buys(1)
        .with_money(money)
        .with_hand(hand)
}

/// A snapshot over `base_supply()` with the given players.
pub fn snapshot(current: u8, players: Vec<Player>) -> GameSnapshot {
    let mut snapshot = GameSnapshot::new(PlayerId::new(current));
    for pile in base_supply() {
        snapshot = snapshot.with_supply_pile(pile);
    }
    for p in players {
        snapshot = snapshot.with_player(p);
    }
    snapshot
        .with_possible_action("buyCard")
        .with_possible_action("endTurn")
}

/// Two players; the current one holds only treasure, so resolves to Buy.
pub fn buy_turn(current: u8, money: i64) -> GameSnapshot {
    let players = (0..2)
        .map(|id| {
            let money = if id == current { money } else { 0 };
            player(id, money, vec![copper(), copper(), estate()])
        })
        .collect();
    snapshot(current, players)
}

/// Two players; the current one holds a Village, so resolves to Action.
pub fn action_turn(current: u8) -> GameSnapshot {
    let players = (0..2)
        .map(|id| player(id, 2, vec![village(), copper(), copper()]))
        .collect();
    snapshot(current, players)
}

pub fn pile(snapshot: &GameSnapshot, name: &str) -> SupplyPile {
    snapshot
        .game_meta
        .supply_pile(name)
        .cloned()
        .expect("pile should be in the base supply")
}
