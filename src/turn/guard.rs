//! Client-side legality checks for buying and playing.
//!
//! Both gestures follow "select, then confirm": the first activation of a
//! pile or hand card selects it, activating the same target again tries to
//! act on it. A confirmation that is not legal right now is silently
//! declined. The server remains authoritative; these checks only keep the
//! client from sending intents that cannot succeed.
//!
//! Without a snapshot, or when the snapshot's current player cannot be
//! resolved, every activation is a no-op and every query is `false`.

use tracing::debug;

use super::phase::TurnPhase;
use crate::cards::{is_action, Card, SupplyPile};
use crate::core::{GameSnapshot, Intent, Player};
use crate::selection::SelectionState;

/// Guard over the currently held snapshot.
///
/// Cheap to build; create one per gesture.
#[derive(Clone, Copy, Debug)]
pub struct ActionGuard<'a> {
    snapshot: Option<&'a GameSnapshot>,
}

impl<'a> ActionGuard<'a> {
    /// Create a guard. `None` means no snapshot has arrived yet.
    #[must_use]
    pub fn new(snapshot: Option<&'a GameSnapshot>) -> Self {
        Self { snapshot }
    }

    /// The player whose turn it is, if resolvable.
    #[must_use]
    pub fn current_player(&self) -> Option<&'a Player> {
        self.snapshot.and_then(GameSnapshot::current_player)
    }

    /// The selected pile as it appears in the held snapshot.
    #[must_use]
    pub fn selected_pile(&self, selection: &SelectionState) -> Option<&'a SupplyPile> {
        let name = selection.selected_supply_pile.as_deref()?;
        self.snapshot?.game_meta.supply_pile(name)
    }

    /// The selected hand card as it appears in the current player's hand.
    #[must_use]
    pub fn selected_hand_card(&self, selection: &SelectionState) -> Option<&'a Card> {
        let name = selection.selected_hand_card.as_deref()?;
        self.current_player()?.hand_card(name)
    }

    /// Check if the current player can pay for `pile`.
    ///
    /// Always false while no pile is selected.
    #[must_use]
    pub fn can_afford(&self, selection: &SelectionState, pile: &SupplyPile) -> bool {
        if selection.selected_supply_pile.is_none() {
            return false;
        }
        self.current_player()
            .is_some_and(|player| pile.card.price <= player.money_available)
    }

    /// Check if buying from `pile` would be allowed: affordable and not
    /// exhausted.
    #[must_use]
    pub fn can_buy(&self, selection: &SelectionState, pile: &SupplyPile) -> bool {
        !pile.is_empty() && self.can_afford(selection, pile)
    }

    /// Check if `card` could be played right now: Action phase, an action
    /// card that is in the current player's hand, and an action left.
    #[must_use]
    pub fn can_play(&self, selection: &SelectionState, card: &Card) -> bool {
        selection.phase == TurnPhase::Action
            && is_action(card)
            && self.current_player().is_some_and(|player| {
                player.actions > 0 && player.hand_card(&card.name).is_some()
            })
    }

    /// Handle a click on a supply pile.
    ///
    /// A second click on the selected pile during the Buy phase tries to buy
    /// and clears the pile selection either way. Any other click selects the
    /// pile.
    ///
    /// The purchase is checked against the held snapshot's copy of the pile,
    /// not the one passed in. A pile missing from the snapshot is not bought.
    pub fn on_supply_pile_activated(
        &self,
        selection: &mut SelectionState,
        pile: &SupplyPile,
    ) -> Option<Intent> {
        if self.current_player().is_none() {
            debug!(pile = pile.key(), "pile activation ignored: no current player");
            return None;
        }

        if selection.is_pile_selected(pile.key()) && selection.phase == TurnPhase::Buy {
            let intent = match self.selected_pile(selection) {
                Some(held) if self.can_buy(selection, held) => Some(Intent::buy(held.key())),
                Some(held) => {
                    debug!(
                        pile = held.key(),
                        price = held.card.price,
                        remaining = held.remaining_count,
                        "purchase declined"
                    );
                    None
                }
                None => {
                    debug!(pile = pile.key(), "purchase declined: pile not in snapshot");
                    None
                }
            };
            selection.selected_supply_pile = None;
            return intent;
        }

        selection.selected_supply_pile = Some(pile.key().to_string());
        None
    }

    /// Handle a click on a card in the current player's hand.
    ///
    /// A second click on the selected card plays it when legal and clears the
    /// selection. When not legal, nothing happens and the card stays
    /// selected.
    pub fn on_hand_card_activated(
        &self,
        selection: &mut SelectionState,
        card: &Card,
    ) -> Option<Intent> {
        if self.current_player().is_none() {
            debug!(card = %card.name, "hand card activation ignored: no current player");
            return None;
        }

        if selection.is_hand_card_selected(&card.name) {
            if self.can_play(selection, card) {
                selection.selected_hand_card = None;
                return Some(Intent::play(card.name.as_str()));
            }
            debug!(card = %card.name, phase = %selection.phase, "play declined");
            return None;
        }

        selection.selected_hand_card = Some(card.name.clone());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn snapshot_with(player: Player) -> GameSnapshot {
        GameSnapshot::new(player.id)
            .with_player(player)
            .with_supply_pile(SupplyPile::new(Card::treasure("Silver", 3), 40))
    }

    fn buy_phase() -> SelectionState {
        let mut selection = SelectionState::default();
        selection.phase = TurnPhase::Buy;
        selection
    }

    #[test]
    fn test_can_afford_requires_selection() {
        let snapshot = snapshot_with(Player::new(PlayerId::new(0)).with_money(10));
        let guard = ActionGuard::new(Some(&snapshot));
        let pile = SupplyPile::new(Card::action("Market", 5), 10);

        let mut selection = SelectionState::default();
        assert!(!guard.can_afford(&selection, &pile));

        selection.selected_supply_pile = Some("Market".into());
        assert!(guard.can_afford(&selection, &pile));
    }

    #[test]
    fn test_can_afford_boundary() {
        let pile = SupplyPile::new(Card::action("Market", 5), 10);
        let mut selection = SelectionState::default();
        selection.selected_supply_pile = Some("Market".into());

        let poor = snapshot_with(Player::new(PlayerId::new(0)).with_money(4));
        assert!(!ActionGuard::new(Some(&poor)).can_afford(&selection, &pile));

        let exact = snapshot_with(Player::new(PlayerId::new(0)).with_money(5));
        assert!(ActionGuard::new(Some(&exact)).can_afford(&selection, &pile));
    }

    #[test]
    fn test_uses_money_available_not_money() {
        let pile = SupplyPile::new(Card::action("Market", 5), 10);
        let mut selection = SelectionState::default();
        selection.selected_supply_pile = Some("Market".into());

        let snapshot = snapshot_with(
            Player::new(PlayerId::new(0)).with_money(6).with_money_available(4),
        );
        assert!(!ActionGuard::new(Some(&snapshot)).can_afford(&selection, &pile));
    }

    #[test]
    fn test_no_snapshot_is_noop() {
        let guard = ActionGuard::new(None);
        let mut selection = buy_phase();
        let pile = SupplyPile::new(Card::treasure("Silver", 3), 40);
        let card = Card::action("Village", 3);

        assert_eq!(guard.on_supply_pile_activated(&mut selection, &pile), None);
        assert_eq!(guard.on_hand_card_activated(&mut selection, &card), None);
        assert_eq!(selection.selected_supply_pile, None);
        assert_eq!(selection.selected_hand_card, None);

        selection.selected_supply_pile = Some("Silver".into());
        assert!(!guard.can_afford(&selection, &pile));
        assert!(!guard.can_play(&selection, &card));
    }

    #[test]
    fn test_buy_gesture() {
        let snapshot = snapshot_with(Player::new(PlayerId::new(0)).with_money(3).with_buys(1));
        let guard = ActionGuard::new(Some(&snapshot));
        let pile = snapshot.game_meta.supply_pile("Silver").unwrap().clone();
        let mut selection = buy_phase();

        assert_eq!(guard.on_supply_pile_activated(&mut selection, &pile), None);
        assert!(selection.is_pile_selected("Silver"));

        assert_eq!(
            guard.on_supply_pile_activated(&mut selection, &pile),
            Some(Intent::buy("Silver"))
        );
        assert_eq!(selection.selected_supply_pile, None);
    }

    #[test]
    fn test_declined_buy_still_clears() {
        let snapshot = snapshot_with(Player::new(PlayerId::new(0)).with_money(2));
        let guard = ActionGuard::new(Some(&snapshot));
        let pile = SupplyPile::new(Card::treasure("Silver", 3), 40);
        let mut selection = buy_phase();

        guard.on_supply_pile_activated(&mut selection, &pile);
        assert_eq!(guard.on_supply_pile_activated(&mut selection, &pile), None);
        assert_eq!(selection.selected_supply_pile, None);
    }

    #[test]
    fn test_empty_pile_not_bought() {
        let pile = SupplyPile::new(Card::victory("Province", 8, 6), 0);
        let snapshot = snapshot_with(Player::new(PlayerId::new(0)).with_money(8))
            .with_supply_pile(pile.clone());
        let guard = ActionGuard::new(Some(&snapshot));
        let mut selection = buy_phase();

        guard.on_supply_pile_activated(&mut selection, &pile);
        assert!(guard.can_afford(&selection, &pile));
        assert!(!guard.can_buy(&selection, &pile));
        assert_eq!(guard.on_supply_pile_activated(&mut selection, &pile), None);
    }

    #[test]
    fn test_buy_checks_held_pile() {
        let player = Player::new(PlayerId::new(0)).with_money(3);
        let snapshot = GameSnapshot::new(player.id)
            .with_player(player)
            .with_supply_pile(SupplyPile::new(Card::treasure("Silver", 3), 0));
        let guard = ActionGuard::new(Some(&snapshot));
        let stale = SupplyPile::new(Card::treasure("Silver", 3), 1);
        let mut selection = buy_phase();

        guard.on_supply_pile_activated(&mut selection, &stale);
        assert_eq!(guard.on_supply_pile_activated(&mut selection, &stale), None);
        assert_eq!(selection.selected_supply_pile, None);
    }

    #[test]
    fn test_pile_missing_from_snapshot_not_bought() {
        let snapshot = snapshot_with(Player::new(PlayerId::new(0)).with_money(8));
        let guard = ActionGuard::new(Some(&snapshot));
        let gold = SupplyPile::new(Card::treasure("Gold", 6), 30);
        let mut selection = buy_phase();

        guard.on_supply_pile_activated(&mut selection, &gold);
        assert_eq!(guard.on_supply_pile_activated(&mut selection, &gold), None);
    }

    #[test]
    fn test_second_click_in_action_phase_only_reselects() {
        let snapshot = snapshot_with(Player::new(PlayerId::new(0)).with_money(5));
        let guard = ActionGuard::new(Some(&snapshot));
        let pile = SupplyPile::new(Card::treasure("Silver", 3), 40);
        let mut selection = SelectionState::default();

        guard.on_supply_pile_activated(&mut selection, &pile);
        assert_eq!(guard.on_supply_pile_activated(&mut selection, &pile), None);
        assert!(selection.is_pile_selected("Silver"));
    }

    #[test]
    fn test_switching_piles() {
        let snapshot = snapshot_with(Player::new(PlayerId::new(0)).with_money(5));
        let guard = ActionGuard::new(Some(&snapshot));
        let silver = SupplyPile::new(Card::treasure("Silver", 3), 40);
        let smithy = SupplyPile::new(Card::action("Smithy", 4), 10);
        let mut selection = buy_phase();

        guard.on_supply_pile_activated(&mut selection, &silver);
        assert_eq!(guard.on_supply_pile_activated(&mut selection, &smithy), None);
        assert!(selection.is_pile_selected("Smithy"));
    }

    #[test]
    fn test_play_gesture() {
        let village = Card::action("Village", 3);
        let snapshot = snapshot_with(
            Player::new(PlayerId::new(0)).with_actions(1).with_hand(vec![village.clone()]),
        );
        let guard = ActionGuard::new(Some(&snapshot));
        let mut selection = SelectionState::default();

        assert_eq!(guard.on_hand_card_activated(&mut selection, &village), None);
        assert_eq!(guard.selected_hand_card(&selection), Some(&village));

        assert_eq!(
            guard.on_hand_card_activated(&mut selection, &village),
            Some(Intent::play("Village"))
        );
        assert_eq!(selection.selected_hand_card, None);
    }

    #[test]
    fn test_declined_play_keeps_selection() {
        let copper = Card::treasure("Copper", 0);
        let snapshot = snapshot_with(
            Player::new(PlayerId::new(0)).with_actions(1).with_hand(vec![copper.clone()]),
        );
        let guard = ActionGuard::new(Some(&snapshot));
        let mut selection = SelectionState::default();

        guard.on_hand_card_activated(&mut selection, &copper);
        assert_eq!(guard.on_hand_card_activated(&mut selection, &copper), None);
        assert!(selection.is_hand_card_selected("Copper"));
    }

    #[test]
    fn test_play_requires_actions_and_phase() {
        let village = Card::action("Village", 3);

        let tired = snapshot_with(
            Player::new(PlayerId::new(0)).with_actions(0).with_hand(vec![village.clone()]),
        );
        let mut selection = SelectionState::default();
        selection.selected_hand_card = Some("Village".into());
        assert!(!ActionGuard::new(Some(&tired)).can_play(&selection, &village));

        let rested = snapshot_with(
            Player::new(PlayerId::new(0)).with_actions(2).with_hand(vec![village.clone()]),
        );
        selection.phase = TurnPhase::Buy;
        assert!(!ActionGuard::new(Some(&rested)).can_play(&selection, &village));
    }

    #[test]
    fn test_play_requires_card_in_hand() {
        let village = Card::action("Village", 3);
        let smithy = Card::action("Smithy", 4);
        let snapshot = snapshot_with(
            Player::new(PlayerId::new(0)).with_actions(1).with_hand(vec![village]),
        );
        let guard = ActionGuard::new(Some(&snapshot));
        let mut selection = SelectionState::default();

        guard.on_hand_card_activated(&mut selection, &smithy);
        assert!(!guard.can_play(&selection, &smithy));
        assert_eq!(guard.on_hand_card_activated(&mut selection, &smithy), None);
        assert!(selection.is_hand_card_selected("Smithy"));
    }

    #[test]
    fn test_selected_pile_resolves_from_snapshot() {
        let snapshot = snapshot_with(Player::new(PlayerId::new(0)));
        let guard = ActionGuard::new(Some(&snapshot));
        let mut selection = SelectionState::default();

        selection.selected_supply_pile = Some("Silver".into());
        assert_eq!(guard.selected_pile(&selection).map(|p| p.remaining_count), Some(40));

        selection.selected_supply_pile = Some("Gold".into());
        assert!(guard.selected_pile(&selection).is_none());
    }
}
