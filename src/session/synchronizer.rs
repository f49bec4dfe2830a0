//! The client session: held snapshot, selection state, and gesture entry
//! points.
//!
//! `Session` is the only owner of mutable client state. It changes through
//! two doors:
//! - `on_snapshot`, when the game service delivers a new snapshot
//! - gesture methods (`toggle_card`, `on_supply_pile_activated`, ...)
//!
//! Everything else is a read-only query for rendering.
//!
//! ## Turnover
//!
//! When a snapshot names a different current player than the previous one
//! (the first snapshot always counts as different), the setup draft and both
//! gesture selections are cleared and the phase is derived afresh. A
//! snapshot for the same player leaves the selection and the phase alone;
//! turnover is the only thing that changes the phase.

use tracing::{debug, info, warn};

use crate::cards::{Card, PileGroups, SupplyPile};
use crate::core::{ClientConfig, ClientError, GameSnapshot, Intent, Player, PlayerId};
use crate::selection::{HoverTracker, Membership, SelectionCycler, SelectionState};
use crate::turn::{resolve_phase, ActionGuard, TurnPhase};

/// What `on_snapshot` did with a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// The current player changed; selection was reset.
    TurnChanged {
        previous: Option<PlayerId>,
        current: PlayerId,
    },
    /// Same current player; selection kept.
    SameTurn,
}

/// The most recent intent handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InFlightIntent {
    pub intent: Intent,
    /// Current player when the intent was issued. `None` before any snapshot.
    pub issued_for: Option<PlayerId>,
}

/// Client session state.
///
/// ## Example
///
/// ```
/// use dominion_client::cards::{Card, SupplyPile};
/// use dominion_client::core::{GameSnapshot, Intent, Player, PlayerId};
/// use dominion_client::session::Session;
/// use dominion_client::turn::TurnPhase;
///
/// let mut session = Session::default();
/// let silver = SupplyPile::new(Card::treasure("Silver", 3), 40);
///
/// session.on_snapshot(
///     GameSnapshot::new(PlayerId::new(0))
///         .with_player(Player::new(PlayerId::new(0)).with_buys(1).with_money(3))
///         .with_supply_pile(silver.clone()),
/// );
/// assert_eq!(session.phase(), TurnPhase::Buy);
///
/// assert_eq!(session.on_supply_pile_activated(&silver), None);
/// assert_eq!(session.on_supply_pile_activated(&silver), Some(Intent::buy("Silver")));
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: ClientConfig,
    snapshot: Option<GameSnapshot>,
    current_player_id: Option<PlayerId>,
    selection: SelectionState,
    hover: HoverTracker,
    player_count: u8,
    in_flight: Option<InFlightIntent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_valid_config(ClientConfig::default())
    }
}

impl Session {
    /// Create a session from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ClientConfig) -> Self {
        let cycler = SelectionCycler::with_cap(config.max_included_cards);
        Self {
            player_count: config.default_player_count,
            config,
            snapshot: None,
            current_player_id: None,
            selection: SelectionState::new(cycler),
            hover: HoverTracker::new(),
            in_flight: None,
        }
    }

    // === Snapshot Synchronization ===

    /// Apply a snapshot from the game service.
    ///
    /// Snapshots must be handed in the order they were received.
    pub fn on_snapshot(&mut self, snapshot: GameSnapshot) -> SnapshotOutcome {
        let incoming = snapshot.current_player_id();
        self.snapshot = Some(snapshot);

        if let Some(pending) = self.in_flight.take() {
            if pending.issued_for != Some(incoming) {
                debug!(
                    intent = %pending.intent,
                    current = %incoming,
                    "snapshot arrived after the issuing player's turn ended"
                );
            }
        }

        let resolved = self.current_player().map(resolve_phase);
        if resolved.is_none() {
            warn!(current = %incoming, "snapshot has no player for the current player id");
        }

        // Same player: selection and phase stay as they are.
        if self.current_player_id == Some(incoming) {
            return SnapshotOutcome::SameTurn;
        }

        let previous = self.current_player_id.replace(incoming);
        let phase = resolved.unwrap_or_default();
        self.selection.reset(phase);
        info!(
            previous = ?previous,
            current = %incoming,
            phase = %phase,
            "turn changed, selection reset"
        );

        SnapshotOutcome::TurnChanged {
            previous,
            current: incoming,
        }
    }

    // === Setup Gestures ===

    /// Cycle a card through neutral / included / excluded.
    pub fn toggle_card(&mut self, card_name: &str) -> Membership {
        let membership = self.selection.cycler.toggle(card_name);
        debug!(card = card_name, membership = ?membership, "setup card toggled");
        membership
    }

    /// Choose the number of players for the next game.
    pub fn select_player_count(&mut self, count: u8) -> Result<(), ClientError> {
        if !self.config.allows_player_count(count) {
            return Err(ClientError::InvalidPlayerCount {
                requested: count,
                allowed: self.config.player_count_options.clone(),
            });
        }
        self.player_count = count;
        Ok(())
    }

    /// Confirm setup: start a game with the current draft.
    pub fn start_game(&mut self) -> Intent {
        let intent = Intent::StartGame {
            player_count: self.player_count,
            included_card_names: self.selection.cycler.included().to_vec(),
            excluded_card_names: self.selection.cycler.excluded().to_vec(),
        };
        self.emit(intent)
    }

    /// Ask the server to reset the game.
    pub fn reset_game(&mut self) -> Intent {
        self.emit(Intent::ResetGame)
    }

    // === In-Game Gestures ===

    /// End the current player's turn. Clears the selected pile and card.
    pub fn end_turn(&mut self) -> Intent {
        self.selection.clear_targets();
        self.emit(Intent::EndTurn)
    }

    /// Click on a supply pile. See `ActionGuard::on_supply_pile_activated`.
    pub fn on_supply_pile_activated(&mut self, pile: &SupplyPile) -> Option<Intent> {
        let guard = ActionGuard::new(self.snapshot.as_ref());
        let intent = guard.on_supply_pile_activated(&mut self.selection, pile);
        intent.map(|intent| self.emit(intent))
    }

    /// Click on a hand card. See `ActionGuard::on_hand_card_activated`.
    pub fn on_hand_card_activated(&mut self, card: &Card) -> Option<Intent> {
        let guard = ActionGuard::new(self.snapshot.as_ref());
        let intent = guard.on_hand_card_activated(&mut self.selection, card);
        intent.map(|intent| self.emit(intent))
    }

    /// Buy button: buy the selected pile if it is affordable and not empty.
    ///
    /// Clears the pile selection when an intent is emitted.
    pub fn buy_selected(&mut self) -> Option<Intent> {
        let guard = ActionGuard::new(self.snapshot.as_ref());
        let intent = guard
            .selected_pile(&self.selection)
            .filter(|pile| guard.can_buy(&self.selection, pile))
            .map(|pile| Intent::buy(pile.key()));

        match intent {
            Some(intent) => {
                self.selection.selected_supply_pile = None;
                Some(self.emit(intent))
            }
            None => {
                debug!("buy button ignored: nothing affordable selected");
                None
            }
        }
    }

    /// Pointer entered a card.
    pub fn card_mouse_enter(&mut self, card_name: impl Into<String>) {
        self.hover.enter(card_name);
    }

    /// Pointer left a card.
    pub fn card_mouse_leave(&mut self) {
        self.hover.leave();
    }

    fn emit(&mut self, intent: Intent) -> Intent {
        info!(intent = %intent, "intent emitted");
        self.in_flight = Some(InFlightIntent {
            intent: intent.clone(),
            issued_for: self.current_player_id,
        });
        intent
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The held snapshot, if one has arrived.
    #[must_use]
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.snapshot.as_ref().and_then(GameSnapshot::current_player)
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.selection.phase
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The selected supply pile, as found in the held snapshot.
    #[must_use]
    pub fn selected_supply_pile(&self) -> Option<&SupplyPile> {
        ActionGuard::new(self.snapshot.as_ref()).selected_pile(&self.selection)
    }

    /// The selected hand card, as found in the current player's hand.
    #[must_use]
    pub fn selected_hand_card(&self) -> Option<&Card> {
        ActionGuard::new(self.snapshot.as_ref()).selected_hand_card(&self.selection)
    }

    /// Setup membership of a card name.
    #[must_use]
    pub fn membership(&self, card_name: &str) -> Membership {
        self.selection.cycler.membership(card_name)
    }

    #[must_use]
    pub fn included_cards(&self) -> &[String] {
        self.selection.cycler.included()
    }

    #[must_use]
    pub fn excluded_cards(&self) -> &[String] {
        self.selection.cycler.excluded()
    }

    /// Cards offered on the setup screen with their current membership.
    #[must_use]
    pub fn setup_pool(&self) -> Vec<(&Card, Membership)> {
        self.snapshot
            .iter()
            .flat_map(|s| s.game_meta.cards_available.iter())
            .map(|card| (card, self.membership(&card.name)))
            .collect()
    }

    /// Supply piles grouped into treasure / victory / other, each by price.
    #[must_use]
    pub fn pile_groups(&self) -> PileGroups<'_> {
        match &self.snapshot {
            Some(snapshot) => PileGroups::from_piles(snapshot.game_meta.supply_piles.iter()),
            None => PileGroups::default(),
        }
    }

    /// Check if the server currently allows the named action.
    #[must_use]
    pub fn is_action_available(&self, action_name: &str) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|s| s.is_action_available(action_name))
    }

    /// See `ActionGuard::can_afford`.
    #[must_use]
    pub fn can_afford(&self, pile: &SupplyPile) -> bool {
        ActionGuard::new(self.snapshot.as_ref()).can_afford(&self.selection, pile)
    }

    /// See `ActionGuard::can_play`.
    #[must_use]
    pub fn can_play(&self, card: &Card) -> bool {
        ActionGuard::new(self.snapshot.as_ref()).can_play(&self.selection, card)
    }

    /// Check if the buy button would emit an intent.
    #[must_use]
    pub fn can_buy_selected(&self) -> bool {
        let guard = ActionGuard::new(self.snapshot.as_ref());
        guard
            .selected_pile(&self.selection)
            .is_some_and(|pile| guard.can_buy(&self.selection, pile))
    }

    #[must_use]
    pub fn hovered_card(&self) -> Option<&str> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    #[must_use]
    pub fn player_count_options(&self) -> &[u8] {
        &self.config.player_count_options
    }

    /// The last emitted intent, until the next snapshot arrives.
    #[must_use]
    pub fn in_flight(&self) -> Option<&InFlightIntent> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|s| s.game_over)
    }
}
