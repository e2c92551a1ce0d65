use crate::betting::{ActionError, ActionKind};
use crate::cards::Card;
use crate::config::{ConfigError, TableConfig};
use crate::deck::Deck;
use crate::hand::{Board, HandError, HoleCards};
use crate::position::{assign_positions, Position};
use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HandState {
    Prehand,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl HandState {
    pub fn label(self) -> &'static str {
        match self {
            HandState::Prehand => "PREHAND",
            HandState::Preflop => "PREFLOP",
            HandState::Flop => "FLOP",
            HandState::Turn => "TURN",
            HandState::River => "RIVER",
            HandState::Showdown => "SHOWDOWN",
        }
    }

    /// True on the four betting streets.
    pub fn is_betting(self) -> bool {
        matches!(self, HandState::Preflop | HandState::Flop | HandState::Turn | HandState::River)
    }

    /// Community cards the next deal must supply, if this street has a successor.
    pub fn cards_to_deal(self) -> Option<usize> {
        match self {
            HandState::Preflop => Some(3),
            HandState::Flop | HandState::Turn => Some(1),
            _ => None,
        }
    }

    fn from_board_len(len: usize) -> Option<Self> {
        match len {
            3 => Some(HandState::Flop),
            4 => Some(HandState::Turn),
            5 => Some(HandState::River),
            _ => None,
        }
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinds {
    pub small: u64,
    pub big: u64,
}

/// One accepted player action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct LogEntry {
    pub seat: usize,
    pub kind: ActionKind,
    /// Street total for bets and raises, chips paid for calls.
    pub amount: Option<u64>,
    pub street: HandState,
    pub timestamp: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },
    #[error("seat {seat} does not exist at a {players}-seat table")]
    SeatOutOfRange { seat: usize, players: usize },
    #[error("setup is only allowed before the hand starts (hand is {state})")]
    HandInProgress { state: HandState },
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("button seat is not set")]
    NoButton,
    #[error("hero seat is not set")]
    NoHero,
    #[error("need at least {min} players with chips, got {got}")]
    NotEnoughPlayers { min: usize, got: usize },
    #[error("stack {stack} for seat {seat} would overflow the table's chip count")]
    ChipOverflow { seat: usize, stack: u64 },
    #[error("invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: u64, big: u64 },
    #[error("cannot deal community cards during {state}")]
    NothingToDeal { state: HandState },
    #[error("betting on the current street is not finished")]
    BettingInProgress,
    #[error("expected {expected} community cards, got {got}")]
    CardCount { expected: usize, got: usize },
    #[error("card {0} is already in use")]
    CardInUse(Card),
    #[error("card {0} is not in the deck")]
    UnknownCard(Card),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Action(#[from] ActionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) seat: usize,
    pub(crate) stack: u64,
    pub(crate) position: Position,
    pub(crate) hole: Option<HoleCards>,
    pub(crate) has_folded: bool,
    pub(crate) is_all_in: bool,
    pub(crate) invested_this_street: u64,
    pub(crate) invested_this_hand: u64,
    pub(crate) last_action: Option<ActionKind>,
}

impl Player {
    fn new(seat: usize, stack: u64) -> Self {
        Self {
            seat,
            stack,
            position: Position::Unassigned,
            hole: None,
            has_folded: false,
            is_all_in: false,
            invested_this_street: 0,
            invested_this_hand: 0,
            last_action: None,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn stack(&self) -> u64 {
        self.stack
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    pub fn has_folded(&self) -> bool {
        self.has_folded
    }

    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }

    /// Chips committed on the current street
    pub fn invested_this_street(&self) -> u64 {
        self.invested_this_street
    }

    /// Chips committed over the whole hand, blinds included
    pub fn invested_this_hand(&self) -> u64 {
        self.invested_this_hand
    }

    /// The player's last action on the current street
    pub fn last_action(&self) -> Option<ActionKind> {
        self.last_action
    }

    /// Still in the hand and able to put more chips in.
    pub fn can_act(&self) -> bool {
        !self.has_folded && !self.is_all_in
    }

    fn clear_hand(&mut self) {
        self.hole = None;
        self.has_folded = false;
        self.is_all_in = false;
        self.invested_this_street = 0;
        self.invested_this_hand = 0;
        self.last_action = None;
    }

    /// Move up to `amount` chips from the stack; returns what was actually paid.
    pub(crate) fn commit(&mut self, amount: u64) -> u64 {
        let pay = self.stack.min(amount);
        self.stack -= pay;
        self.invested_this_street += pay;
        self.invested_this_hand += pay;
        if self.stack == 0 {
            self.is_all_in = true;
        }
        pay
    }
}

/// The authoritative snapshot of one table.
///
/// Every command takes `&mut self` and either applies completely or returns an
/// error with the table untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Table {
    pub(crate) config: TableConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) button_seat: Option<usize>,
    pub(crate) hero_seat: Option<usize>,
    pub(crate) blinds: Blinds,
    pub(crate) pot: u64,
    pub(crate) deck: Deck,
    pub(crate) board: Board,
    pub(crate) hand_state: HandState,
    pub(crate) current_actor: Option<usize>,
    pub(crate) last_aggressor: Option<usize>,
    pub(crate) amount_to_call: u64,
    /// Largest bet or raise increment on the current street, at least the big blind
    pub(crate) min_raise: u64,
    pub(crate) log: Vec<LogEntry>,
    hands_dealt: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self::from_valid_config(TableConfig::default())
    }
}

impl Table {
    /// An empty table: no players, PREHAND. Rejects an invalid configuration.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TableConfig) -> Self {
        let blinds = Blinds { small: config.small_blind, big: config.big_blind };
        Self {
            config,
            players: Vec::new(),
            button_seat: None,
            hero_seat: None,
            blinds,
            pot: 0,
            deck: Deck::empty(),
            board: Board::empty(),
            hand_state: HandState::Prehand,
            current_actor: None,
            last_aggressor: None,
            amount_to_call: 0,
            min_raise: blinds.big,
            log: Vec::new(),
            hands_dealt: 0,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn button_seat(&self) -> Option<usize> {
        self.button_seat
    }

    pub fn hero_seat(&self) -> Option<usize> {
        self.hero_seat
    }

    pub fn hero(&self) -> Option<&Player> {
        self.hero_seat.and_then(|s| self.players.get(s))
    }

    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand_state(&self) -> HandState {
        self.hand_state
    }

    pub fn current_actor(&self) -> Option<usize> {
        self.current_actor
    }

    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }

    /// Highest street commitment a player must match.
    pub fn amount_to_call(&self) -> u64 {
        self.amount_to_call
    }

    pub fn min_raise(&self) -> u64 {
        self.min_raise
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn log_recent(&self, n: usize) -> &[LogEntry] {
        let start = self.log.len().saturating_sub(n);
        &self.log[start..]
    }

    pub fn log_for_street(&self, street: HandState) -> impl Iterator<Item = &LogEntry> {
        self.log.iter().filter(move |e| e.street == street)
    }

    /// Players that have not folded.
    pub fn remaining_players(&self) -> usize {
        self.players.iter().filter(|p| !p.has_folded).count()
    }

    // ---- setup ----

    /// Seat `count` players with the default stack and reset everything downstream.
    pub fn set_player_count(&mut self, count: usize) -> Result<(), TableError> {
        let (min, max) = (self.config.min_players, self.config.max_players);
        if count < min || count > max {
            debug!("rejected player count {count}");
            return Err(TableError::PlayerCount { min, max, got: count });
        }
        let stack = self.config.default_stack;
        self.players = (0..count).map(|seat| Player::new(seat, stack)).collect();
        self.button_seat = None;
        self.hero_seat = None;
        self.hand_state = HandState::Prehand;
        self.clear_hand_fields();
        Ok(())
    }

    pub fn set_button_seat(&mut self, seat: Option<usize>) -> Result<(), TableError> {
        self.ensure_prehand()?;
        if let Some(s) = seat {
            self.ensure_seat(s)?;
        }
        self.button_seat = seat;
        Ok(())
    }

    pub fn set_hero_seat(&mut self, seat: Option<usize>) -> Result<(), TableError> {
        self.ensure_prehand()?;
        if let Some(s) = seat {
            self.ensure_seat(s)?;
        }
        self.hero_seat = seat;
        Ok(())
    }

    /// Set one seat's chips. The table's chips must stay countable in a `u64`,
    /// so pot and contribution totals can never overflow during a hand.
    pub fn update_player_stack(&mut self, seat: usize, stack: u64) -> Result<(), TableError> {
        self.ensure_prehand()?;
        self.ensure_seat(seat)?;
        let total = self
            .players
            .iter()
            .filter(|p| p.seat != seat)
            .try_fold(stack, |total, p| total.checked_add(p.stack));
        if total.is_none() {
            return Err(TableError::ChipOverflow { seat, stack });
        }
        self.players[seat].stack = stack;
        Ok(())
    }

    pub fn set_blinds(&mut self, small: u64, big: u64) -> Result<(), TableError> {
        self.ensure_prehand()?;
        if big == 0 || small > big {
            return Err(TableError::InvalidBlinds { small, big });
        }
        self.blinds = Blinds { small, big };
        self.min_raise = big;
        Ok(())
    }

    // ---- hand lifecycle ----

    /// Label seats, post blinds, shuffle a fresh deck and open preflop betting.
    pub fn start_hand(&mut self) -> Result<(), TableError> {
        let Some(button) = self.button_seat else {
            debug!("start_hand ignored: no button");
            return Err(TableError::NoButton);
        };
        self.ensure_prehand()?;
        let n = self.players.len();
        let funded = self.players.iter().filter(|p| p.stack > 0).count();
        if n < self.config.min_players || funded < 2 {
            return Err(TableError::NotEnoughPlayers { min: self.config.min_players.max(2), got: funded });
        }

        self.board = Board::empty();
        let positions = assign_positions(n, button);
        for (p, pos) in self.players.iter_mut().zip(positions) {
            p.clear_hand();
            p.position = pos;
            // busted seats sit the hand out
            if p.stack == 0 {
                p.has_folded = true;
            }
        }

        let (sb_seat, bb_seat) =
            if n == 2 { (button, (button + 1) % n) } else { ((button + 1) % n, (button + 2) % n) };
        let sb_paid = self.post_blind(sb_seat, self.blinds.small);
        let bb_paid = self.post_blind(bb_seat, self.blinds.big);

        self.pot = sb_paid + bb_paid;
        self.amount_to_call = self.blinds.big;
        self.min_raise = self.blinds.big;
        let seed = self.next_shuffle_seed();
        self.deck = Deck::shuffled(seed);
        self.last_aggressor = Some(bb_seat);
        self.log.clear();
        self.hand_state = HandState::Preflop;
        self.current_actor = self.next_actor_after(bb_seat);
        info!(
            "hand started: button {button}, blinds {sb_paid}/{bb_paid}, first to act {:?}",
            self.current_actor
        );
        Ok(())
    }

    fn post_blind(&mut self, seat: usize, amount: u64) -> u64 {
        let p = &mut self.players[seat];
        if p.has_folded {
            return 0;
        }
        p.commit(amount)
    }

    fn next_shuffle_seed(&mut self) -> u64 {
        let seed = match self.config.shuffle_seed {
            Some(base) => base.wrapping_add(self.hands_dealt),
            None => rand::rng().random(),
        };
        self.hands_dealt += 1;
        seed
    }

    /// Give the hero their hole cards.
    pub fn set_hero_hole_cards(&mut self, cards: HoleCards) -> Result<(), TableError> {
        let seat = self.hero_seat.ok_or(TableError::NoHero)?;
        self.set_hole_cards(seat, cards)
    }

    /// Give any seat hole cards, replacing (and releasing) what it held before.
    pub fn set_hole_cards(&mut self, seat: usize, cards: HoleCards) -> Result<(), TableError> {
        if self.hand_state == HandState::Prehand {
            return Err(TableError::NoHandInProgress);
        }
        self.ensure_seat(seat)?;
        let previous = self.players[seat].hole;
        for card in cards.as_array() {
            match self.deck.is_in_use(card) {
                None => return Err(TableError::UnknownCard(card)),
                Some(true) if !previous.is_some_and(|h| h.contains(card)) => {
                    return Err(TableError::CardInUse(card));
                }
                _ => {}
            }
        }
        if let Some(old) = previous {
            for card in old.as_array() {
                self.deck.release(card);
            }
        }
        for card in cards.as_array() {
            self.deck.mark_in_use(card);
        }
        self.players[seat].hole = Some(cards);
        Ok(())
    }

    /// Put the next street's cards on the board and open its betting.
    ///
    /// Three cards turn preflop into the flop; one card each for the turn and
    /// the river. Only allowed once the current street's betting has closed.
    pub fn deal_community_cards(&mut self, cards: &[Card]) -> Result<(), TableError> {
        let Some(expected) = self.hand_state.cards_to_deal() else {
            return Err(TableError::NothingToDeal { state: self.hand_state });
        };
        if self.current_actor.is_some() {
            return Err(TableError::BettingInProgress);
        }
        if cards.len() != expected {
            return Err(TableError::CardCount { expected, got: cards.len() });
        }
        let mut board = self.board.clone();
        board.try_extend(cards)?;
        for &card in cards {
            match self.deck.is_in_use(card) {
                None => return Err(TableError::UnknownCard(card)),
                Some(true) => return Err(TableError::CardInUse(card)),
                Some(false) => {}
            }
        }

        for &card in cards {
            self.deck.mark_in_use(card);
        }
        self.board = board;
        if let Some(state) = HandState::from_board_len(self.board.len()) {
            self.hand_state = state;
        }
        self.reset_street();
        let n = self.players.len();
        self.current_actor = self.button_seat.and_then(|b| self.first_actor_from((b + 1) % n));
        if self.current_actor.is_none() && self.hand_state == HandState::River {
            // everyone left is all-in: nothing more to bet
            self.hand_state = HandState::Showdown;
        }
        info!("dealt {:?}: now {}", cards.iter().map(|c| c.id()).collect::<Vec<_>>(), self.hand_state);
        Ok(())
    }

    fn reset_street(&mut self) {
        for p in &mut self.players {
            p.invested_this_street = 0;
            p.last_action = None;
        }
        self.amount_to_call = 0;
        self.min_raise = self.blinds.big;
        self.last_aggressor = None;
    }

    /// Move the button one seat and clear the hand. Stacks carry over.
    pub fn prepare_next_hand(&mut self) -> Result<(), TableError> {
        let Some(button) = self.button_seat else {
            debug!("prepare_next_hand ignored: no button");
            return Err(TableError::NoButton);
        };
        let n = self.players.len().max(1);
        self.button_seat = Some((button + 1) % n);
        self.hand_state = HandState::Prehand;
        self.clear_hand_fields();
        for p in &mut self.players {
            p.clear_hand();
            p.position = Position::Unassigned;
        }
        Ok(())
    }

    /// Back to an empty table.
    pub fn reset_game(&mut self) {
        *self = Table::from_valid_config(self.config.clone());
    }

    fn clear_hand_fields(&mut self) {
        self.pot = 0;
        self.deck = Deck::empty();
        self.board = Board::empty();
        self.log.clear();
        self.current_actor = None;
        self.last_aggressor = None;
        self.amount_to_call = 0;
        self.min_raise = self.blinds.big;
    }

    // ---- seat walking ----

    /// First seat that can act, walking forward from `start` inclusive.
    pub(crate) fn first_actor_from(&self, start: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n).map(|i| (start + i) % n).find(|&s| self.players[s].can_act())
    }

    /// First seat that can act after `seat`, wrapping back to `seat` last.
    pub(crate) fn next_actor_after(&self, seat: usize) -> Option<usize> {
        let n = self.players.len();
        if n == 0 {
            return None;
        }
        (1..=n).map(|i| (seat + i) % n).find(|&s| self.players[s].can_act())
    }

    fn ensure_prehand(&self) -> Result<(), TableError> {
        if self.hand_state != HandState::Prehand {
            return Err(TableError::HandInProgress { state: self.hand_state });
        }
        Ok(())
    }

    fn ensure_seat(&self, seat: usize) -> Result<(), TableError> {
        if seat >= self.players.len() {
            return Err(TableError::SeatOutOfRange { seat, players: self.players.len() });
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board: Vec<String> = self.board.as_slice().iter().map(|c| c.pretty()).collect();
        writeln!(
            f,
            "{} | pot {} | to call {} | board [{}]",
            self.hand_state,
            self.pot,
            self.amount_to_call,
            board.join(" ")
        )?;
        for p in &self.players {
            let marker = if self.current_actor == Some(p.seat) { '>' } else { ' ' };
            let hero = if self.hero_seat == Some(p.seat) { " (hero)" } else { "" };
            let status = if p.has_folded {
                " folded"
            } else if p.is_all_in {
                " all-in"
            } else {
                ""
            };
            let hole = p
                .hole
                .map(|h| format!(" {}{}", h.first().pretty(), h.second().pretty()))
                .unwrap_or_default();
            writeln!(
                f,
                "{marker} seat {} {:>3} stack {:>6} in {:>5}{hole}{status}{hero}",
                p.seat, p.position, p.stack, p.invested_this_street
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn table(n: usize, button: usize) -> Table {
        let mut t = Table::new(TableConfig::default().with_seed(11)).unwrap();
        t.set_player_count(n).unwrap();
        t.set_button_seat(Some(button)).unwrap();
        t
    }

    #[test]
    fn new_table_is_empty_prehand() {
        let t = Table::default();
        assert!(t.players().is_empty());
        assert_eq!(t.hand_state(), HandState::Prehand);
        assert_eq!(t.blinds(), Blinds { small: 1, big: 2 });
        assert!(t.deck().is_empty());
    }

    #[test]
    fn invalid_config_is_refused() {
        assert!(matches!(
            Table::new(TableConfig::default().with_blinds(0, 0)),
            Err(ConfigError::ZeroBigBlind)
        ));
        let wide = TableConfig { max_players: 12, ..TableConfig::default() };
        assert!(matches!(Table::new(wide), Err(ConfigError::PlayerBounds { max: 12, .. })));
    }

    #[test]
    fn stacks_are_bounded_by_the_chip_count() {
        let mut t = table(2, 0);
        let before = t.clone();
        assert_eq!(t.update_player_stack(0, u64::MAX), Err(TableError::ChipOverflow { seat: 0, stack: u64::MAX }));
        assert_eq!(t, before);
        t.update_player_stack(0, u64::MAX - 100).unwrap();
        // replacing a seat's own stack does not count it twice
        t.update_player_stack(0, u64::MAX - 100).unwrap();
    }

    #[test]
    fn player_count_bounds() {
        let mut t = Table::default();
        assert!(matches!(t.set_player_count(1), Err(TableError::PlayerCount { got: 1, .. })));
        assert!(matches!(t.set_player_count(11), Err(TableError::PlayerCount { got: 11, .. })));
        t.set_player_count(10).unwrap();
        assert!(t.players().iter().all(|p| p.stack() == 100));
    }

    #[test]
    fn start_hand_without_button_changes_nothing() {
        let mut t = Table::default();
        t.set_player_count(3).unwrap();
        let before = t.clone();
        assert_eq!(t.start_hand(), Err(TableError::NoButton));
        assert_eq!(t, before);
    }

    #[test]
    fn three_handed_blinds_and_first_actor() {
        let mut t = table(3, 0);
        t.start_hand().unwrap();
        assert_eq!(t.player(1).unwrap().invested_this_street(), 1);
        assert_eq!(t.player(2).unwrap().invested_this_street(), 2);
        assert_eq!(t.pot(), 3);
        assert_eq!(t.current_actor(), Some(0));
        assert_eq!(t.last_aggressor(), Some(2));
        assert_eq!(t.deck().len(), 52);
        assert_eq!(t.deck().in_use_count(), 0);
    }

    #[test]
    fn setup_is_locked_once_hand_starts() {
        let mut t = table(3, 0);
        t.start_hand().unwrap();
        assert!(matches!(t.update_player_stack(0, 5), Err(TableError::HandInProgress { .. })));
        assert!(matches!(t.set_button_seat(Some(1)), Err(TableError::HandInProgress { .. })));
        assert!(matches!(t.set_blinds(5, 10), Err(TableError::HandInProgress { .. })));
    }

    #[test]
    fn busted_seat_is_dealt_out() {
        let mut t = table(3, 0);
        t.update_player_stack(0, 0).unwrap();
        t.start_hand().unwrap();
        assert!(t.player(0).unwrap().has_folded());
        assert_eq!(t.current_actor(), Some(1));
    }

    #[test]
    fn hole_cards_mark_and_release_deck() {
        let mut t = table(2, 0);
        t.set_hero_seat(Some(1)).unwrap();
        t.start_hand().unwrap();
        let ak: HoleCards = "As Kd".parse().unwrap();
        t.set_hero_hole_cards(ak).unwrap();
        assert_eq!(t.deck().in_use_count(), 2);

        let aq: HoleCards = "As Qd".parse().unwrap();
        t.set_hero_hole_cards(aq).unwrap();
        assert_eq!(t.deck().is_in_use(Card::new(Rank::King, Suit::Diamonds)), Some(false));
        assert_eq!(t.deck().in_use_count(), 2);

        let clash: HoleCards = "Qd 2c".parse().unwrap();
        assert_eq!(t.set_hole_cards(0, clash), Err(TableError::CardInUse(clash.first())));
    }

    #[test]
    fn hero_cards_need_a_hero_and_a_hand() {
        let mut t = table(2, 0);
        let ak: HoleCards = "As Kd".parse().unwrap();
        assert_eq!(t.set_hero_hole_cards(ak), Err(TableError::NoHero));
        t.set_hero_seat(Some(0)).unwrap();
        assert_eq!(t.set_hero_hole_cards(ak), Err(TableError::NoHandInProgress));
    }

    #[test]
    fn seeded_tables_shuffle_identically() {
        let mut a = table(2, 0);
        let mut b = table(2, 0);
        a.start_hand().unwrap();
        b.start_hand().unwrap();
        assert_eq!(a.deck(), b.deck());
    }

    #[test]
    fn reset_game_returns_to_initial_state() {
        let mut t = table(4, 2);
        t.start_hand().unwrap();
        t.reset_game();
        assert_eq!(t, Table::new(TableConfig::default().with_seed(11)).unwrap());
    }
}
