//! Player actions and the betting-round controller.
//!
//! After every accepted action the table decides, in this order:
//! 1. one player left in the hand: showdown;
//! 2. betting round closed: clear the actor (river goes to showdown);
//! 3. otherwise hand the turn to the next seat that can still act.

use crate::table::{HandState, LogEntry, Table};
use chrono::Utc;
use log::{debug, info};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Fold => "FOLD",
            ActionKind::Check => "CHECK",
            ActionKind::Call => "CALL",
            ActionKind::Bet => "BET",
            ActionKind::Raise => "RAISE",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A player's decision. Bets and raises carry the player's new total
/// commitment for the street, not the chips added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Fold,
    Check,
    Call,
    Bet(u64),
    Raise(u64),
}

impl PlayerAction {
    pub fn kind(self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no betting round in progress (hand is {state})")]
    NoBettingRound { state: HandState },
    #[error("seat {seat} is not the current actor ({current:?})")]
    NotYourTurn { seat: usize, current: Option<usize> },
    #[error("cannot check facing {to_call} to call")]
    CannotCheck { to_call: u64 },
    #[error("not enough chips: need {needed}, stack {stack}")]
    InsufficientStack { needed: u64, stack: u64 },
    #[error("target must exceed amount to call: current {current}, target {target}")]
    TargetTooLow { current: u64, target: u64 },
}

/// What the player to act may do, in chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalActions {
    pub can_check: bool,
    pub can_call: bool,
    /// Chips still owed to match the amount to call
    pub to_call: u64,
    /// Smallest legal bet/raise total
    pub min_raise_to: u64,
    /// Largest possible bet/raise total (all-in)
    pub max_raise_to: u64,
}

impl Table {
    /// Chips `seat` still owes this street.
    pub fn to_call(&self, seat: usize) -> u64 {
        self.players
            .get(seat)
            .map(|p| self.amount_to_call.saturating_sub(p.invested_this_street))
            .unwrap_or(0)
    }

    pub fn legal_actions(&self, seat: usize) -> Option<LegalActions> {
        let p = self.players.get(seat)?;
        if !p.can_act() || !self.hand_state.is_betting() {
            return None;
        }
        let to_call = self.to_call(seat);
        let max_raise_to = p.stack + p.invested_this_street;
        let min_raise_to = self.amount_to_call.saturating_add(self.min_raise).min(max_raise_to);
        Some(LegalActions {
            can_check: to_call == 0,
            can_call: to_call > 0,
            to_call,
            min_raise_to,
            max_raise_to,
        })
    }

    /// Apply `action` for `seat`.
    ///
    /// Rejected actions leave the table untouched and are not logged.
    pub fn player_act(&mut self, seat: usize, action: PlayerAction) -> Result<(), ActionError> {
        if let Err(e) = self.validate_action(seat, action) {
            debug!("seat {seat} {:?} rejected: {e}", action);
            return Err(e);
        }

        let owed = self.to_call(seat);
        let logged_amount = match action {
            PlayerAction::Call => Some(self.players[seat].stack.min(owed)),
            PlayerAction::Bet(total) | PlayerAction::Raise(total) => Some(total),
            PlayerAction::Fold | PlayerAction::Check => None,
        };
        self.log.push(LogEntry {
            seat,
            kind: action.kind(),
            amount: logged_amount,
            street: self.hand_state,
            timestamp: Utc::now(),
        });

        match action {
            PlayerAction::Fold => {
                self.players[seat].has_folded = true;
            }
            PlayerAction::Check => {}
            PlayerAction::Call => {
                let paid = self.players[seat].commit(owed);
                self.pot += paid;
            }
            PlayerAction::Bet(total) | PlayerAction::Raise(total) => {
                let add = total - self.players[seat].invested_this_street;
                let paid = self.players[seat].commit(add);
                self.pot += paid;
                self.min_raise = self.min_raise.max(total - self.amount_to_call);
                self.amount_to_call = total;
                self.last_aggressor = Some(seat);
            }
        }
        self.players[seat].last_action = Some(action.kind());
        debug!("seat {seat} {:?}: pot {}, to call {}", action, self.pot, self.amount_to_call);

        self.advance_after(seat);
        Ok(())
    }

    fn validate_action(&self, seat: usize, action: PlayerAction) -> Result<(), ActionError> {
        if !self.hand_state.is_betting() {
            return Err(ActionError::NoBettingRound { state: self.hand_state });
        }
        if self.current_actor != Some(seat) {
            return Err(ActionError::NotYourTurn { seat, current: self.current_actor });
        }
        let p = &self.players[seat];
        match action {
            PlayerAction::Check if self.amount_to_call > p.invested_this_street => {
                Err(ActionError::CannotCheck { to_call: self.to_call(seat) })
            }
            PlayerAction::Bet(total) | PlayerAction::Raise(total) => {
                if total <= self.amount_to_call {
                    return Err(ActionError::TargetTooLow { current: self.amount_to_call, target: total });
                }
                let needed = total - p.invested_this_street;
                if needed > p.stack {
                    return Err(ActionError::InsufficientStack { needed, stack: p.stack });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn advance_after(&mut self, seat: usize) {
        if self.remaining_players() <= 1 {
            self.hand_state = HandState::Showdown;
            self.current_actor = None;
            info!("everyone else folded: showdown with pot {}", self.pot);
            return;
        }
        if self.betting_closed() {
            self.current_actor = None;
            if self.hand_state == HandState::River {
                self.hand_state = HandState::Showdown;
                info!("river betting closed: showdown with pot {}", self.pot);
            } else {
                debug!("{} betting closed", self.hand_state);
            }
            return;
        }
        self.current_actor = self.next_actor_after(seat);
    }

    /// The street is over when every player who can still act has matched the
    /// amount to call. Without a bet on the street each of them must also have
    /// acted once.
    pub(crate) fn betting_closed(&self) -> bool {
        let mut can_act = self.players.iter().filter(|p| p.can_act());
        let matched = can_act.clone().all(|p| {
            Some(p.seat) == self.last_aggressor || p.invested_this_street == self.amount_to_call
        });
        if !matched {
            return false;
        }
        self.last_aggressor.is_some() || can_act.all(|p| p.last_action.is_some())
    }
}
