//! Advice service contract.
//!
//! The table never talks to the advice service itself. A caller builds an
//! [`AdviceRequest`] from the current table, hands it to whatever [`Advisor`]
//! it uses (HTTP client, local model, scripted stub), and turns the returned
//! [`Suggestion`] back into a [`Command`] if it wants to act on it. Amounts in
//! the payload are expressed in big blinds.

use crate::betting::PlayerAction;
use crate::engine::Command;
use crate::table::{HandState, Table};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const PROMPT: &str = "You are a fast, expert poker assistant. Based on the hand-state JSON, \
return the BEST ACTION for HERO. Be concise and prioritise speed. Output ONLY a JSON object \
with the requested schema and no text outside it.";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AdviceError {
    #[error("big blind is zero; amounts cannot be expressed in big blinds")]
    NoBigBlind,
    #[error("no betting round in progress")]
    NoBettingRound,
    #[error("nobody is due to act")]
    NoActor,
    #[error("malformed advice response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{0:?} suggestion is missing size_bb")]
    MissingSize(SuggestedAction),
    #[error("invalid size_bb: {0}")]
    InvalidSize(f64),
    #[error("advice service failed: {0}")]
    Service(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandInfo {
    pub street: String,
    pub board: Vec<String>,
    pub pot_bb: f64,
    pub to_act: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroInfo {
    pub position: String,
    pub stack_bb: f64,
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatInfo {
    pub id: String,
    pub position: String,
    pub stack_bb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryItem {
    pub actor: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bb: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActionHistory {
    pub preflop: Vec<HistoryItem>,
    pub flop: Vec<HistoryItem>,
    pub turn: Vec<HistoryItem>,
    pub river: Vec<HistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegalActionsBb {
    pub can_check: bool,
    pub can_call: bool,
    pub amount_to_call_bb: f64,
    pub min_raise_to_bb: f64,
    pub max_raise_to_bb: f64,
}

/// Everything the advice service sees about the hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandSnapshot {
    pub hand: HandInfo,
    pub hero: HeroInfo,
    pub players: Vec<SeatInfo>,
    pub action_history: ActionHistory,
    pub legal_actions: LegalActionsBb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceRequest {
    pub prompt: String,
    pub data_json: HandSnapshot,
    pub structure_json: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestedAction {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub action: SuggestedAction,
    #[serde(default)]
    pub size_bb: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Suggestion {
    pub fn from_json(raw: &str) -> Result<Self, AdviceError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Translate into a player action; bet and raise sizes become street
    /// totals in whole chips.
    pub fn to_action(&self, big_blind: u64) -> Result<PlayerAction, AdviceError> {
        let action = match self.action {
            SuggestedAction::Fold => PlayerAction::Fold,
            SuggestedAction::Check => PlayerAction::Check,
            SuggestedAction::Call => PlayerAction::Call,
            SuggestedAction::Bet => PlayerAction::Bet(self.chips(big_blind)?),
            SuggestedAction::Raise => PlayerAction::Raise(self.chips(big_blind)?),
        };
        Ok(action)
    }

    fn chips(&self, big_blind: u64) -> Result<u64, AdviceError> {
        let size = self.size_bb.ok_or(AdviceError::MissingSize(self.action))?;
        if !size.is_finite() || size <= 0.0 {
            return Err(AdviceError::InvalidSize(size));
        }
        Ok((size * big_blind as f64).round() as u64)
    }
}

/// Schema the service is asked to answer with.
pub fn response_structure() -> Value {
    json!({
        "action": "fold|check|call|bet|raise",
        "size_bb": "number (optional)",
        "reason": "string (optional, very brief)"
    })
}

/// Capture the table for the player due to act.
pub fn snapshot(table: &Table) -> Result<HandSnapshot, AdviceError> {
    let bb = table.blinds().big;
    if bb == 0 {
        return Err(AdviceError::NoBigBlind);
    }
    if !table.hand_state().is_betting() {
        return Err(AdviceError::NoBettingRound);
    }
    let actor = table.current_actor().ok_or(AdviceError::NoActor)?;
    let legal = table.legal_actions(actor).ok_or(AdviceError::NoActor)?;
    let in_bb = |chips: u64| chips as f64 / bb as f64;
    let label = |seat: usize| {
        table.player(seat).map(|p| p.position().label()).unwrap_or("Unknown").to_string()
    };

    let hero = table.hero();
    let hero = HeroInfo {
        position: hero.map(|p| p.position().label()).unwrap_or("Unknown").to_string(),
        stack_bb: in_bb(hero.map(|p| p.stack()).unwrap_or(0)),
        cards: hero
            .and_then(|p| p.hole())
            .map(|h| h.as_array().iter().map(|c| c.id()).collect::<Vec<_>>())
            .unwrap_or_default(),
    };

    let players = table
        .players()
        .iter()
        .filter(|p| !p.has_folded())
        .map(|p| SeatInfo {
            id: format!("P{}", p.seat()),
            position: p.position().label().to_string(),
            stack_bb: in_bb(p.stack()),
        })
        .collect();

    let mut history = ActionHistory::default();
    for entry in table.log() {
        let item = HistoryItem {
            actor: label(entry.seat),
            action: entry.kind.label().to_ascii_lowercase(),
            size_bb: entry.amount.filter(|&a| a > 0).map(in_bb),
        };
        match entry.street {
            HandState::Preflop => history.preflop.push(item),
            HandState::Flop => history.flop.push(item),
            HandState::Turn => history.turn.push(item),
            HandState::River => history.river.push(item),
            _ => {}
        }
    }

    Ok(HandSnapshot {
        hand: HandInfo {
            street: table.hand_state().label().to_ascii_lowercase(),
            board: table.board().as_slice().iter().map(|c| c.id()).collect(),
            pot_bb: in_bb(table.pot()),
            to_act: label(actor),
        },
        hero,
        players,
        action_history: history,
        legal_actions: LegalActionsBb {
            can_check: legal.can_check,
            can_call: legal.can_call,
            amount_to_call_bb: in_bb(legal.to_call),
            min_raise_to_bb: in_bb(legal.min_raise_to),
            max_raise_to_bb: in_bb(legal.max_raise_to),
        },
    })
}

pub fn request(table: &Table) -> Result<AdviceRequest, AdviceError> {
    Ok(AdviceRequest {
        prompt: PROMPT.to_string(),
        data_json: snapshot(table)?,
        structure_json: response_structure(),
    })
}

/// Anything that can answer an advice request.
pub trait Advisor {
    fn advise(&mut self, request: &AdviceRequest) -> Result<Suggestion, AdviceError>;
}

/// Ask `advisor` about the current decision. Any failure yields no suggestion.
pub fn suggest(table: &Table, advisor: &mut dyn Advisor) -> Option<Suggestion> {
    let request = match request(table) {
        Ok(r) => r,
        Err(e) => {
            warn!("advice request not built: {e}");
            return None;
        }
    };
    match advisor.advise(&request) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("advice unavailable: {e}");
            None
        }
    }
}

/// The command that carries out `suggestion` for the current actor.
pub fn suggested_command(table: &Table, suggestion: &Suggestion) -> Result<Command, AdviceError> {
    let seat = table.current_actor().ok_or(AdviceError::NoActor)?;
    let action = suggestion.to_action(table.blinds().big)?;
    Ok(Command::PlayerAct { seat, action })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_and_full_responses() {
        let s = Suggestion::from_json(r#"{"action":"call"}"#).unwrap();
        assert_eq!(s.action, SuggestedAction::Call);
        assert_eq!(s.size_bb, None);

        let s = Suggestion::from_json(r#"{"action":"raise","size_bb":2.5,"reason":"value"}"#).unwrap();
        assert_eq!(s.to_action(2).unwrap(), PlayerAction::Raise(5));
        assert_eq!(s.reason.as_deref(), Some("value"));
    }

    #[test]
    fn sizes_round_to_whole_chips() {
        let s = Suggestion { action: SuggestedAction::Bet, size_bb: Some(2.4), reason: None };
        assert_eq!(s.to_action(5).unwrap(), PlayerAction::Bet(12));
    }

    #[test]
    fn bad_responses_are_errors() {
        assert!(matches!(Suggestion::from_json(r#"{"action":"jam"}"#), Err(AdviceError::Malformed(_))));
        assert!(matches!(Suggestion::from_json("not json"), Err(AdviceError::Malformed(_))));
        let s = Suggestion { action: SuggestedAction::Raise, size_bb: None, reason: None };
        assert!(matches!(s.to_action(2), Err(AdviceError::MissingSize(SuggestedAction::Raise))));
        let s = Suggestion { action: SuggestedAction::Bet, size_bb: Some(-1.0), reason: None };
        assert!(matches!(s.to_action(2), Err(AdviceError::InvalidSize(_))));
    }

    #[test]
    fn structure_lists_three_fields() {
        let v = response_structure();
        assert!(v.get("action").is_some());
        assert!(v.get("size_bb").is_some());
        assert!(v.get("reason").is_some());
    }
}
