// Command boundary for the table. Front-ends (the CLI driver, a UI, an advice
// loop) build `Command` values and feed them through `Table::apply` one at a
// time; the table is only reachable through `&mut`, so commands never interleave.

use crate::betting::PlayerAction;
use crate::cards::{parse_cards, Card};
use crate::hand::HoleCards;
use crate::table::{Table, TableError};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    SetPlayerCount(usize),
    SetButtonSeat(Option<usize>),
    SetHeroSeat(Option<usize>),
    UpdatePlayerStack { seat: usize, stack: u64 },
    SetBlinds { small: u64, big: u64 },
    StartHand,
    PrepareNextHand,
    ResetGame,
    SetHeroHoleCards(HoleCards),
    SetHoleCards { seat: usize, cards: HoleCards },
    DealCommunityCards(Vec<Card>),
    PlayerAct { seat: usize, action: PlayerAction },
}

impl Table {
    /// Apply one command. On error the table is unchanged.
    pub fn apply(&mut self, command: Command) -> Result<(), TableError> {
        match command {
            Command::SetPlayerCount(n) => self.set_player_count(n),
            Command::SetButtonSeat(seat) => self.set_button_seat(seat),
            Command::SetHeroSeat(seat) => self.set_hero_seat(seat),
            Command::UpdatePlayerStack { seat, stack } => self.update_player_stack(seat, stack),
            Command::SetBlinds { small, big } => self.set_blinds(small, big),
            Command::StartHand => self.start_hand(),
            Command::PrepareNextHand => self.prepare_next_hand(),
            Command::ResetGame => {
                self.reset_game();
                Ok(())
            }
            Command::SetHeroHoleCards(cards) => self.set_hero_hole_cards(cards),
            Command::SetHoleCards { seat, cards } => self.set_hole_cards(seat, cards),
            Command::DealCommunityCards(cards) => self.deal_community_cards(&cards),
            Command::PlayerAct { seat, action } => Ok(self.player_act(seat, action)?),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: '{0}'")]
    Unknown(String),
    #[error("missing argument for '{0}'")]
    MissingArgument(&'static str),
    #[error("invalid number: '{0}'")]
    Number(String),
    #[error("invalid action: '{0}'")]
    Action(String),
    #[error("invalid cards: {0}")]
    Cards(String),
}

fn number<T: FromStr>(arg: Option<&str>, name: &'static str) -> Result<T, CommandParseError> {
    let raw = arg.ok_or(CommandParseError::MissingArgument(name))?;
    raw.parse().map_err(|_| CommandParseError::Number(raw.to_string()))
}

fn optional_seat(arg: Option<&str>, name: &'static str) -> Result<Option<usize>, CommandParseError> {
    match arg {
        Some("none") | Some("-") => Ok(None),
        other => number(other, name).map(Some),
    }
}

fn hole_cards(rest: &[&str]) -> Result<HoleCards, CommandParseError> {
    let cards = parse_cards(&rest.join(" ")).map_err(|e| CommandParseError::Cards(e.to_string()))?;
    HoleCards::from_slice(&cards).map_err(|e| CommandParseError::Cards(e.to_string()))
}

impl FromStr for PlayerAction {
    type Err = CommandParseError;

    /// `fold`, `check`, `call`, `bet <total>` or `raise <total>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().ok_or(CommandParseError::Empty)?;
        let action = match verb.to_ascii_lowercase().as_str() {
            "fold" => PlayerAction::Fold,
            "check" => PlayerAction::Check,
            "call" => PlayerAction::Call,
            "bet" => PlayerAction::Bet(number(parts.next(), "bet")?),
            "raise" => PlayerAction::Raise(number(parts.next(), "raise")?),
            _ => return Err(CommandParseError::Action(s.to_string())),
        };
        if parts.next().is_some() {
            return Err(CommandParseError::Action(s.to_string()));
        }
        Ok(action)
    }
}

/// One command per line:
///
/// ```text
/// players 3          button 0 | none     hero 1 | none
/// stack 2 250        blinds 5 10         start
/// hole As Kd         hole 2 Qh Qs        deal 2c 7d Th
/// act 0 raise 30     next                reset
/// ```
impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let (&head, rest) = words.split_first().ok_or(CommandParseError::Empty)?;
        let mut args = rest.iter().copied();
        let cmd = match head.to_ascii_lowercase().as_str() {
            "players" => Command::SetPlayerCount(number(args.next(), "players")?),
            "button" => Command::SetButtonSeat(optional_seat(args.next(), "button")?),
            "hero" => Command::SetHeroSeat(optional_seat(args.next(), "hero")?),
            "stack" => Command::UpdatePlayerStack {
                seat: number(args.next(), "stack")?,
                stack: number(args.next(), "stack")?,
            },
            "blinds" => Command::SetBlinds {
                small: number(args.next(), "blinds")?,
                big: number(args.next(), "blinds")?,
            },
            "start" => Command::StartHand,
            "next" => Command::PrepareNextHand,
            "reset" => Command::ResetGame,
            "hole" => match rest {
                [seat, cards @ ..] if seat.parse::<usize>().is_ok() => Command::SetHoleCards {
                    seat: number(Some(*seat), "hole")?,
                    cards: hole_cards(cards)?,
                },
                _ => Command::SetHeroHoleCards(hole_cards(rest)?),
            },
            "deal" => Command::DealCommunityCards(
                parse_cards(&rest.join(" ")).map_err(|e| CommandParseError::Cards(e.to_string()))?,
            ),
            "act" => {
                let seat = number(args.next(), "act")?;
                let action = rest.get(1..).map(|w| w.join(" ")).unwrap_or_default().parse()?;
                Command::PlayerAct { seat, action }
            }
            _ => return Err(CommandParseError::Unknown(head.to_string())),
        };
        Ok(cmd)
    }
}
