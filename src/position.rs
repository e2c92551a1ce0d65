//! Seat position labels.
//!
//! Labels are derived from the player count and the button seat only; the
//! table recomputes them once per hand when the hand starts.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Position {
    Button,
    SmallBlind,
    BigBlind,
    UnderTheGun,
    Middle,
    Cutoff,
    #[default]
    Unassigned,
}

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::Button => "BTN",
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
            Position::UnderTheGun => "UTG",
            Position::Middle => "MP",
            Position::Cutoff => "CO",
            Position::Unassigned => "—",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Labels handed out to the seats after the big blind, in seat order.
const INTERIOR: [Position; 3] = [Position::UnderTheGun, Position::Middle, Position::Cutoff];

/// Label every seat for a hand.
///
/// Heads-up the button is labelled BTN and the other seat BB. With three or
/// more players the seats after the blinds get UTG, MP, CO and every seat past
/// the third interior seat is labelled MP again.
///
/// Fewer than two players, or a button seat outside the table, leaves every
/// seat unassigned.
///
/// ```
/// use holdem_table::position::{assign_positions, Position};
///
/// let labels = assign_positions(4, 0);
/// assert_eq!(labels[0], Position::Button);
/// assert_eq!(labels[3], Position::UnderTheGun);
/// ```
pub fn assign_positions(player_count: usize, button_seat: usize) -> Vec<Position> {
    let mut positions = vec![Position::Unassigned; player_count];
    if player_count < 2 || button_seat >= player_count {
        return positions;
    }

    if player_count == 2 {
        positions[button_seat] = Position::Button;
        positions[(button_seat + 1) % player_count] = Position::BigBlind;
        return positions;
    }

    positions[button_seat] = Position::Button;
    positions[(button_seat + 1) % player_count] = Position::SmallBlind;
    positions[(button_seat + 2) % player_count] = Position::BigBlind;

    for (n, offset) in (3..player_count).enumerate() {
        let seat = (button_seat + offset) % player_count;
        positions[seat] = INTERIOR.get(n).copied().unwrap_or(Position::Middle);
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn too_few_players_are_unassigned() {
        assert_eq!(assign_positions(1, 0), vec![Unassigned]);
        assert!(assign_positions(0, 0).is_empty());
    }

    #[test]
    fn heads_up_has_no_small_blind_label() {
        assert_eq!(assign_positions(2, 1), vec![BigBlind, Button]);
    }

    #[test]
    fn six_handed_uses_every_label_once() {
        assert_eq!(
            assign_positions(6, 2),
            vec![Middle, Cutoff, Button, SmallBlind, BigBlind, UnderTheGun]
        );
    }

    #[test]
    fn nine_handed_reuses_middle() {
        let labels = assign_positions(9, 0);
        assert_eq!(
            labels,
            vec![
                Button,
                SmallBlind,
                BigBlind,
                UnderTheGun,
                Middle,
                Cutoff,
                Middle,
                Middle,
                Middle
            ]
        );
    }

    #[test]
    fn button_outside_table_is_unassigned() {
        assert!(assign_positions(3, 3).iter().all(|p| *p == Unassigned));
    }
}
