use holdem_table::betting::{ActionError, PlayerAction};
use holdem_table::config::TableConfig;
use holdem_table::table::Table;
use proptest::prelude::*;

fn started(players: usize, button: usize) -> Table {
    let mut table = Table::new(TableConfig::default().with_seed(4)).unwrap();
    table.set_player_count(players).unwrap();
    table.set_button_seat(Some(button)).unwrap();
    table.start_hand().unwrap();
    table
}

fn action(choice: u8, amount: u64) -> PlayerAction {
    match choice % 5 {
        0 => PlayerAction::Fold,
        1 => PlayerAction::Check,
        2 => PlayerAction::Call,
        3 => PlayerAction::Bet(amount),
        _ => PlayerAction::Raise(amount),
    }
}

#[test]
fn out_of_turn_action_is_reported() {
    let mut table = started(4, 0);
    assert_eq!(
        table.player_act(1, PlayerAction::Fold),
        Err(ActionError::NotYourTurn { seat: 1, current: Some(3) })
    );
    assert_eq!(
        table.player_act(9, PlayerAction::Call),
        Err(ActionError::NotYourTurn { seat: 9, current: Some(3) })
    );
}

#[test]
fn actions_before_the_hand_are_rejected() {
    let mut table = Table::default();
    table.set_player_count(3).unwrap();
    assert!(matches!(table.player_act(0, PlayerAction::Check), Err(ActionError::NoBettingRound { .. })));
}

proptest! {
    #[test]
    fn non_actor_never_changes_the_table(
        players in 2usize..=8,
        button in 0usize..8,
        seat in 0usize..10,
        choice in any::<u8>(),
        amount in 0u64..200,
    ) {
        let table = started(players, button % players);
        prop_assume!(table.current_actor() != Some(seat));

        let mut after = table.clone();
        prop_assert!(after.player_act(seat, action(choice, amount)).is_err());
        prop_assert_eq!(after, table);
    }
}
