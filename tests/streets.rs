use holdem_table::betting::PlayerAction;
use holdem_table::cards::{parse_cards, Card};
use holdem_table::config::TableConfig;
use holdem_table::hand::{HandError, HoleCards};
use holdem_table::table::{HandState, Table, TableError};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn heads_up_limped() -> Table {
    let mut table = Table::new(TableConfig::default().with_seed(9)).unwrap();
    table.set_player_count(2).unwrap();
    table.set_button_seat(Some(0)).unwrap();
    table.set_hero_seat(Some(1)).unwrap();
    table.start_hand().unwrap();
    table.player_act(0, PlayerAction::Call).unwrap();
    table
}

fn check_around(table: &mut Table) {
    while let Some(seat) = table.current_actor() {
        table.player_act(seat, PlayerAction::Check).unwrap();
    }
}

#[test]
fn flop_resets_street_bookkeeping() {
    let mut table = heads_up_limped();
    table.deal_community_cards(&cards("Ah 9c 4d")).unwrap();

    assert_eq!(table.hand_state(), HandState::Flop);
    assert!(table.players().iter().all(|p| p.invested_this_street() == 0));
    assert!(table.players().iter().all(|p| p.invested_this_hand() == 2));
    assert_eq!(table.amount_to_call(), 0);
    assert_eq!(table.last_aggressor(), None);
    assert_eq!(table.current_actor(), Some(1));
    assert_eq!(table.board().len(), 3);
    assert_eq!(table.deck().in_use_count(), 3);
}

#[test]
fn checked_down_hand_reaches_showdown_on_the_river() {
    let mut table = heads_up_limped();
    table.deal_community_cards(&cards("Ah 9c 4d")).unwrap();
    check_around(&mut table);
    table.deal_community_cards(&cards("Ks")).unwrap();
    assert_eq!(table.hand_state(), HandState::Turn);
    check_around(&mut table);
    table.deal_community_cards(&cards("2h")).unwrap();
    assert_eq!(table.hand_state(), HandState::River);
    check_around(&mut table);

    assert_eq!(table.hand_state(), HandState::Showdown);
    assert_eq!(table.board().len(), 5);
    assert_eq!(table.pot(), 4);
}

#[test]
fn all_in_players_run_the_board_out() {
    let mut table = Table::new(TableConfig::default().with_seed(9)).unwrap();
    table.set_player_count(2).unwrap();
    table.set_button_seat(Some(0)).unwrap();
    table.start_hand().unwrap();
    table.player_act(0, PlayerAction::Raise(100)).unwrap();
    table.player_act(1, PlayerAction::Call).unwrap();
    assert_eq!(table.current_actor(), None);

    table.deal_community_cards(&cards("Ah 9c 4d")).unwrap();
    assert_eq!(table.current_actor(), None);
    table.deal_community_cards(&cards("Ks")).unwrap();
    table.deal_community_cards(&cards("2h")).unwrap();
    assert_eq!(table.hand_state(), HandState::Showdown);
    assert_eq!(table.pot(), 200);
}

#[test]
fn dealing_is_refused_while_betting_is_open() {
    let mut table = Table::new(TableConfig::default().with_seed(9)).unwrap();
    table.set_player_count(2).unwrap();
    table.set_button_seat(Some(0)).unwrap();
    assert_eq!(
        table.deal_community_cards(&cards("Ah 9c 4d")),
        Err(TableError::NothingToDeal { state: HandState::Prehand })
    );

    table.start_hand().unwrap();
    let before = table.clone();
    assert_eq!(table.deal_community_cards(&cards("Ah 9c 4d")), Err(TableError::BettingInProgress));
    assert_eq!(table, before);
}

#[test]
fn bad_community_cards_are_rejected() {
    let mut table = heads_up_limped();
    let hero: HoleCards = "Qs Qh".parse().unwrap();
    table.set_hero_hole_cards(hero).unwrap();
    let before = table.clone();

    assert_eq!(
        table.deal_community_cards(&cards("Ah 9c")),
        Err(TableError::CardCount { expected: 3, got: 2 })
    );
    assert_eq!(
        table.deal_community_cards(&cards("Ah Ah 4d")),
        Err(TableError::Hand(HandError::DuplicateBoardCards))
    );
    assert_eq!(
        table.deal_community_cards(&cards("Ah Qs 4d")),
        Err(TableError::CardInUse(hero.first()))
    );
    assert_eq!(table, before);

    table.deal_community_cards(&cards("Ah 9c 4d")).unwrap();
    check_around(&mut table);
    assert_eq!(
        table.deal_community_cards(&cards("9c")),
        Err(TableError::CardInUse("9c".parse().unwrap()))
    );
    assert_eq!(
        table.deal_community_cards(&cards("Ks 2h")),
        Err(TableError::CardCount { expected: 1, got: 2 })
    );
}

#[test]
fn nothing_to_deal_after_the_river() {
    let mut table = heads_up_limped();
    table.deal_community_cards(&cards("Ah 9c 4d")).unwrap();
    check_around(&mut table);
    table.deal_community_cards(&cards("Ks")).unwrap();
    check_around(&mut table);
    table.deal_community_cards(&cards("2h")).unwrap();
    check_around(&mut table);
    assert!(matches!(
        table.deal_community_cards(&cards("3h")),
        Err(TableError::NothingToDeal { state: HandState::Showdown })
    ));
}
