//! holdem-table: a Texas Hold'em table and betting engine
//!
//! Goals:
//! - One explicit [`table::Table`] value holds the whole hand; callers own it
//! - Every command either applies completely or returns an error and changes nothing
//! - Card selection and advice live outside the engine and come back in as commands
//!
//! ## Quick start: play a heads-up preflop round
//! ```
//! use holdem_table::betting::PlayerAction;
//! use holdem_table::config::TableConfig;
//! use holdem_table::table::{HandState, Table};
//!
//! let mut table = Table::new(TableConfig::default().with_seed(7)).unwrap();
//! table.set_player_count(2).unwrap();
//! table.set_button_seat(Some(0)).unwrap();
//! table.start_hand().unwrap();
//! assert_eq!(table.current_actor(), Some(0));
//!
//! table.player_act(0, PlayerAction::Call).unwrap();
//! assert_eq!(table.current_actor(), None);
//! assert_eq!(table.hand_state(), HandState::Preflop);
//! assert_eq!(table.pot(), 4);
//! ```
//!
//! ## Command driver
//! Feed a script of commands to the table with:
//! ```sh
//! cargo run --bin holdem-table -- session.txt
//! ```

pub mod advice;
pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod hand;
pub mod position;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
