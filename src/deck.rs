use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One card of the table's deck together with its in-use flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckCard {
    card: Card,
    in_use: bool,
}

impl DeckCard {
    pub fn card(&self) -> Card {
        self.card
    }

    /// True while the card sits in someone's hole cards or on the board.
    pub fn in_use(&self) -> bool {
        self.in_use
    }
}

/// The table's copy of the 52-card set.
///
/// Cards never leave the deck; dealing a card into hole cards or onto the board
/// only flips its in-use flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<DeckCard>,
}

impl Deck {
    /// A deck with no cards, as held by a table before its first hand.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// The full ordered set: spades, hearts, diamonds, clubs, each Ace down to Two.
    ///
    /// ```
    /// use holdem_table::deck::Deck;
    ///
    /// let deck = Deck::ordered();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.iter().next().unwrap().card().id(), "As");
    /// ```
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(DeckCard { card: Card::new(r, s), in_use: false });
            }
        }
        Self { cards }
    }

    /// A freshly shuffled full deck, reproducible for a given seed.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle_seeded(seed);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeckCard> {
        self.cards.iter()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// `None` when the card is not part of this deck.
    pub fn is_in_use(&self, card: Card) -> Option<bool> {
        self.cards.iter().find(|c| c.card == card).map(|c| c.in_use)
    }

    /// Mark a card as dealt. Returns false when the card is not in the deck.
    pub(crate) fn mark_in_use(&mut self, card: Card) -> bool {
        self.set_in_use(card, true)
    }

    /// Return a card to the deck. Returns false when the card is not in the deck.
    pub(crate) fn release(&mut self, card: Card) -> bool {
        self.set_in_use(card, false)
    }

    fn set_in_use(&mut self, card: Card, in_use: bool) -> bool {
        match self.cards.iter_mut().find(|c| c.card == card) {
            Some(slot) => {
                slot.in_use = in_use;
                true
            }
            None => false,
        }
    }

    /// Cards not yet dealt, in deck order.
    pub fn available(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().filter(|c| !c.in_use).map(|c| c.card)
    }

    pub fn in_use_count(&self) -> usize {
        self.cards.iter().filter(|c| c.in_use).count()
    }

    /// The deck laid out for a card picker: by suit (♠ ♥ ♦ ♣), then Ace down to Two.
    pub fn sorted_for_selection(&self) -> Vec<DeckCard> {
        let mut out = self.cards.clone();
        out.sort_by_key(|c| (c.card.suit(), c.card.rank()));
        out
    }
}
