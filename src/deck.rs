use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const STANDARD_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck size must be a positive multiple of 4 no larger than 52 (got {0})")]
    InvalidSize(usize),
    #[error("the deck is out of cards")]
    Exhausted,
}

/// A stack of unique cards. The top of the deck is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use heads_up_holdem::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self {
            cards: build(STANDARD_SIZE),
        }
    }

    /// Build an unshuffled deck of `n` cards: the lowest `n / 4` ranks, starting at Two,
    /// in all four suits.
    ///
    /// ```
    /// use heads_up_holdem::deck::{Deck, DeckError};
    ///
    /// assert_eq!(Deck::with_size(20).unwrap().len(), 20);
    /// assert_eq!(Deck::with_size(30), Err(DeckError::InvalidSize(30)));
    /// ```
    pub fn with_size(n: usize) -> Result<Self, DeckError> {
        validate_size(n)?;
        Ok(Self { cards: build(n) })
    }

    /// A prepared deck. `cards` is in draw order: the first card is drawn first.
    ///
    /// ```
    /// use heads_up_holdem::cards::parse_cards;
    /// use heads_up_holdem::deck::Deck;
    ///
    /// let mut deck = Deck::from_top(parse_cards("Ah Kd").unwrap());
    /// assert_eq!(deck.draw().unwrap().to_string(), "Ah");
    /// ```
    pub fn from_top(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    /// A deck with no cards, used as a discard pile.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Draw `n` cards from the top of the deck. Fails without removing anything
    /// when fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Exhausted);
        }
        let split = self.cards.len() - n;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }

    /// Push a card onto the top of the deck.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Move every card of `self` onto the top of `other`, leaving `self` empty.
    pub fn drain_into(&mut self, other: &mut Deck) {
        other.cards.append(&mut self.cards);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn validate_size(n: usize) -> Result<(), DeckError> {
    if n == 0 || n % 4 != 0 || n > STANDARD_SIZE {
        return Err(DeckError::InvalidSize(n));
    }
    Ok(())
}

fn build(n: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(n);
    for &r in Rank::ALL.iter().take(n / 4) {
        for &s in &Suit::ALL {
            cards.push(Card::new(r, s));
        }
    }
    cards
}
