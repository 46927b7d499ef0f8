//! Blackjack: hand evaluation, dealer policy, and the round state machine.
//!
//! A round moves through
//! `PlayerTurn -> (Bust | DealerTurn) -> Complete`; the player may hit
//! any number of times, a hand over 21 forces the bust, and the dealer's
//! play is fully determined by the dealt cards.

use fortuna_types::{Card, Outcome, Rank};
use rand::Rng;

use crate::{deck::Deck, errors::GameError, payout::Multiplier};

/// Dealer draws below this total and stands at or above it, soft or hard.
const DEALER_STAND: u8 = 17;

/// Blackjack value of a single rank: faces count ten, aces eleven
/// (softened later by `hand_value`).
fn rank_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 11,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

/// Value of a blackjack hand, recomputed from scratch on every call.
///
/// Aces start at eleven; while the total busts and an ace is still
/// counted high, one ace at a time drops to one. An empty hand is 0.
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value += rank_value(card.rank) as u16;
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value.min(u8::MAX as u16) as u8
}

/// Whether the hand still counts an ace as eleven.
pub fn is_soft(cards: &[Card]) -> bool {
    let low_total: u16 = cards
        .iter()
        .map(|c| if c.rank == Rank::Ace { 1 } else { rank_value(c.rank) as u16 })
        .sum();
    cards.iter().any(|c| c.rank == Rank::Ace) && low_total + 10 == hand_value(cards) as u16
}

/// 21 on exactly two cards.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == 21
}

/// Draw into the dealer's hand until it reaches 17, then stand.
/// Terminal values are 17..=21 (stand) or above 21 (bust).
pub fn dealer_policy(hand: &mut Vec<Card>, deck: &mut Deck) -> Result<(), GameError> {
    while hand_value(hand) < DEALER_STAND {
        hand.push(deck.draw()?);
    }
    Ok(())
}

/// Stage of a blackjack round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    PlayerTurn,
    DealerTurn,
    Complete,
}

/// Payout table for blackjack rounds, expressed as total return.
/// Defaults to even money on wins and 3:2 on naturals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlackjackPayouts {
    pub win: Multiplier,
    pub natural: Multiplier,
}

impl Default for BlackjackPayouts {
    fn default() -> Self {
        Self {
            win: Multiplier::from_int(2),
            natural: Multiplier::from_ratio(5, 2),
        }
    }
}

/// A single blackjack round: one player hand against the dealer, with a
/// fresh deck owned for the lifetime of the round.
#[derive(Clone, Debug)]
pub struct Round {
    deck: Deck,
    player: Vec<Card>,
    dealer: Vec<Card>,
    stage: Stage,
}

impl Round {
    /// Shuffle a fresh deck and deal two cards to the player, then two to
    /// the dealer. A natural on either side completes the round at once,
    /// without the dealer drawing.
    pub fn deal(rng: &mut impl Rng) -> Result<Self, GameError> {
        let mut deck = Deck::shuffled(rng);
        let player = vec![deck.draw()?, deck.draw()?];
        let dealer = vec![deck.draw()?, deck.draw()?];

        let stage = if is_natural(&player) || is_natural(&dealer) {
            Stage::Complete
        } else {
            Stage::PlayerTurn
        };

        Ok(Round {
            deck,
            player,
            dealer,
            stage,
        })
    }

    /// Deal the player one more card. Reaching 21 stands automatically;
    /// exceeding it busts and completes the round. Returns the new value.
    pub fn hit(&mut self) -> Result<u8, GameError> {
        if self.stage != Stage::PlayerTurn {
            return Err(GameError::InvalidMove);
        }
        self.player.push(self.deck.draw()?);

        let value = hand_value(&self.player);
        if value > 21 {
            self.stage = Stage::Complete;
        } else if value == 21 {
            self.stand()?;
        }
        Ok(value)
    }

    /// End the player's turn and run the dealer out under `dealer_policy`.
    pub fn stand(&mut self) -> Result<(), GameError> {
        if self.stage != Stage::PlayerTurn {
            return Err(GameError::InvalidMove);
        }
        self.stage = Stage::DealerTurn;
        dealer_policy(&mut self.dealer, &mut self.deck)?;
        self.stage = Stage::Complete;
        Ok(())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player
    }

    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer
    }

    /// The dealer's face-up card, the only dealer card shown before the
    /// player stands.
    pub fn dealer_upcard(&self) -> Card {
        self.dealer[0]
    }

    /// Terminal classification of the round. `InvalidMove` while the
    /// round is still being played.
    pub fn outcome(&self) -> Result<Outcome, GameError> {
        if self.stage != Stage::Complete {
            return Err(GameError::InvalidMove);
        }

        let player = hand_value(&self.player);
        let dealer = hand_value(&self.dealer);

        let outcome = if player > 21 {
            Outcome::Bust
        } else if is_natural(&self.player) && !is_natural(&self.dealer) {
            Outcome::Win
        } else if is_natural(&self.dealer) && !is_natural(&self.player) {
            Outcome::Lose
        } else if dealer > 21 || player > dealer {
            Outcome::Win
        } else if player == dealer {
            Outcome::Push
        } else {
            Outcome::Lose
        };
        Ok(outcome)
    }

    /// Multiplier the completed round earns under `payouts`.
    pub fn payout_multiplier(&self, payouts: &BlackjackPayouts) -> Result<Multiplier, GameError> {
        let multiplier = match self.outcome()? {
            Outcome::Win if is_natural(&self.player) => payouts.natural,
            Outcome::Win => payouts.win,
            Outcome::Push => Multiplier::ONE,
            Outcome::Lose | Outcome::Bust => Multiplier::ZERO,
        };
        Ok(multiplier)
    }

    /// Round with fixed hands and deck, for scripted tests.
    #[cfg(any(test, feature = "mocks"))]
    pub(crate) fn scripted(deck: Deck, player: Vec<Card>, dealer: Vec<Card>) -> Self {
        let stage = if is_natural(&player) || is_natural(&dealer) {
            Stage::Complete
        } else {
            Stage::PlayerTurn
        };
        Round {
            deck,
            player,
            dealer,
            stage,
        }
    }
}
