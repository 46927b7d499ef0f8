//! Baccarat: one coup dealt under the standard third-card tableau, with
//! position bets on Player, Banker, or Tie.
//!
//! Total returns: Player 2x, Banker 1.95x (5% commission), Tie from the
//! payout table (8:1 by default; some houses pay 9:1). Player and Banker
//! bets push when the coup ties.

use fortuna_types::{Card, Outcome, Rank};
use rand::Rng;

use crate::{deck::Deck, errors::GameError, payout::Multiplier};

/// Bet positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Player,
    Banker,
    Tie,
}

/// Payout table, expressed as total return. The tie rate is the one
/// house-variable entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaccaratPayouts {
    pub player: Multiplier,
    pub banker: Multiplier,
    pub tie: Multiplier,
}

impl Default for BaccaratPayouts {
    fn default() -> Self {
        Self {
            player: Multiplier::from_int(2),
            banker: Multiplier::from_ratio(39, 20),
            tie: Multiplier::from_int(9),
        }
    }
}

/// Baccarat value of a card: tens and faces count nought, aces one.
fn card_value(card: Card) -> u8 {
    match card.rank {
        Rank::Ace => 1,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 0,
    }
}

/// Hand total, modulo ten.
pub fn hand_total(cards: &[Card]) -> u8 {
    cards.iter().map(|&c| card_value(c)).sum::<u8>() % 10
}

/// Player draws a third card on 0-5 and stands on 6-7.
fn player_draws(player_total: u8) -> bool {
    player_total <= 5
}

/// Banker third-card rule, keyed on the banker total and the player's
/// third card (if the player drew one).
fn banker_draws(banker_total: u8, player_third: Option<Card>) -> bool {
    match banker_total {
        0..=2 => true,
        3 => match player_third {
            None => true,
            Some(c) => card_value(c) != 8,
        },
        4 => match player_third {
            None => true,
            Some(c) => (2..=7).contains(&card_value(c)),
        },
        5 => match player_third {
            None => true,
            Some(c) => (4..=7).contains(&card_value(c)),
        },
        6 => match player_third {
            None => false,
            Some(c) => {
                let v = card_value(c);
                v == 6 || v == 7
            }
        },
        _ => false,
    }
}

/// A completed coup: both hands fully dealt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coup {
    pub player: Vec<Card>,
    pub banker: Vec<Card>,
}

impl Coup {
    /// Deal a coup from a fresh shuffled deck: two cards to each side,
    /// then the third-card tableau. A natural 8 or 9 on either side
    /// stops all drawing.
    pub fn deal(rng: &mut impl Rng) -> Result<Self, GameError> {
        let mut deck = Deck::shuffled(rng);
        Self::deal_from(&mut deck)
    }

    fn deal_from(deck: &mut Deck) -> Result<Self, GameError> {
        let mut player = vec![deck.draw()?, deck.draw()?];
        let mut banker = vec![deck.draw()?, deck.draw()?];

        let natural = hand_total(&player) >= 8 || hand_total(&banker) >= 8;
        if !natural {
            let mut player_third = None;
            if player_draws(hand_total(&player)) {
                let card = deck.draw()?;
                player.push(card);
                player_third = Some(card);
            }
            if banker_draws(hand_total(&banker), player_third) {
                banker.push(deck.draw()?);
            }
        }

        Ok(Coup { player, banker })
    }

    /// Winning position of this coup.
    pub fn winner(&self) -> Position {
        let player = hand_total(&self.player);
        let banker = hand_total(&self.banker);
        if player == banker {
            Position::Tie
        } else if player > banker {
            Position::Player
        } else {
            Position::Banker
        }
    }

    /// Judge a position bet. Player and Banker bets push on a tie; a Tie
    /// bet loses on anything else.
    pub fn judge(&self, bet: Position, payouts: &BaccaratPayouts) -> (Outcome, Multiplier) {
        let winner = self.winner();
        if bet == winner {
            let multiplier = match bet {
                Position::Player => payouts.player,
                Position::Banker => payouts.banker,
                Position::Tie => payouts.tie,
            };
            (Outcome::Win, multiplier)
        } else if winner == Position::Tie {
            (Outcome::Push, Multiplier::ONE)
        } else {
            (Outcome::Lose, Multiplier::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{card, scripted_deck, seeded_rng};
    use fortuna_types::Suit;

    fn coup_from(cards: &[Card]) -> Coup {
        let mut deck = scripted_deck(cards);
        Coup::deal_from(&mut deck).unwrap()
    }

    #[test]
    fn test_hand_total_wraps_mod_ten() {
        let cards = vec![
            card(Rank::Seven, Suit::Spades),
            card(Rank::Five, Suit::Hearts),
        ];
        assert_eq!(hand_total(&cards), 2);
        let faces = vec![
            card(Rank::King, Suit::Spades),
            card(Rank::Ten, Suit::Hearts),
        ];
        assert_eq!(hand_total(&faces), 0);
        assert_eq!(hand_total(&[card(Rank::Ace, Suit::Clubs)]), 1);
    }

    #[test]
    fn test_natural_stops_all_drawing() {
        // Player 4+4=8 natural; banker 2+2=4 would otherwise draw.
        let coup = coup_from(&[
            card(Rank::Four, Suit::Spades),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Two, Suit::Spades),
            card(Rank::Two, Suit::Hearts),
        ]);
        assert_eq!(coup.player.len(), 2);
        assert_eq!(coup.banker.len(), 2);
        assert_eq!(coup.winner(), Position::Player);
    }

    #[test]
    fn test_player_draws_on_five_or_less() {
        // Player 2+3=5 draws; the third card 9 makes 4. Banker 3+4=7
        // stands against a player third of 9.
        let coup = coup_from(&[
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades), // player third
        ]);
        assert_eq!(coup.player.len(), 3);
        assert_eq!(hand_total(&coup.player), 4);
        // Banker 7 with player third 9: stands.
        assert_eq!(coup.banker.len(), 2);
        assert_eq!(coup.winner(), Position::Banker);
    }

    #[test]
    fn test_player_stands_banker_draws_to_five() {
        // Player 2+4=6 stands; banker 2+3=5 draws with no player third.
        let coup = coup_from(&[
            card(Rank::Two, Suit::Spades),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Four, Suit::Spades), // banker third
        ]);
        assert_eq!(coup.player.len(), 2);
        assert_eq!(coup.banker.len(), 3);
        assert_eq!(hand_total(&coup.banker), 9);
    }

    #[test]
    fn test_banker_three_stands_against_eight() {
        // Player 1+4=5 draws an 8 (total 3); banker 1+2=3 must stand
        // against a player third of 8.
        let coup = coup_from(&[
            card(Rank::Ace, Suit::Spades),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades), // player third
        ]);
        assert_eq!(coup.player.len(), 3);
        assert_eq!(coup.banker.len(), 2);
    }

    #[test]
    fn test_banker_six_draws_against_seven() {
        // Player 2+3=5 draws a 7; banker 2+4=6 draws when the player
        // third is 6 or 7.
        let coup = coup_from(&[
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades), // player third
            card(Rank::Ace, Suit::Hearts),   // banker third
        ]);
        assert_eq!(coup.player.len(), 3);
        assert_eq!(coup.banker.len(), 3);
        assert_eq!(hand_total(&coup.banker), 7);
    }

    #[test]
    fn test_judge_player_win() {
        let coup = coup_from(&[
            card(Rank::Four, Suit::Spades),
            card(Rank::Five, Suit::Hearts), // player 9
            card(Rank::Two, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds), // banker 7
        ]);
        let payouts = BaccaratPayouts::default();
        assert_eq!(
            coup.judge(Position::Player, &payouts),
            (Outcome::Win, Multiplier::from_int(2))
        );
        assert_eq!(
            coup.judge(Position::Banker, &payouts),
            (Outcome::Lose, Multiplier::ZERO)
        );
        assert_eq!(
            coup.judge(Position::Tie, &payouts),
            (Outcome::Lose, Multiplier::ZERO)
        );
    }

    #[test]
    fn test_judge_banker_win_pays_with_commission() {
        let coup = coup_from(&[
            card(Rank::Two, Suit::Spades),
            card(Rank::Five, Suit::Hearts), // player 7
            card(Rank::Four, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds), // banker 9
        ]);
        let (outcome, multiplier) = coup.judge(Position::Banker, &BaccaratPayouts::default());
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(multiplier, Multiplier::from_ratio(39, 20));
    }

    #[test]
    fn test_tie_pushes_side_bets_and_pays_tie() {
        let coup = coup_from(&[
            card(Rank::Four, Suit::Spades),
            card(Rank::Four, Suit::Hearts), // player 8, natural
            card(Rank::Three, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds), // banker 8, natural
        ]);
        let payouts = BaccaratPayouts::default();
        assert_eq!(coup.winner(), Position::Tie);
        assert_eq!(
            coup.judge(Position::Player, &payouts),
            (Outcome::Push, Multiplier::ONE)
        );
        assert_eq!(
            coup.judge(Position::Banker, &payouts),
            (Outcome::Push, Multiplier::ONE)
        );
        assert_eq!(
            coup.judge(Position::Tie, &payouts),
            (Outcome::Win, Multiplier::from_int(9))
        );
    }

    #[test]
    fn test_tie_rate_is_configurable() {
        let generous = BaccaratPayouts {
            tie: Multiplier::from_int(10),
            ..BaccaratPayouts::default()
        };
        let coup = coup_from(&[
            card(Rank::Four, Suit::Spades),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds),
        ]);
        assert_eq!(
            coup.judge(Position::Tie, &generous),
            (Outcome::Win, Multiplier::from_int(10))
        );
    }

    #[test]
    fn test_dealt_coup_has_legal_hand_sizes() {
        let mut rng = seeded_rng(40);
        for _ in 0..200 {
            let coup = Coup::deal(&mut rng).unwrap();
            assert!((2..=3).contains(&coup.player.len()));
            assert!((2..=3).contains(&coup.banker.len()));
            assert!(hand_total(&coup.player) <= 9);
            assert!(hand_total(&coup.banker) <= 9);
        }
    }
}
