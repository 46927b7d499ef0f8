//! Lottery drawing: a fixed prize, tickets at a fixed price, one uniform
//! winner among the tickets sold.

use fortuna_types::UserId;
use rand::Rng;

/// An open lottery drawing. Each purchased ticket is one entry; a user
/// may hold many.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawing {
    pub prize: u64,
    pub ticket_price: u64,
    tickets: Vec<UserId>,
}

impl Drawing {
    pub fn new(prize: u64, ticket_price: u64) -> Self {
        Drawing {
            prize,
            ticket_price,
            tickets: Vec::new(),
        }
    }

    /// Register `count` tickets for a user. Returns the amount due.
    pub fn buy(&mut self, user: UserId, count: u32) -> u64 {
        for _ in 0..count {
            self.tickets.push(user);
        }
        self.ticket_price.saturating_mul(count as u64)
    }

    pub fn tickets_sold(&self) -> usize {
        self.tickets.len()
    }

    /// Draw the winning user uniformly over sold tickets. `None` when no
    /// tickets were sold; the caller deactivates the drawing either way.
    pub fn draw(&self, rng: &mut impl Rng) -> Option<UserId> {
        if self.tickets.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.tickets.len());
        Some(self.tickets[index])
    }
}
