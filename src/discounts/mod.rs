//! Discount chain of responsibility.
//!
//! Each handler optionally borrows a successor. A `PassThrough` handler always
//! hands the order on. A concrete discount applies its own message and then
//! either stops or forwards, depending on the [`ForwardPolicy`].

use std::io::{self, Write};

use tracing::debug;

use crate::config::ForwardPolicy;
use crate::place_order::Order;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscountKind {
    PassThrough,
    EarlyBird,
    Vip,
}

impl DiscountKind {
    fn message(&self) -> Option<&'static str> {
        match self {
            DiscountKind::PassThrough => None,
            DiscountKind::EarlyBird => Some("Early Bird Discount Applied"),
            DiscountKind::Vip => Some("VIP Discount Applied"),
        }
    }
}

#[derive(Debug)]
pub struct DiscountHandler<'a> {
    kind: DiscountKind,
    next: Option<&'a DiscountHandler<'a>>,
}

impl<'a> DiscountHandler<'a> {
    pub fn new(kind: DiscountKind) -> Self {
        Self { kind, next: None }
    }

    pub fn early_bird() -> Self {
        Self::new(DiscountKind::EarlyBird)
    }

    pub fn vip() -> Self {
        Self::new(DiscountKind::Vip)
    }

    pub fn kind(&self) -> DiscountKind {
        self.kind
    }

    /// Replaces any existing successor. The same handler may be the successor
    /// of several chains.
    pub fn set_next_handler(&mut self, next: &'a DiscountHandler<'a>) {
        self.next = Some(next);
    }

    pub fn next_handler(&self) -> Option<&'a DiscountHandler<'a>> {
        self.next
    }

    /// Number of handlers reachable from this one, itself included.
    pub fn chain_len(&self) -> usize {
        let mut len = 1;
        let mut current = self.next;
        while let Some(handler) = current {
            len += 1;
            current = handler.next;
        }
        len
    }

    pub fn apply_discount(
        &self,
        order: &Order<'_>,
        policy: ForwardPolicy,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let forwarded = match self.kind.message() {
            None => true,
            Some(message) => {
                writeln!(out, "{message}")?;
                policy == ForwardPolicy::Forwarding
            }
        };
        debug!(handler = ?self.kind, forwarded, "discount handled");

        match self.next {
            Some(next) if forwarded => next.apply_discount(order, policy, out),
            _ => Ok(()),
        }
    }
}
