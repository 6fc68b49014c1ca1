use std::io::Write;

use tracing::warn;

use super::order::Order;
use crate::common::simple_types::OrderStatus;
use crate::error::OrderError;

pub trait OrderState {
    fn mark_paid(&self, order: &mut Order<'_>, out: &mut dyn Write) -> Result<(), OrderError>;
    fn mark_shipped(&self, order: &mut Order<'_>, out: &mut dyn Write) -> Result<(), OrderError>;
}

// ---------------------------
// Announce only
// ---------------------------

/// Announces payment and shipping. The order itself is left untouched, so any
/// call order is accepted.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaidShippedState;

impl OrderState for PaidShippedState {
    fn mark_paid(&self, _order: &mut Order<'_>, out: &mut dyn Write) -> Result<(), OrderError> {
        writeln!(out, "Order marked as paid")?;
        Ok(())
    }

    fn mark_shipped(&self, _order: &mut Order<'_>, out: &mut dyn Write) -> Result<(), OrderError> {
        writeln!(out, "Order marked as shipped")?;
        Ok(())
    }
}

// ---------------------------
// Guarded transitions
// ---------------------------

/// Records status on the order: Created -> Paid -> Shipped, nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuardedLifecycle;

impl GuardedLifecycle {
    fn check(order: &Order<'_>, from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        let current = order.status();
        if current != from {
            warn!(%current, %to, "rejected order transition");
            return Err(OrderError::InvalidTransition { from: current, to });
        }
        Ok(())
    }

    /// Status only moves once the announcement has been written.
    fn transition(
        order: &mut Order<'_>,
        from: OrderStatus,
        to: OrderStatus,
        line: &str,
        out: &mut dyn Write,
    ) -> Result<(), OrderError> {
        Self::check(order, from, to)?;
        writeln!(out, "{line}")?;
        order.set_status(to);
        Ok(())
    }
}

impl OrderState for GuardedLifecycle {
    fn mark_paid(&self, order: &mut Order<'_>, out: &mut dyn Write) -> Result<(), OrderError> {
        Self::transition(
            order,
            OrderStatus::Created,
            OrderStatus::Paid,
            "Order marked as paid",
            out,
        )
    }

    fn mark_shipped(&self, order: &mut Order<'_>, out: &mut dyn Write) -> Result<(), OrderError> {
        Self::transition(
            order,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            "Order marked as shipped",
            out,
        )
    }
}
