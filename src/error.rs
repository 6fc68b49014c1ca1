use std::io;

use thiserror::Error;

use crate::common::simple_types::OrderStatus;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("failed to write order output")]
    Output(#[from] io::Error),
}
