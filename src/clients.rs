use std::io::{self, Write};

use tracing::debug;

/// A shop customer. Holds no data of its own.
///
/// Methods take `&mut dyn Write` so orders can hold a `&dyn Client`.
pub trait Client {
    fn place_order(&self, out: &mut dyn Write) -> io::Result<()>;
    fn view_order_history(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConcreteClient;

impl Client for ConcreteClient {
    fn place_order(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Order placed")
    }

    // no history is kept; this only announces the view
    fn view_order_history(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Order history viewed")
    }
}

/// Sends notifications to a client without the client knowing who sent them.
pub trait Mediator {
    fn notify(&self, client: &dyn Client, message: &str, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConcreteMediator;

impl Mediator for ConcreteMediator {
    fn notify(&self, _client: &dyn Client, message: &str, out: &mut dyn Write) -> io::Result<()> {
        debug!(notification = message, "notifying client");
        writeln!(out, "Notification to client: {message}")
    }
}
