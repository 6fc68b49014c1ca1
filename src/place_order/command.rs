use std::io::{self, Write};

use super::order::Order;

/// A request packaged so an invoker can run it without knowing the receiver.
pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct OrderCommand<'o, 'a> {
    order: &'o Order<'a>,
}

impl<'o, 'a> OrderCommand<'o, 'a> {
    pub fn new(order: &'o Order<'a>) -> Self {
        Self { order }
    }
}

impl Command for OrderCommand<'_, '_> {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        self.order.execute(out)
    }
}
