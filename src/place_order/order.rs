use std::fmt;
use std::io::{self, Write};

use crate::clients::Client;
use crate::common::simple_types::{OrderStatus, Product};

/// A client's order. Borrows both the client and its products; products are
/// append-only.
pub struct Order<'a> {
    client: &'a dyn Client,
    products: Vec<&'a Product>,
    status: OrderStatus,
}

impl<'a> Order<'a> {
    pub fn new(client: &'a dyn Client) -> Self {
        Self {
            client,
            products: Vec::new(),
            status: OrderStatus::Created,
        }
    }

    pub fn add_product(&mut self, product: &'a Product) {
        self.products.push(product);
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn products(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }

    pub fn client(&self) -> &'a dyn Client {
        self.client
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Confirms the order. Output does not depend on the products.
    pub fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Order executed")
    }
}

impl fmt::Debug for Order<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("products", &self.products)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
