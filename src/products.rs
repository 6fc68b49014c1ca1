use std::io::{self, Write};

pub use crate::common::simple_types::Product;

impl Product {
    pub fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.name())
    }
}

/// Builds one product variant. Each factory is bound to exactly one variant.
pub trait ProductFactory {
    fn create_product(&self) -> Product;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CoffeeFactory;

#[derive(Clone, Copy, Debug, Default)]
pub struct TeaFactory;

#[derive(Clone, Copy, Debug, Default)]
pub struct CookieFactory;

impl ProductFactory for CoffeeFactory {
    fn create_product(&self) -> Product {
        Product::Coffee
    }
}

impl ProductFactory for TeaFactory {
    fn create_product(&self) -> Product {
        Product::Tea
    }
}

impl ProductFactory for CookieFactory {
    fn create_product(&self) -> Product {
        Product::Cookie
    }
}
