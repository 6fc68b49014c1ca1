use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Product {
    Coffee,
    Tea,
    Cookie,
}

impl Product {
    pub fn name(&self) -> &'static str {
        match self {
            Product::Coffee => "Coffee",
            Product::Tea => "Tea",
            Product::Cookie => "Cookie",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an order is in its lifecycle. Only the guarded lifecycle moves it
/// past `Created`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Created,
    Paid,
    Shipped,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Created => "created",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
        };
        f.write_str(label)
    }
}
