use clap::ValueEnum;

/// How a concrete discount handler treats its successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ForwardPolicy {
    /// Concrete handlers stop the chain after applying their own discount.
    #[default]
    Literal,
    /// Concrete handlers apply their discount, then hand off to the successor.
    Forwarding,
}

/// Which `OrderState` implementation the scenario drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Lifecycle {
    /// Announces payment and shipping without touching the order.
    #[default]
    Announce,
    /// Records the status on the order and rejects out-of-order transitions.
    Guarded,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ShopConfig {
    pub discount_policy: ForwardPolicy,
    pub lifecycle: Lifecycle,
}
