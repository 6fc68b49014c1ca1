use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::clients::{Client, ConcreteClient};
use crate::config::{Lifecycle, ShopConfig};
use crate::discounts::DiscountHandler;
use crate::place_order::{Command, GuardedLifecycle, Order, OrderCommand, OrderState, PaidShippedState};
use crate::products::{CoffeeFactory, ProductFactory};

/// Runs one pass of the shop: every component is built once and each
/// capability is invoked once, in a fixed order.
pub fn run(config: &ShopConfig, out: &mut dyn Write) -> Result<()> {
    // ======================================================
    // Section 1 : Products
    // ======================================================

    debug!("creating products");
    let coffee_factory = CoffeeFactory;
    let coffee = coffee_factory.create_product();
    coffee.display(out)?;

    // ======================================================
    // Section 2 : Clients
    // ======================================================

    debug!("client activity");
    let client = ConcreteClient;
    client.place_order(out)?;
    client.view_order_history(out)?;

    // ======================================================
    // Section 3 : Orders
    // ======================================================

    debug!("executing order");
    let mut order = Order::new(&client);
    order.add_product(&coffee);
    let order_command = OrderCommand::new(&order);
    order_command.execute(out)?;

    // ======================================================
    // Section 4 : Discounts
    // ======================================================

    debug!(policy = ?config.discount_policy, "applying discounts");
    let vip_discount = DiscountHandler::vip();
    let mut early_bird_discount = DiscountHandler::early_bird();
    early_bird_discount.set_next_handler(&vip_discount);

    let mut discounted_order = Order::new(&client);
    early_bird_discount.apply_discount(&discounted_order, config.discount_policy, out)?;

    // ======================================================
    // Section 5 : Paid and shipped
    // ======================================================

    debug!(lifecycle = ?config.lifecycle, "settling order");
    let order_state: &dyn OrderState = match config.lifecycle {
        Lifecycle::Announce => &PaidShippedState,
        Lifecycle::Guarded => &GuardedLifecycle,
    };
    order_state.mark_paid(&mut discounted_order, out)?;
    order_state.mark_shipped(&mut discounted_order, out)?;

    debug!(status = %discounted_order.status(), "scenario finished");
    Ok(())
}
