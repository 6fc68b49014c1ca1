pub mod command;
pub mod order;
pub mod state;


pub use command::{Command, OrderCommand};
pub use order::Order;
pub use state::{GuardedLifecycle, OrderState, PaidShippedState};
