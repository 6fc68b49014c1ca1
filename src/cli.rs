use clap::Parser;

use coffee_shop::{ForwardPolicy, Lifecycle, ShopConfig};

#[derive(Parser)]
#[command(name = "coffee-shop")]
#[command(about = "Walks a coffee order through factories, commands, discounts and state.")]
pub struct CommandLine {
    /// Whether a discount hands the order on to the next discount
    #[arg(long, value_enum, default_value_t = ForwardPolicy::Literal)]
    pub discount_policy: ForwardPolicy,

    /// How payment and shipping are recorded
    #[arg(long, value_enum, default_value_t = Lifecycle::Announce)]
    pub lifecycle: Lifecycle,

    /// Log each step to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> ShopConfig {
        ShopConfig {
            discount_policy: self.discount_policy,
            lifecycle: self.lifecycle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_reproduce_default_config() {
        let commands = CommandLine::try_parse_from(["coffee-shop"]).unwrap();
        let config = commands.config();
        let default = ShopConfig::default();

        assert_eq!(config.discount_policy, default.discount_policy);
        assert_eq!(config.lifecycle, default.lifecycle);
        assert!(!commands.verbose);
    }

    #[test]
    fn flags_select_policy_and_lifecycle() {
        let commands = CommandLine::try_parse_from([
            "coffee-shop",
            "--discount-policy",
            "forwarding",
            "--lifecycle",
            "guarded",
            "-v",
        ])
        .unwrap();
        let config = commands.config();

        assert_eq!(config.discount_policy, ForwardPolicy::Forwarding);
        assert_eq!(config.lifecycle, Lifecycle::Guarded);
        assert!(commands.verbose);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(CommandLine::try_parse_from(["coffee-shop", "--discount-policy", "always"]).is_err());
    }
}
