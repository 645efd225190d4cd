use std::path::PathBuf;

use clap::Parser;

/// Runtime configuration for the order desk.
#[derive(Debug, Clone, Parser)]
#[command(name = "order_desk", about = "Validated in-memory order collection")]
pub struct Config {
    /// Capacity of the order actor's request channel.
    #[arg(long, env = "ORDER_DESK_BUFFER_SIZE", default_value_t = 32)]
    pub buffer_size: usize,

    /// JSON file with orders to pre-populate the collection.
    #[arg(long, env = "ORDER_DESK_SEED")]
    pub seed: Option<PathBuf>,

    /// Default tracing filter; `RUST_LOG` takes precedence.
    #[arg(long, env = "ORDER_DESK_LOG", default_value = "info,order_desk=debug")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["order_desk"]).unwrap();
        assert_eq!(config.buffer_size, 32);
        assert!(config.seed.is_none());
        assert_eq!(config.log_filter, "info,order_desk=debug");
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "order_desk",
            "--buffer-size",
            "4",
            "--seed",
            "orders.json",
        ])
        .unwrap();
        assert_eq!(config.buffer_size, 4);
        assert_eq!(config.seed, Some(PathBuf::from("orders.json")));
    }
}
