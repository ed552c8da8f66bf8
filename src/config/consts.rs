/// Port the server listens on when the configuration does not name one.
pub const DEFAULT_PORT: u16 = 5555;
/// Listen on every interface by default.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Tracing filter used when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Upper bound for weights of generated `RANDOM` graphs (lower bound is 1).
pub const RANDOM_MAX_WEIGHT: i64 = 10;
/// Largest vertex count a request header may declare unless configured.
pub const DEFAULT_MAX_VERTICES: usize = 100_000;
/// Largest edge count a request header may declare unless configured.
pub const DEFAULT_MAX_EDGES: usize = 1_000_000;
