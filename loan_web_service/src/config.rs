//! Server configuration

use std::net::SocketAddr;

/// Default host, used when no valid bind address is provided
pub const DEFAULT_HOST: [u8; 4] = [127, 0, 0, 1];

/// Default port, used when no valid bind address is provided
pub const DEFAULT_PORT: u16 = 8080;

/// Default log filter, used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "loan=info";

/// **Get bind address**
///
/// Tries to create a socket address, in the `host:port` form, from the provided argument.
///
/// - If the provided argument is the `None` variant,
///   returns the default address.
/// - If it's a `String`, tries to parse it into a socket address.
///   - If it's valid, returns it.
///   - If it's malformed, returns the default.
///
/// The default address is [`DEFAULT_HOST`]:[`DEFAULT_PORT`].
pub fn get_bind_addr(bind_addr: Option<String>) -> SocketAddr {
    let default = SocketAddr::from((DEFAULT_HOST, DEFAULT_PORT));

    match bind_addr {
        None => {
            log::info!("No bind address provided; using default: {}", default);
            default
        }
        Some(addr) => addr.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "Provided bind address \"{}\" could not be parsed; using default: {}",
                addr,
                default
            );
            default
        }),
    }
}
