//! Command-line and environment configuration for the server binary.

use clap::Parser;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Bookshelf HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "bookshelf-server", version)]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// tracing filter directives, e.g. `info` or `bookshelf_core=debug`
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unset(key: &str) -> bool {
        std::env::var_os(key).is_none()
    }

    #[test]
    fn bare_invocation_falls_back_to_defaults() {
        let config = ServerConfig::try_parse_from(["bookshelf-server"]).unwrap();
        if unset("HOST") {
            assert_eq!(config.host, DEFAULT_HOST);
        }
        if unset("PORT") {
            assert_eq!(config.port, DEFAULT_PORT);
        }
        if unset("RUST_LOG") {
            assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        }
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            ServerConfig::try_parse_from(["bookshelf-server", "--host", "0.0.0.0", "--port", "9000"]).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn rejects_invalid_port() {
        let result = ServerConfig::try_parse_from(["bookshelf-server", "--port", "not-a-port"]);
        assert!(result.is_err());
    }
}
