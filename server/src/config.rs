//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;
use client::config::{ClientConfig, DispatchMode};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Parser, Debug, Clone)]
#[command(name = "meowww", about = "Minimal chat rooms with one-way websocket notifications")]
pub struct Cli {
    /// Address on which the server will bind.
    #[arg(env = "MEOWWW_ADDR", default_value = "localhost:8000")]
    pub addr: String,

    /// Serve pages that render messages locally instead of posting them.
    #[arg(long, env = "MEOWWW_LOCAL_ECHO")]
    pub local_echo: bool,

    /// Seconds between keep-alive pings on each notification socket.
    #[arg(long, env = "MEOWWW_PING_INTERVAL_SECS", default_value_t = 30)]
    pub ping_interval_secs: u64,

    /// Messages buffered per room before slow sockets start skipping.
    #[arg(long, env = "MEOWWW_ROOM_CAPACITY", default_value_t = 64)]
    pub room_capacity: usize,
}

/// Runtime settings derived from [`Cli`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub client: ClientConfig,
    pub ping_interval: Duration,
    pub room_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            ping_interval: Duration::from_secs(30),
            room_capacity: 64,
        }
    }
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        let dispatch = if cli.local_echo { DispatchMode::LocalEcho } else { DispatchMode::Remote };
        Self {
            client: ClientConfig::new(dispatch),
            ping_interval: Duration::from_secs(cli.ping_interval_secs.max(1)),
            room_capacity: cli.room_capacity.max(1),
        }
    }
}
