//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which store backend holds the pastes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StoreKind {
    /// Process memory; pastes vanish on restart.
    Memory,
    /// One file per paste under `--data-dir`.
    Fs,
}

/// quickpaste - anonymous, ephemeral text pastes
#[derive(Parser, Debug)]
#[command(name = "quickpaste")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "QUICKPASTE_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Store backend
    #[arg(long, env = "QUICKPASTE_STORE", value_enum, default_value_t = StoreKind::Fs)]
    pub store: StoreKind,

    /// Directory holding pastes for the `fs` store
    #[arg(long, env = "QUICKPASTE_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "QUICKPASTE_LOG", default_value = "info")]
    pub log_level: String,
}
