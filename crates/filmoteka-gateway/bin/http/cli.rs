use clap::Parser;
use filmoteka_gateway::telemetry::LogFormat;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "FILMOTEKA_GATEWAY_LISTEN_ADDR";
pub const DATA_FILE_ENV: &str = "FILMOTEKA_GATEWAY_DATA_FILE";
pub const LOG_FORMAT_ENV: &str = "FILMOTEKA_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_DATA_FILE: &str = "movies.json";

#[derive(Debug, Parser)]
#[command(name = "filmoteka-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// JSON array of movies used to seed the catalogue.
    #[arg(long, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}
