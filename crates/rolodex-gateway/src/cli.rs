use clap::{Parser, ValueEnum};
use rolodex_storage::{DEFAULT_COLLECTION, DEFAULT_DATABASE};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "ROLODEX_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "ROLODEX_STORAGE_BACKEND";
pub const MONGO_URI_ENV: &str = "MONGO_URI";
pub const MONGO_DATABASE_ENV: &str = "ROLODEX_MONGO_DATABASE";
pub const MONGO_COLLECTION_ENV: &str = "ROLODEX_MONGO_COLLECTION";
pub const LOG_FORMAT_ENV: &str = "ROLODEX_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "mongodb")]
    MongoDb,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::MongoDb => write!(f, "mongodb"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "rolodex-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::MongoDb
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MONGO_URI_ENV, required_if_eq("storage", "mongodb"))]
    pub mongo_uri: Option<String>,

    #[arg(long, env = MONGO_DATABASE_ENV, default_value = DEFAULT_DATABASE)]
    pub mongo_database: String,

    #[arg(long, env = MONGO_COLLECTION_ENV, default_value = DEFAULT_COLLECTION)]
    pub mongo_collection: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}
