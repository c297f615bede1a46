use clap::{Parser, Subcommand};

use dogechain_core::config::{DEFAULT_API_PATH, DEFAULT_HOST};
use dogechain_core::endpoint::DEFAULT_NET_HASH_INTERVAL;

/// dogechain: query the dogechain.info explorer API from the command line.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Explorer base URL.
    #[arg(long, global = true, default_value = DEFAULT_HOST, env = "DOGECHAIN_API_HOST")]
    pub host: String,

    /// Path prefix placed before every endpoint.
    #[arg(long, global = true, default_value = DEFAULT_API_PATH, env = "DOGECHAIN_API_PATH")]
    pub api_path: String,

    /// Whole-request timeout in seconds (transport default if omitted).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Percent-encode addresses and hashes as single path segments.
    #[arg(long, global = true)]
    pub encode_segments: bool,

    /// Print the request URL instead of sending it.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Transaction counts of the latest blocks (JSON).
    Transactions,
    /// Amount ever received minus amount ever sent.
    Balance { address: String },
    /// Public key hash encoded in an address.
    AddressToHash { address: String },
    /// Validity check: version byte, or X5 / SZ / CK.
    CheckAddress { address: String },
    /// Version prefix and hash encoded in an address.
    DecodeAddress { address: String },
    /// Current block number.
    BlockCount,
    /// Difficulty of the last solved block.
    Difficulty,
    /// Amount ever received by an address.
    Received { address: String },
    /// Amount ever sent from an address.
    Sent { address: String },
    /// Amount of currency ever mined.
    TotalSupply,
    /// Address for a version-prefixed public key hash.
    HashToAddress { hash: String },
    /// Difficulty and network hash-rate statistics (JSON).
    Nethash {
        /// Blocks per row.
        #[arg(long, default_value_t = DEFAULT_NET_HASH_INTERVAL)]
        interval: u64,
        /// First block.
        #[arg(long, default_value_t = 0)]
        start: u64,
        /// Last block (latest if omitted or 0).
        #[arg(long)]
        stop: Option<u64>,
        /// Print named columns instead of the raw row arrays.
        #[arg(long)]
        table: bool,
    },
    /// Validity verdict, balance, received, and sent for one address.
    Summary { address: String },
    /// Block count, difficulty, and total supply.
    Stats,
}
