mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};

use cli::Command;
use dogechain_core::lookup::{address_summary, network_stats};
use dogechain_core::types::NetHashSample;
use dogechain_core::{ApiConfig, ApiError, DogechainApi, Endpoint, HttpApiClient, NetHashQuery};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout carries only the response.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = ApiConfig {
        host: args.host.clone(),
        api_path: args.api_path.clone(),
        timeout: args.timeout_secs.map(Duration::from_secs),
        encode_segments: args.encode_segments,
        ..ApiConfig::default()
    };
    let client = HttpApiClient::new(config).wrap_err("configure explorer client")?;

    if args.dry_run {
        let endpoint = single_endpoint(&args.command).ok_or_else(|| {
            eyre!("--dry-run only applies to subcommands that issue a single request")
        })?;
        let url = client
            .request_url(&endpoint)
            .wrap_err("resolve request URL")?;
        println!("{url}");
        return Ok(());
    }

    tracing::debug!(host = %client.base_url(), command = ?args.command, "running command");
    let output = run(&client, &args.command).await.map_err(|err| {
        let message = format_api_error(client.base_url().as_str(), &err);
        eyre!(message).wrap_err("explorer request failed")
    })?;

    match output {
        Output::Text(body) => {
            print!("{body}");
            if !body.ends_with('\n') {
                println!();
            }
        }
        Output::Json(value) => {
            let pretty = serde_json::to_string_pretty(&value).wrap_err("render JSON output")?;
            println!("{pretty}");
        }
    }

    Ok(())
}

enum Output {
    Text(String),
    Json(serde_json::Value),
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Output, ApiError> {
    serde_json::to_value(value)
        .map(Output::Json)
        .map_err(|e| ApiError::InvalidResponse(format!("render result: {e}")))
}

async fn run(api: &dyn DogechainApi, command: &Command) -> Result<Output, ApiError> {
    let output = match command {
        Command::Transactions => Output::Json(api.get_transactions().await?),
        Command::Balance { address } => Output::Text(api.get_address_balance(address).await?),
        Command::AddressToHash { address } => Output::Text(api.address_to_hash(address).await?),
        Command::CheckAddress { address } => Output::Text(api.check_address(address).await?),
        Command::DecodeAddress { address } => Output::Text(api.decode_address(address).await?),
        Command::BlockCount => Output::Text(api.get_block_count().await?),
        Command::Difficulty => Output::Text(api.get_difficulty().await?),
        Command::Received { address } => Output::Text(api.get_received_by_address(address).await?),
        Command::Sent { address } => Output::Text(api.get_sent_by_address(address).await?),
        Command::TotalSupply => Output::Text(api.get_total_supply().await?),
        Command::HashToAddress { hash } => Output::Text(api.hash_to_address(hash).await?),
        Command::Nethash {
            interval,
            start,
            stop,
            table,
        } => {
            let query = NetHashQuery {
                interval: *interval,
                start: *start,
                stop: *stop,
            };
            if *table {
                let samples: Vec<NetHashSample> = api.get_net_hash_samples(query).await?;
                to_json(&samples)?
            } else {
                Output::Json(api.get_net_hash(query).await?)
            }
        }
        Command::Summary { address } => to_json(&address_summary(api, address).await?)?,
        Command::Stats => to_json(&network_stats(api).await?)?,
    };
    Ok(output)
}

/// The endpoint a subcommand requests, or `None` for composed lookups.
fn single_endpoint(command: &Command) -> Option<Endpoint> {
    let endpoint = match command {
        Command::Transactions => Endpoint::transactions(),
        Command::Balance { address } => Endpoint::address_balance(address),
        Command::AddressToHash { address } => Endpoint::address_to_hash(address),
        Command::CheckAddress { address } => Endpoint::check_address(address),
        Command::DecodeAddress { address } => Endpoint::decode_address(address),
        Command::BlockCount => Endpoint::block_count(),
        Command::Difficulty => Endpoint::difficulty(),
        Command::Received { address } => Endpoint::received_by_address(address),
        Command::Sent { address } => Endpoint::sent_by_address(address),
        Command::TotalSupply => Endpoint::total_supply(),
        Command::HashToAddress { hash } => Endpoint::hash_to_address(hash),
        Command::Nethash {
            interval,
            start,
            stop,
            ..
        } => Endpoint::net_hash(NetHashQuery {
            interval: *interval,
            start: *start,
            stop: *stop,
        }),
        Command::Summary { .. } | Command::Stats => return None,
    };
    Some(endpoint)
}

fn format_api_error(base_url: &str, err: &ApiError) -> String {
    let mut lines = vec![
        format!("request to `{base_url}` failed"),
        format!("error: {err}"),
    ];

    let source_error = match err {
        ApiError::Transport(e) => format!("{e:?}"),
        other => other.to_string(),
    };
    match err {
        ApiError::Transport(e) if e.is_timeout() => lines.push(
            "hint: the explorer did not answer in time; retry or raise --timeout-secs".into(),
        ),
        ApiError::Transport(_) if source_error.contains("dns error") => lines.push(
            "hint: hostname resolution failed; verify --host and your DNS/network".into(),
        ),
        ApiError::Transport(_)
            if source_error.contains("certificate") || source_error.contains("tls") =>
        {
            lines.push(
                "hint: TLS handshake failed; verify certificate trust and the https host".into(),
            )
        }
        ApiError::Transport(e) if e.is_connect() => lines.push(
            "hint: connection refused; verify --host and that the explorer is reachable".into(),
        ),
        ApiError::Status { status: 404, .. } => lines.push(
            "hint: endpoint not found; verify --api-path (default `chain/Dogecoin/q/`)".into(),
        ),
        ApiError::Status { status, .. } if *status >= 500 => {
            lines.push("hint: the explorer reported a server error; try again later".into())
        }
        ApiError::Decode { .. } => lines.push(
            "hint: the explorer answered with non-JSON text; it may be under maintenance".into(),
        ),
        _ => {}
    }

    lines.join("\n")
}
