use crate::cli::Args;
use clap::Parser;
use std::{net::SocketAddr, str::FromStr};

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["flow-puzzle-api"]).expect("Failed to parse empty args.");

    assert_eq!(
        args.listen_address,
        SocketAddr::from_str("0.0.0.0:8000").unwrap()
    );
    assert_eq!(args.log_level, "flow_puzzle_api=info");
}

#[test]
fn test_overrides() {
    let args = Args::try_parse_from([
        "flow-puzzle-api",
        "--listen-address",
        "127.0.0.1:9000",
        "--log-level",
        "debug",
    ])
    .expect("Failed to parse args.");

    assert_eq!(
        args.listen_address,
        SocketAddr::from_str("127.0.0.1:9000").unwrap()
    );
    assert_eq!(args.log_level, "debug");
}

#[test]
fn test_rejects_bad_listen_address() {
    let result = Args::try_parse_from(["flow-puzzle-api", "--listen-address", "localhost"]);

    assert!(result.is_err());
}
