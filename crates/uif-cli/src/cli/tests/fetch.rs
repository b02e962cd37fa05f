//! Tests for the fetch subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_fetch_single_url() {
    match parse(&["uif", "fetch", "https://example.com/cat.png"]) {
        CliCommand::Fetch {
            urls,
            dir,
            allow_unsafe_type,
            allow_large,
            no_input,
        } => {
            assert_eq!(urls, vec!["https://example.com/cat.png"]);
            assert!(dir.is_none());
            assert!(!allow_unsafe_type);
            assert!(!allow_large);
            assert!(!no_input);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_multiple_urls() {
    match parse(&[
        "uif",
        "fetch",
        "https://example.com/a.png",
        "https://example.com/b.jpg",
        "https://example.com/c.gif",
    ]) {
        CliCommand::Fetch { urls, .. } => {
            assert_eq!(
                urls,
                vec![
                    "https://example.com/a.png",
                    "https://example.com/b.jpg",
                    "https://example.com/c.gif",
                ]
            );
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_dir() {
    match parse(&[
        "uif",
        "fetch",
        "https://example.com/cat.png",
        "--dir",
        "/tmp/gallery",
    ]) {
        CliCommand::Fetch { dir, .. } => {
            assert_eq!(dir.as_deref(), Some(std::path::Path::new("/tmp/gallery")));
        }
        _ => panic!("expected Fetch with --dir"),
    }
}

#[test]
fn cli_parse_fetch_policy_flags() {
    match parse(&[
        "uif",
        "fetch",
        "https://example.com/cat.png",
        "--allow-unsafe-type",
        "--allow-large",
        "--no-input",
    ]) {
        CliCommand::Fetch {
            allow_unsafe_type,
            allow_large,
            no_input,
            ..
        } => {
            assert!(allow_unsafe_type);
            assert!(allow_large);
            assert!(no_input);
        }
        _ => panic!("expected Fetch with policy flags"),
    }
}

#[test]
fn cli_parse_fetch_requires_a_url() {
    assert!(Cli::try_parse_from(["uif", "fetch"]).is_err());
}
