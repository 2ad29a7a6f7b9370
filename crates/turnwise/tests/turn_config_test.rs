//! Tests for loading turn configuration from disk.

mod common;

use std::io::Write;
use turnwise::{TurnConfig, TurnError, TurnOrder};

#[test]
fn test_load_config_from_file() -> anyhow::Result<()> {
    common::init_tracing();
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "players = 3")?;
    writeln!(file, "first_player = 2")?;

    let config = TurnConfig::from_file(file.path())?;
    assert_eq!(config, TurnConfig::new(3, 2));

    let mut order = TurnOrder::from_config(&config)?;
    assert_eq!(*order.current(), 2);
    order.advance();
    order.advance();
    assert_eq!(*order.current(), 1);
    Ok(())
}

#[test]
fn test_config_out_of_range_first_player() -> anyhow::Result<()> {
    common::init_tracing();
    let config = TurnConfig::from_toml_str("players = 2\nfirst_player = 7")?;

    assert_eq!(
        TurnOrder::from_config(&config),
        Err(TurnError::PlayerOutOfRange {
            player: 7,
            players: 2
        })
    );
    Ok(())
}
