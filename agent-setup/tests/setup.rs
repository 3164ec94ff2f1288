use std::fs;
use std::sync::Mutex;

use agent_config::{store, AgentConfig, DEFAULT_BROKER_ADDRESS};
use agent_setup::{setup, Params};
use clap::Parser;

static SERIAL: Mutex<()> = Mutex::new(());

fn params(args: &[&str]) -> Params {
    let mut argv = vec!["agent-setup"];
    argv.extend_from_slice(args);
    Params::try_parse_from(argv).expect("valid args")
}

#[test]
fn defaults_to_udp_tcp_and_fallback_address() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    store::replace(AgentConfig::default());

    let cfg = setup::run(&params(&[])).expect("default setup");
    assert_eq!(cfg.protocols, vec!["udp".to_string(), "tcp".to_string()]);
    assert_eq!(cfg.addresses, vec![DEFAULT_BROKER_ADDRESS.to_string()]);
    assert_eq!(store::snapshot(), cfg);
}

#[test]
fn bad_protocol_names_offender() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    store::replace(AgentConfig::default());

    let err = setup::run(&params(&["--protocol", "udp,http"])).unwrap_err();
    assert!(format!("{:#}", err).contains("http"));
}

#[test]
fn file_addresses_survive_and_flag_overrides() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    store::replace(AgentConfig::default());

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("agent.json");
    fs::write(&path, r#"{"addresses":["file.example:1"],"protocols":["http"]}"#).unwrap();
    let path = path.to_str().unwrap();

    // protocols from the file are overwritten before validation
    let cfg = setup::run(&params(&["--config", path, "--protocol", "tcp"])).unwrap();
    assert_eq!(cfg.addresses, vec!["file.example:1".to_string()]);
    assert_eq!(cfg.protocols, vec!["tcp".to_string()]);

    let cfg = setup::run(&params(&["--config", path, "--address", "x.example:2,y.example:3"])).unwrap();
    assert_eq!(cfg.addresses, vec!["x.example:2".to_string(), "y.example:3".to_string()]);
}
