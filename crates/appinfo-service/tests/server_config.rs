#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::net::SocketAddr;

use appinfo_core::{AppInfoError, EnvConfig};
use appinfo_service::config::{PortPolicy, ServerConfig, DEFAULT_PORT};

fn server_cfg(vars: &[(&str, &str)]) -> appinfo_core::Result<ServerConfig> {
    let env = EnvConfig::from_vars(vars.iter().map(|(k, v)| (*k, *v))).expect("snapshot");
    ServerConfig::from_env(&env)
}

#[test]
fn defaults_to_port_5000_on_all_interfaces() {
    let cfg = server_cfg(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.port_policy, PortPolicy::Fallback);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
}

#[test]
fn numeric_port_is_used() {
    let cfg = server_cfg(&[("PORT", "8080")]).unwrap();
    assert_eq!(cfg.listen_addr().port(), 8080);
}

#[test]
fn invalid_port_falls_back_by_default() {
    for raw in ["abc", "", "70000", "-1"] {
        let cfg = server_cfg(&[("PORT", raw)]).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT, "PORT={raw:?}");
    }
}

#[test]
fn invalid_port_fails_fast_in_strict_mode() {
    let err = server_cfg(&[("PORT", "eighty"), ("APP_INFO_STRICT_PORT", "1")]).expect_err("must fail");
    assert!(matches!(err, AppInfoError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");

    let cfg = server_cfg(&[("PORT", "9000"), ("APP_INFO_STRICT_PORT", "1")]).unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.port_policy, PortPolicy::Strict);
}
