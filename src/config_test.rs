use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn port_rejects_garbage_and_overflow() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn bind_addr_defaults_to_all_interfaces() {
    assert_eq!(parse_bind_addr(None), Ok(DEFAULT_BIND_ADDR));
}

#[test]
fn bind_addr_accepts_v4_and_v6() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(parse_bind_addr(Some("::1")).is_ok());
    assert_eq!(
        parse_bind_addr(Some("localhost")),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}

#[test]
fn error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: x");
    assert_eq!(ConfigError::Leptos("missing".into()).to_string(), "leptos configuration: missing");
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_site_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("SITE_ASSETS_DIR");
    }
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_site_env();
        std::env::set_var("PORT", "5050");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("SITE_ASSETS_DIR", "/srv/greenfelt");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr(), "127.0.0.1:5050".parse().unwrap());
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/greenfelt"));

    unsafe { clear_site_env() };
}

#[test]
fn from_env_defaults_assets_dir_to_crate() {
    unsafe { clear_site_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("assets"));
}
