use std::net::Ipv4Addr;

use super::*;

const SITE_PORT: u16 = 3000;

#[test]
fn defaults_bind_all_interfaces_on_site_port() {
    let config = ServerConfig::from_values(None, None, SITE_PORT).unwrap();
    assert_eq!(config.host, IpAddr::from(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 3000);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn empty_values_fall_back() {
    let config = ServerConfig::from_values(Some(""), Some("   "), SITE_PORT).unwrap();
    assert_eq!(config.socket_addr(), SocketAddr::new(DEFAULT_HOST, SITE_PORT));
}

#[test]
fn explicit_host_and_port_override() {
    let config = ServerConfig::from_values(Some("127.0.0.1"), Some("8080"), SITE_PORT).unwrap();
    assert_eq!(config.host, IpAddr::from(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 8080);
}

#[test]
fn port_is_trimmed() {
    let config = ServerConfig::from_values(None, Some(" 4000 "), SITE_PORT).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_values(None, Some("eighty"), SITE_PORT).unwrap_err();
    assert!(matches!(err, ServerError::Config { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");

    let err = ServerConfig::from_values(None, Some("70000"), SITE_PORT).unwrap_err();
    assert!(matches!(err, ServerError::Config { var: "PORT", .. }));
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_values(Some("localhost"), None, SITE_PORT).unwrap_err();
    assert!(matches!(err, ServerError::Config { var: "HOST", .. }));
}

#[test]
fn ipv6_host_is_accepted() {
    let config = ServerConfig::from_values(Some("::1"), Some("3000"), SITE_PORT).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}
