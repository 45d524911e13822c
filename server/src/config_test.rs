use super::*;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn defaults_when_nothing_set() {
    let config = SiteConfig::default();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

// =============================================================================
// overrides
// =============================================================================

#[test]
fn overrides_are_parsed() {
    let config = SiteConfig::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("RUST_LOG", "server=debug,tower_http=info"),
    ]));
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.log_filter, "server=debug,tower_http=info");
}

#[test]
fn ipv6_host_is_accepted() {
    let config = SiteConfig::from_lookup(lookup(&[("HOST", "::1")]));
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let config = SiteConfig::from_lookup(lookup(&[
        ("HOST", "localhost"),
        ("PORT", "70000"),
        ("RUST_LOG", "   "),
    ]));
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "4321");
    }
    let config = SiteConfig::from_env();
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4321");
}
