#[cfg(test)]
pub mod config_tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use medwatch_site::common::*;

    fn load(vars: &[(&'static str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<&str, String> = vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        SiteConfig::from_lookup(|key| Ok(vars.get(key).cloned()))
    }

    #[test]
    fn test_config_defaults_success() {
        let config = load(&[]).unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.theme, ThemeKind::Infima);
        assert_eq!(config.static_dir, PathBuf::from("./static"));
    }

    #[test]
    fn test_config_reads_all_values_success() {
        let config = load(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("SITE_THEME", "Tailwind"),
            ("STATIC_DIR", "/srv/site"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.theme, ThemeKind::Tailwind);
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_config_blank_values_fall_back_to_defaults() {
        let config = load(&[("BIND_ADDR", "  "), ("SITE_THEME", ""), ("STATIC_DIR", " ")]).unwrap();

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_config_fails_on_invalid_bind_addr() {
        let err = load(&[("BIND_ADDR", "localhost")]).unwrap_err();

        assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
    }

    #[test]
    fn test_config_fails_on_unknown_theme() {
        let err = load(&[("SITE_THEME", "bootstrap")]).unwrap_err();

        assert_eq!(err, ConfigError::UnknownTheme("bootstrap".into()));
    }

    #[test]
    fn test_config_propagates_lookup_error() {
        let err = SiteConfig::from_lookup(|key| Err(ConfigError::NotUnicode(key))).unwrap_err();

        assert_eq!(err, ConfigError::NotUnicode("BIND_ADDR"));
    }

    #[test]
    fn test_theme_kind_round_trips_through_display() {
        for theme in [ThemeKind::Infima, ThemeKind::Tailwind] {
            assert_eq!(theme.to_string().parse::<ThemeKind>().unwrap(), theme);
        }
    }

    #[test]
    fn test_default_bind_addr_matches_documented_value() {
        assert_eq!(DEFAULT_BIND_ADDR.to_string(), "0.0.0.0:8080");
        assert_eq!(SiteConfig::default().bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_server_error_reports_config_cause() {
        let err = ServerError::from(ConfigError::UnknownTheme("bootstrap".into()));

        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown site theme \"bootstrap\" (expected \"infima\" or \"tailwind\")"
        );
    }
}
