use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use config::{Config as ConfigLoader, Environment};
use is_terminal::IsTerminal;
use once_cell::sync::Lazy;
use serde::Deserialize;

const PREFIX: &str = "PUBIP";
const REFRESH_VAR: &str = "REFRESH_SECONDS";
const DEFAULT_REFRESH_SECONDS: u64 = 10;

pub static CONFIG: Lazy<Config> = Lazy::new(init_config);

#[derive(Debug)]
pub enum LogStyle {
    Auto,
    Always,
    Never,
}

impl Default for LogStyle {
    fn default() -> Self {
        Self::Auto
    }
}

impl LogStyle {
    pub fn is_color(&self) -> bool {
        match self {
            LogStyle::Auto => std::io::stdout().is_terminal(),
            LogStyle::Always => true,
            LogStyle::Never => false,
        }
    }
}

impl<'de> Deserialize<'de> for LogStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?.to_lowercase();
        match s.as_str() {
            "auto" => Ok(LogStyle::Auto),
            "always" => Ok(LogStyle::Always),
            "never" => Ok(LogStyle::Never),
            _ => Err(serde::de::Error::unknown_field(
                &s,
                &["auto", "always", "never"],
            )),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Log {
    pub level: String,
    pub style: LogStyle,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: Self::level(),
            style: LogStyle::default(),
        }
    }
}

impl Log {
    fn level() -> String {
        String::from("pubip=info")
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    pub addr: SocketAddr,
    pub debug: bool,
    // never sourced from the prefixed loader, see init_config
    #[serde(skip)]
    pub refresh_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log: Log::default(),
            addr: Self::addr(),
            debug: false,
            refresh_seconds: DEFAULT_REFRESH_SECONDS,
        }
    }
}

impl Config {
    fn addr() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080)
    }
}

pub fn init_config() -> Config {
    let loaded = ConfigLoader::builder()
        .add_source(
            Environment::with_prefix(PREFIX)
                .separator("_")
                .try_parsing(true),
        )
        .add_source(
            Environment::with_prefix(PREFIX)
                .separator("__")
                .prefix_separator("_")
                .try_parsing(true),
        )
        .build()
        .and_then(|cfg| cfg.try_deserialize::<Config>());

    let mut config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {:?}, falling back to defaults", err);
            Config::default()
        }
    };
    config.refresh_seconds = refresh_seconds_from_env();
    println!("{:#?}", config);
    config
}

// REFRESH_SECONDS is recognized bare, without the env prefix
fn refresh_seconds_from_env() -> u64 {
    match env::var(REFRESH_VAR) {
        Ok(raw) => parse_refresh(&raw),
        Err(_) => DEFAULT_REFRESH_SECONDS,
    }
}

fn parse_refresh(raw: &str) -> u64 {
    match raw.trim().parse() {
        Ok(secs) => secs,
        Err(_) => {
            eprintln!(
                "invalid {} value {:?}, using default {}",
                REFRESH_VAR, raw, DEFAULT_REFRESH_SECONDS
            );
            DEFAULT_REFRESH_SECONDS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_port_8080_with_ten_second_refresh() {
        let config = Config::default();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.refresh_seconds, 10);
    }

    #[test]
    fn refresh_parses_integer_seconds() {
        assert_eq!(parse_refresh("5"), 5);
        assert_eq!(parse_refresh(" 30 "), 30);
    }

    #[test]
    fn bad_refresh_falls_back_to_default() {
        assert_eq!(parse_refresh("banana"), 10);
        assert_eq!(parse_refresh(""), 10);
        assert_eq!(parse_refresh("-3"), 10);
        assert_eq!(parse_refresh("1.5"), 10);
    }
}
