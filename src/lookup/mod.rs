use std::time::Duration;

use isahc::{HttpClient, config::Configurable};
use once_cell::sync::Lazy;

mod chain;
mod http;
mod parser;

use crate::Error;

pub use chain::{ChainOutcome, resolve};
pub use http::{HttpIpLookup, server_chain};
pub use parser::{IpFormat, IpLookupParser};

pub static CLIENT: Lazy<HttpClient> = Lazy::new(|| {
    HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .default_header("user-agent", format!("pubip/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap()
});

pub trait IpLookup: Send + Sync {
    fn name(&self) -> &str;
    async fn lookup(&self) -> Result<String, Error>;
}
