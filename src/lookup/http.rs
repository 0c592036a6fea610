use isahc::{Request, prelude::AsyncReadResponseExt};

use crate::Error;

use super::{CLIENT, IpFormat, IpLookup, IpLookupParser};

pub struct HttpIpLookup {
    name: &'static str,
    url: String,
    format: IpFormat,
}

impl HttpIpLookup {
    pub fn new(name: &'static str, url: impl Into<String>, format: IpFormat) -> Self {
        Self {
            name,
            url: url.into(),
            format,
        }
    }

    pub fn ipify() -> Self {
        Self::new("ipify", "https://api.ipify.org?format=json", IpFormat::JsonIp)
    }

    pub fn ifconfig_me() -> Self {
        Self::new("ifconfig.me", "https://ifconfig.me/ip", IpFormat::PlainText)
    }

    pub fn ifconfig_co() -> Self {
        Self::new("ifconfig.co", "https://ifconfig.co/ip", IpFormat::PlainText)
    }
}

/// Preference-ordered upstream chain for the server-side proxy.
pub fn server_chain() -> Vec<HttpIpLookup> {
    vec![
        HttpIpLookup::ipify(),
        HttpIpLookup::ifconfig_me(),
        HttpIpLookup::ifconfig_co(),
    ]
}

impl IpLookup for HttpIpLookup {
    fn name(&self) -> &str {
        self.name
    }

    async fn lookup(&self) -> Result<String, Error> {
        let request = Request::get(self.url.as_str()).body(()).unwrap();
        let mut response = CLIENT.send_async(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }
        let body = response.text().await?;
        self.format.parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::get};
    use tokio::net::TcpListener;

    use super::*;
    use crate::lookup::{ChainOutcome, resolve};

    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route("/json-ip", get(|| async { r#"{"ip":"203.0.113.7"}"# }))
            .route("/text-ip", get(|| async { "203.0.113.8\n" }))
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream down") }),
            )
            .route("/garbage", get(|| async { "<html>maintenance</html>" }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn json_provider_resolves_over_http() {
        let base = spawn_upstream().await;
        let provider = HttpIpLookup::new("json", format!("{base}/json-ip"), IpFormat::JsonIp);
        assert_eq!(provider.lookup().await.unwrap(), "203.0.113.7");
    }

    #[tokio::test]
    async fn text_provider_trims_the_body() {
        let base = spawn_upstream().await;
        let provider = HttpIpLookup::new("text", format!("{base}/text-ip"), IpFormat::PlainText);
        assert_eq!(provider.lookup().await.unwrap(), "203.0.113.8");
    }

    #[tokio::test]
    async fn non_success_status_is_a_lookup_failure() {
        let base = spawn_upstream().await;
        let provider = HttpIpLookup::new("broken", format!("{base}/broken"), IpFormat::PlainText);
        assert!(matches!(
            provider.lookup().await,
            Err(Error::UpstreamStatus(500))
        ));
    }

    #[tokio::test]
    async fn chain_falls_through_broken_upstreams() {
        let base = spawn_upstream().await;
        let providers = vec![
            HttpIpLookup::new("broken", format!("{base}/broken"), IpFormat::JsonIp),
            HttpIpLookup::new("garbage", format!("{base}/garbage"), IpFormat::JsonIp),
            HttpIpLookup::new("text", format!("{base}/text-ip"), IpFormat::PlainText),
        ];

        let outcome = resolve(&providers).await;
        assert_eq!(
            outcome,
            ChainOutcome::Resolved {
                provider: "text".to_string(),
                address: "203.0.113.8".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unreachable_upstreams_exhaust_the_chain() {
        let providers = vec![
            HttpIpLookup::new("refused-a", "http://127.0.0.1:1/ip", IpFormat::JsonIp),
            HttpIpLookup::new("refused-b", "http://127.0.0.1:1/ip", IpFormat::PlainText),
        ];
        assert_eq!(resolve(&providers).await, ChainOutcome::Exhausted);
    }
}
