use serde::Deserialize;

use crate::Error;

pub trait IpLookupParser: Send + Sync {
    fn parse(&self, body: &str) -> Result<String, Error>;
}

#[derive(Deserialize)]
struct IpBody {
    ip: String,
}

/// Response-parsing rule for one provider: a JSON document with an `ip`
/// field, or a bare address as the whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFormat {
    JsonIp,
    PlainText,
}

impl IpLookupParser for IpFormat {
    fn parse(&self, body: &str) -> Result<String, Error> {
        match self {
            IpFormat::JsonIp => {
                let parsed: IpBody = serde_json::from_str(body)?;
                if parsed.ip.is_empty() {
                    return Err(Error::MissingIpField(body.trim().to_string()));
                }
                Ok(parsed.ip)
            }
            IpFormat::PlainText => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    return Err(Error::EmptyBody);
                }
                Ok(trimmed.to_string())
            }
        }
    }
}
