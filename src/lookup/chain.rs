use super::IpLookup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    Resolved { provider: String, address: String },
    Exhausted,
}

/// Try each provider in order, one attempt each, until the first one
/// yields an address. A failed attempt never aborts the chain.
pub async fn resolve<L>(providers: &[L]) -> ChainOutcome
where
    L: IpLookup,
{
    for provider in providers {
        match provider.lookup().await {
            Ok(address) => {
                debug!("{} resolved {}", provider.name(), address);
                return ChainOutcome::Resolved {
                    provider: provider.name().to_string(),
                    address,
                };
            }
            Err(err) => {
                warn!("{} lookup failed: {}", provider.name(), err);
            }
        }
    }
    ChainOutcome::Exhausted
}
