use axum::Json;
use serde::Serialize;

use crate::{
    Error,
    lookup::{self, ChainOutcome, IpLookup, resolve},
};

#[derive(Serialize, Debug)]
pub struct IpResponse {
    ip: String,
}

pub async fn ip_proxy() -> Result<Json<IpResponse>, Error> {
    resolve_chain(&lookup::server_chain()).await.map(Json)
}

async fn resolve_chain<L>(providers: &[L]) -> Result<IpResponse, Error>
where
    L: IpLookup,
{
    match resolve(providers).await {
        ChainOutcome::Resolved { provider, address } => {
            info!("proxy lookup resolved by {}: {}", provider, address);
            Ok(IpResponse { ip: address })
        }
        ChainOutcome::Exhausted => Err(Error::ChainExhausted),
    }
}
