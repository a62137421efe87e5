use std::path::Path;

use url::Url;

use crate::app::AppContext;
use crate::app::commands::load;
use crate::domain::{AppError, NetworkId};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReport {
    pub network: String,
    pub url: Url,
    pub network_id: NetworkId,
}

/// Resolve the RPC endpoint of a named network.
///
/// With `chain_id`, the profile's `network_id` must accept it.
pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    path: &Path,
    network: &str,
    chain_id: Option<u64>,
) -> Result<EndpointReport, AppError> {
    let config = load::execute(ctx.store(), path)?;
    let profile = config.network(network)?;

    if let Some(chain_id) = chain_id {
        if !profile.network_id.accepts(chain_id) {
            return Err(AppError::NetworkIdMismatch {
                network: network.to_string(),
                expected: profile.network_id.to_string(),
                actual: chain_id,
            });
        }
    }

    Ok(EndpointReport {
        network: network.to_string(),
        url: profile.endpoint()?,
        network_id: profile.network_id,
    })
}
