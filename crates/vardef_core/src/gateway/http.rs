//! HTTP gateway over the backend web service.
//!
//! # Invariants
//! - One blocking request per call, bounded by the configured timeout.
//! - Non-2xx replies become `GatewayError::Rejected` with `additInfos`.

use crate::config::GatewayConfig;
use crate::gateway::wire::{decode_var_defs, error_detail};
use crate::gateway::{GatewayError, GatewayResult, SaveRequest, SyncGateway};
use crate::model::attributes::VarDefMap;
use log::{info, warn};
use reqwest::blocking::{Client, Response};

/// Blocking HTTP implementation of [`SyncGateway`].
pub struct HttpSyncGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpSyncGateway {
    /// Builds a client from validated configuration.
    pub fn try_new(config: &GatewayConfig) -> GatewayResult<Self> {
        let config = config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| GatewayError::Transport(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

impl SyncGateway for HttpSyncGateway {
    fn load_all(&self) -> GatewayResult<VarDefMap> {
        let response = self
            .client
            .get(self.config.vardefs_url())
            .send()
            .map_err(transport_error)?;
        let body = ensure_success(response)?
            .text()
            .map_err(transport_error)?;
        let definitions = decode_var_defs(&body)?;
        info!(
            "event=gateway_load module=gateway status=ok count={}",
            definitions.len()
        );
        Ok(definitions)
    }

    fn save_one(&self, request: &SaveRequest) -> GatewayResult<()> {
        let response = self
            .client
            .post(self.config.save_url())
            .form(&request.form_pairs())
            .send()
            .map_err(transport_error)?;
        ensure_success(response)?;
        info!(
            "event=gateway_save module=gateway status=ok name={}",
            request.name
        );
        Ok(())
    }

    fn apply_all(&self, definitions: &VarDefMap) -> GatewayResult<()> {
        let response = self
            .client
            .post(self.config.vardefs_url())
            .json(definitions)
            .send()
            .map_err(transport_error)?;
        ensure_success(response)?;
        info!(
            "event=gateway_apply module=gateway status=ok count={}",
            definitions.len()
        );
        Ok(())
    }
}

fn ensure_success(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let detail = error_detail(&body);
    warn!(
        "event=gateway_reply module=gateway status=rejected http_status={} has_detail={}",
        status.as_u16(),
        detail.is_some()
    );
    Err(GatewayError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    warn!("event=gateway_transport module=gateway status=error timeout={}", err.is_timeout());
    GatewayError::Transport(err.to_string())
}
