use std::time::Duration;

use async_trait::async_trait;
use reqwest::{redirect, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::{
    coc::{
        payload::{
            CapitalRaidSeasonPayload, ClanPayload, CurrentWarPayload, PagedPayload,
            PlayerPayload, UpstreamErrorPayload, VerifyTokenPayload, WarLogEntryPayload,
        },
        ClanDataSource,
    },
    error::{config::ConfigError, fetch::FetchError, AppError},
    util::tag::normalize_tag,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_REDIRECTS: usize = 3;

/// Builds the shared HTTP client used for upstream calls.
///
/// Requests time out after 5 seconds and follow at most 3 redirects.
pub fn build_http_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|e| FetchError::from(e).into())
}

/// HTTP implementation of [`ClanDataSource`].
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct CocApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl CocApiClient {
    /// Creates a client against `base_url` authenticating with `token`.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client, normally from [`build_http_client`]
    /// - `base_url` - API root including version, e.g. `https://api.clashofclans.com/v1`
    /// - `token` - Bearer credential sent with every request
    ///
    /// # Returns
    /// - `Ok(CocApiClient)` - Ready client
    /// - `Err(AppError::ConfigErr)` - `base_url` is not an absolute http(s) URL
    pub fn new(http: reqwest::Client, base_url: &str, token: String) -> Result<Self, AppError> {
        let invalid = || ConfigError::InvalidEnvVar {
            name: "COC_API_BASE_URL".to_string(),
            value: base_url.to_string(),
        };

        let base_url = Url::parse(base_url).map_err(|_| invalid())?;
        if base_url.cannot_be_a_base() {
            return Err(invalid().into());
        }

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, FetchError> {
        let response = self
            .http
            .get(self.endpoint(segments))
            .bearer_auth(&self.token)
            .send()
            .await?;

        decode(response).await
    }

    async fn post_verify_token(&self, tag: &str, token: &str) -> Result<bool, FetchError> {
        let response = self
            .http
            .post(self.endpoint(&["players", tag, "verifytoken"]))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await?;

        let body: VerifyTokenPayload = decode(response).await?;

        Ok(body.status == "ok")
    }
}

/// Decodes a 2xx body as `T`, or maps the response to `FetchError::Upstream`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let error: UpstreamErrorPayload = serde_json::from_str(&body).unwrap_or_default();

        return Err(FetchError::Upstream {
            status: status.as_u16(),
            reason: error.reason,
            message: error.message,
        });
    }

    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait]
impl ClanDataSource for CocApiClient {
    async fn get_clan(&self, clan_tag: &str) -> Result<ClanPayload, AppError> {
        let tag = normalize_tag(clan_tag)?;
        Ok(self.get_json(&["clans", &tag]).await?)
    }

    async fn get_current_war(&self, clan_tag: &str) -> Result<CurrentWarPayload, AppError> {
        let tag = normalize_tag(clan_tag)?;
        let body: serde_json::Value = self.get_json(&["clans", &tag, "currentwar"]).await?;
        CurrentWarPayload::from_value(body)
            .map_err(|e| FetchError::Decode(e.to_string()).into())
    }

    async fn get_war_log(&self, clan_tag: &str) -> Result<Vec<WarLogEntryPayload>, AppError> {
        let tag = normalize_tag(clan_tag)?;
        let page: PagedPayload<WarLogEntryPayload> =
            self.get_json(&["clans", &tag, "warlog"]).await?;
        Ok(page.items)
    }

    async fn get_capital_raid_seasons(
        &self,
        clan_tag: &str,
    ) -> Result<Vec<CapitalRaidSeasonPayload>, AppError> {
        let tag = normalize_tag(clan_tag)?;
        let page: PagedPayload<CapitalRaidSeasonPayload> =
            self.get_json(&["clans", &tag, "capitalraidseasons"]).await?;
        Ok(page.items)
    }

    async fn get_player(&self, player_tag: &str) -> Result<PlayerPayload, AppError> {
        let tag = normalize_tag(player_tag)?;
        Ok(self.get_json(&["players", &tag]).await?)
    }

    async fn verify_player_token(&self, player_tag: &str, token: &str) -> bool {
        let Ok(tag) = normalize_tag(player_tag) else {
            tracing::warn!("Token verification skipped for malformed tag {:?}", player_tag);
            return false;
        };

        match self.post_verify_token(&tag, token).await {
            Ok(verified) => verified,
            Err(e) => {
                tracing::warn!("Failed to verify token for player {}: {}", tag, e);
                false
            }
        }
    }
}
