pub mod auth;
pub mod types;

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

use self::types::{
    CompanyResults, EntityResults, Forecast, ForecastHistory, ForecastResults, MetricResults,
    QueryResults, TimeSeries,
};

/// Errors surfaced by AKM API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status; the raw body is preserved for display
    #[error("request failed with status {status}")]
    Status { status: StatusCode, body: String },
    #[error("request could not be completed")]
    Transport(#[from] reqwest::Error),
    #[error("invalid request URL")]
    Url(#[from] url::ParseError),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Authenticated client for the AKM API.
///
/// Holds the bearer token obtained from the one-time client-credentials
/// exchange; every request carries it in the Authorization header.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    token: String,
}

impl ApiClient {
    pub fn new(http: Client, base: Url, token: String) -> Self {
        Self { http, base, token }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json().await?)
    }

    /// `GET /companies?search=<name>`
    pub async fn search_companies(&self, company_name: &str) -> ApiResult<CompanyResults> {
        let mut url = self.base.join("companies")?;
        url.query_pairs_mut().append_pair("search", company_name);
        self.get_json(url).await
    }

    /// `GET /company/<id>/metrics`
    pub async fn company_metrics(&self, company_id: &str) -> ApiResult<MetricResults> {
        let url = self.base.join(&format!("company/{company_id}/metrics"))?;
        self.get_json(url).await
    }

    /// `GET /company/<id>/metric/<id>/entities`
    pub async fn metric_entities(
        &self,
        company_id: &str,
        metric_id: &str,
    ) -> ApiResult<EntityResults> {
        let url = self
            .base
            .join(&format!("company/{company_id}/metric/{metric_id}/entities"))?;
        self.get_json(url).await
    }

    /// `GET /company/<id>/metric/<id>/entity/<id>/queries`
    pub async fn entity_queries(
        &self,
        company_id: &str,
        metric_id: &str,
        entity_id: &str,
    ) -> ApiResult<QueryResults> {
        let url = self.base.join(&format!(
            "company/{company_id}/metric/{metric_id}/entity/{entity_id}/queries"
        ))?;
        self.get_json(url).await
    }

    /// `GET /data?entity_id=&metric_periodicity=&metric_id=[&country_name=]`
    pub async fn time_series(
        &self,
        metric_id: &str,
        entity_id: &str,
        metric_periodicity: &str,
        country_name: Option<&str>,
    ) -> ApiResult<TimeSeries> {
        let mut url = self.base.join("data")?;
        url.query_pairs_mut()
            .append_pair("entity_id", entity_id)
            .append_pair("metric_periodicity", metric_periodicity)
            .append_pair("metric_id", metric_id);
        if let Some(country_name) = country_name {
            url.query_pairs_mut().append_pair("country_name", country_name);
        }
        self.get_json(url).await
    }

    /// `GET /forecasts?search=<name>`
    pub async fn search_forecasts(&self, company_name: &str) -> ApiResult<ForecastResults> {
        let mut url = self.base.join("forecasts")?;
        url.query_pairs_mut().append_pair("search", company_name);
        self.get_json(url).await
    }

    /// `GET /company/<id>/metric/<id>/entity/<id>/forecast`
    pub async fn forecast(
        &self,
        company_id: &str,
        metric_id: &str,
        entity_id: &str,
    ) -> ApiResult<Forecast> {
        let url = self.base.join(&format!(
            "company/{company_id}/metric/{metric_id}/entity/{entity_id}/forecast"
        ))?;
        self.get_json(url).await
    }

    /// `GET /company/<id>/metric/<id>/entity/<id>/forecast/history`
    pub async fn forecast_history(
        &self,
        company_id: &str,
        metric_id: &str,
        entity_id: &str,
    ) -> ApiResult<ForecastHistory> {
        let url = self.base.join(&format!(
            "company/{company_id}/metric/{metric_id}/entity/{entity_id}/forecast/history"
        ))?;
        self.get_json(url).await
    }

    /// `GET /company/<id>/metric/<id>/entity/<id>/forecast/snapshot[?data_through=]`
    ///
    /// The snapshot shape is not fixed; the whole body is returned as-is.
    pub async fn forecast_snapshot(
        &self,
        company_id: &str,
        metric_id: &str,
        entity_id: &str,
        data_through: Option<&str>,
    ) -> ApiResult<Value> {
        let mut url = self.base.join(&format!(
            "company/{company_id}/metric/{metric_id}/entity/{entity_id}/forecast/snapshot"
        ))?;
        if let Some(data_through) = data_through {
            url.query_pairs_mut().append_pair("data_through", data_through);
        }
        self.get_json(url).await
    }
}
