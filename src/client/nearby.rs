// src/client/nearby.rs

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiClient, FetchError};
use crate::domain::Category;

/// A validated geo-radius search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

impl NearbyQuery {
    pub fn new(latitude: f64, longitude: f64, distance_km: f64) -> Result<Self, FetchError> {
        if !(distance_km.is_finite() && distance_km > 0.0) {
            return Err(FetchError::InvalidArgument(format!(
                "distance must be greater than 0, got {distance_km}"
            )));
        }
        if !(latitude.is_finite() && (-90.0..=90.0).contains(&latitude)) {
            return Err(FetchError::InvalidArgument(format!("latitude out of range: {latitude}")));
        }
        if !(longitude.is_finite() && (-180.0..=180.0).contains(&longitude)) {
            return Err(FetchError::InvalidArgument(format!("longitude out of range: {longitude}")));
        }

        Ok(Self {
            latitude,
            longitude,
            distance_km,
        })
    }

    fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("distance", self.distance_km.to_string()),
        ]
    }
}

/// `{ success, count, data }` envelope returned by every `getNearby*` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Value>,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    count: Option<usize>,
    #[serde(default)]
    data: Vec<Value>,
}

impl NearbyResponse {
    /// What every failed search collapses to.
    pub fn empty() -> Self {
        Self {
            success: false,
            count: 0,
            data: Vec::new(),
        }
    }

    fn from_value(value: Value, endpoint: &str) -> Result<Self, FetchError> {
        // A few endpoints answer with the bare array.
        if let Value::Array(data) = value {
            return Ok(Self {
                success: true,
                count: data.len(),
                data,
            });
        }

        let envelope: Envelope =
            serde_json::from_value(value).map_err(|source| FetchError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })?;

        Ok(Self {
            success: envelope.success.unwrap_or(true),
            count: envelope.count.unwrap_or(envelope.data.len()),
            data: envelope.data,
        })
    }
}

impl ApiClient {
    /// Nearby search with the directory's forgiving contract: a bad argument
    /// is reported, but any network, status or decode failure is logged and
    /// comes back as [`NearbyResponse::empty`].
    pub fn fetch_nearby(
        &self,
        category: Category,
        latitude: f64,
        longitude: f64,
        distance_km: f64,
    ) -> Result<NearbyResponse, FetchError> {
        let query = NearbyQuery::new(latitude, longitude, distance_km)?;

        match self.try_fetch_nearby(category, &query) {
            Ok(response) => Ok(response),
            Err(e) => {
                warn!(%category, error = %e, "nearby search failed; treating as no results");
                Ok(NearbyResponse::empty())
            }
        }
    }

    /// Nearby search that reports every failure.
    pub fn try_fetch_nearby(
        &self,
        category: Category,
        query: &NearbyQuery,
    ) -> Result<NearbyResponse, FetchError> {
        let endpoint = format!("getNearby{}", category.endpoint_stem());
        let url = self.endpoint(&endpoint)?;

        debug!(%category, %url, ?query, "nearby search");

        let response = self.client.get(url).query(&query.query_pairs()).send()?;
        let value = Self::read_json(response, &endpoint)?;
        let parsed = NearbyResponse::from_value(value, &endpoint)?;

        debug!(%category, count = parsed.count, "nearby search done");
        Ok(parsed)
    }
}
