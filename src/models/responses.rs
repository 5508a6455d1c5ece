//! Response DTOs for the inventory API
//!
//! Success bodies only. Error bodies are built by `InventoryError`.

use serde::Serialize;

use super::ItemSnapshot;
use crate::cache::CacheStats;

/// Confirmation body: `{"SUCCESS": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    #[serde(rename = "SUCCESS")]
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Body for a successful create (POST /items/)
    pub fn item_created() -> Self {
        Self::new("Item added successfully to the inventory.")
    }

    /// Body for a successful delete (DELETE /items/:id/)
    pub fn item_deleted() -> Self {
        Self::new("Deleted your item from the inventory successfully.")
    }
}

/// Response body for GET /items/:id/
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetailsResponse {
    pub inventory_item_details: ItemSnapshot,
}

/// Response body for PUT /items/:id/
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedItemResponse {
    pub updated_item_details: ItemSnapshot,
}

/// Response body for the token endpoint (POST /get_jwt_token/)
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    /// Signed access token
    pub access: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Lifetime of the token in seconds
    pub expires_in: u64,
}

impl TokenResponse {
    pub fn bearer(access: String, expires_in: u64) -> Self {
        Self {
            access,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of entries removed by item updates and deletes
    pub invalidations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<&CacheStats> for StatsResponse {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response_uses_uppercase_key() {
        let json = serde_json::to_value(SuccessResponse::item_created()).unwrap();
        assert_eq!(
            json,
            json!({"SUCCESS": "Item added successfully to the inventory."})
        );
    }

    #[test]
    fn test_item_details_response_shape() {
        let resp = ItemDetailsResponse {
            inventory_item_details: ItemSnapshot {
                id: 1,
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                stock_count: 3,
            },
        };
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json["inventory_item_details"]["name"], "Widget");
        assert_eq!(json["inventory_item_details"]["stock_count"], 3);
    }

    #[test]
    fn test_token_response_bearer() {
        let resp = TokenResponse::bearer("abc".to_string(), 3600);
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json, json!({"access": "abc", "token_type": "Bearer", "expires_in": 3600}));
    }

    #[test]
    fn test_stats_response_from_cache_stats() {
        let mut stats = CacheStats::new();
        for _ in 0..4 {
            stats.record_hit();
        }
        stats.record_miss();
        stats.record_eviction();
        stats.record_invalidation();
        stats.record_invalidation();
        stats.set_total_entries(7);

        let json = serde_json::to_value(StatsResponse::from(&stats)).unwrap();
        assert_eq!(json["hits"], 4);
        assert_eq!(json["misses"], 1);
        assert_eq!(json["evictions"], 1);
        assert_eq!(json["invalidations"], 2);
        assert_eq!(json["total_entries"], 7);
        assert!((json["hit_rate"].as_f64().unwrap() - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::from(&CacheStats::new());
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
