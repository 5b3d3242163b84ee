// src/cache.rs
//! Read-only access to the Redis cache holding order records.

use crate::config::settings::mask_password;
use crate::error::ViewerError;
use log::{debug, error, info};
use redis::Commands;
use std::fmt;

/// Anything that can return the raw bytes cached under a key.
pub trait RecordSource {
    /// `Ok(None)` means the key is not cached.
    fn fetch(&mut self, key: &str) -> Result<Option<Vec<u8>>, ViewerError>;
}

/// Redis client for order lookups.
/// Opening only parses the URL; each `fetch` takes its own blocking connection.
pub struct OrderCache {
    client: redis::Client,
    redis_url: String, // Store for debug purposes
}

// Manual Debug implementation so credentials in the URL never reach the logs
impl fmt::Debug for OrderCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderCache")
            .field("redis_url", &mask_password(&self.redis_url))
            .finish()
    }
}

impl OrderCache {
    pub fn open(redis_url: &str) -> Result<Self, ViewerError> {
        info!("Opening Redis client for URL: {}", mask_password(redis_url));
        let client = redis::Client::open(redis_url).map_err(|e| {
            error!("Invalid Redis URL {}: {}", mask_password(redis_url), e);
            e
        })?;
        Ok(Self {
            client,
            redis_url: redis_url.to_string(),
        })
    }
}

impl RecordSource for OrderCache {
    fn fetch(&mut self, key: &str) -> Result<Option<Vec<u8>>, ViewerError> {
        debug!("Attempting to GET cache for key: {}", key);
        let mut conn = self.client.get_connection().map_err(|e| {
            error!("Failed to connect to Redis at {}: {}", mask_password(&self.redis_url), e);
            e
        })?;
        match conn.get::<_, Option<Vec<u8>>>(key) {
            Ok(Some(bytes)) => {
                debug!("Cache HIT for key: {} ({} bytes)", key, bytes.len());
                Ok(Some(bytes))
            }
            Ok(None) => {
                debug!("Cache MISS for key: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for key {}: {}", key, e);
                Err(e.into())
            }
        }
    }
}
