//! Summer factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{
    PooledSummer, SeriesError, SingleThreadedSummer, Summer, ThreadPerChunkSummer,
};

/// Factory trait for creating summation strategies.
pub trait SummerFactory: Send + Sync {
    /// Get or create a summer by name and thread count.
    ///
    /// The thread count is ignored by the single-threaded strategy.
    fn get(&self, name: &str, threads: usize) -> Result<Arc<dyn Summer>, SeriesError>;

    /// List all available strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<(String, usize), Arc<dyn Summer>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_summer(name: &str, threads: usize) -> Result<Arc<dyn Summer>, SeriesError> {
        match name {
            "single" | "sequential" => Ok(Arc::new(SingleThreadedSummer::new())),
            "threads" | "multi" => Ok(Arc::new(ThreadPerChunkSummer::new(threads))),
            "pool" => Ok(Arc::new(PooledSummer::new(threads))),
            _ => Err(SeriesError::Config(format!("unknown strategy: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SummerFactory for DefaultFactory {
    fn get(&self, name: &str, threads: usize) -> Result<Arc<dyn Summer>, SeriesError> {
        let key = (name.to_string(), threads);
        if let Some(summer) = self.cache.read().get(&key) {
            return Ok(Arc::clone(summer));
        }

        let summer = Self::create_summer(name, threads)?;
        self.cache.write().insert(key, Arc::clone(&summer));
        Ok(summer)
    }

    fn available(&self) -> Vec<&str> {
        vec!["single", "threads", "pool"]
    }
}
