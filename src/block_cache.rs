use std::sync::Arc;

use dashmap::DashMap;

use crate::phonedata::types::CallingCodeInfo;

/// Parsed calling code blocks, filled on first lookup and never evicted.
///
/// A block that failed to parse is remembered as `None`, so broken data is
/// parsed and reported once per calling code.
pub struct BlockCache {
    cache: DashMap<String, Option<Arc<CallingCodeInfo>>>
}

impl BlockCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the cached outcome for `calling_code` or runs `parse` and
    /// caches whatever it returns.
    pub fn get_or_insert_with(
        &self,
        calling_code: &str,
        parse: impl FnOnce() -> Option<CallingCodeInfo>,
    ) -> Option<Arc<CallingCodeInfo>> {
        if let Some(block) = self.cache.get(calling_code).map(|block| block.value().clone()) {
            return block;
        }
        // the read guard above is released, entry() takes the shard write lock
        let entry = self
            .cache
            .entry(calling_code.to_string())
            .or_insert_with(|| parse().map(Arc::new));
        entry.value().clone()
    }

    /// Number of successfully parsed blocks.
    pub fn len(&self) -> usize {
        self.cache.iter().filter(|block| block.value().is_some()).count()
    }
}
