/// Whether a cached inverse request was answered from the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CacheStatus {
    /// The inverse was already cached and returned unchanged.
    Hit,
    /// The inverse was solved and stored in the cell.
    Miss,
}

impl CacheStatus {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheStatus::Hit)
    }
}
