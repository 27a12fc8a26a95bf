// ============================================================================
// Port : NewsFeed
// ============================================================================

use crate::models::Headline;
use crate::services::ServiceError;

/// Source des titres de news
pub trait NewsFeed {
    /// Les `n` titres les plus récents (au plus `n`)
    fn latest_headlines(&self, n: usize) -> Result<Vec<Headline>, ServiceError>;
}
