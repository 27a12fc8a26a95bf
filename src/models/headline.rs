// ============================================================================
// Structure : Headline
// ============================================================================
// Un titre de news avec sa date de publication
// ============================================================================

use chrono::{DateTime, Utc};

/// Titre de news affiché dans la section "Market News"
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub published_at: DateTime<Utc>,
}

impl Headline {
    pub fn new(title: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            published_at,
        }
    }

    /// Heure de publication au format "HH:MM"
    pub fn time_label(&self) -> String {
        self.published_at.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_label() {
        let at = Utc.with_ymd_and_hms(2024, 11, 24, 9, 5, 0).unwrap();
        let headline = Headline::new("News Headline 1", at);
        assert_eq!(headline.time_label(), "09:05");
    }
}
