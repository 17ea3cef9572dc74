//! Chapter status update parameters.

use crate::error::CoreError;

/// Raw query parameters of a chapter status update.
#[derive(Debug, Clone, Default)]
pub struct ChapterStatusQuery {
    pub user_id: Option<String>,
    pub chapter_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterStatusUpdate {
    pub user_id: String,
    pub chapter_id: String,
    pub status: String,
}

impl ChapterStatusQuery {
    /// Collect the known keys from decoded query pairs, first value wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "user_id" => &mut query.user_id,
                "chapter_id" => &mut query.chapter_id,
                "status" => &mut query.status,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Validate in field order, failing on the first missing value.
    pub fn validate(self) -> Result<ChapterStatusUpdate, CoreError> {
        let required = |value: Option<String>, field: &str| {
            value
                .filter(|v| !v.is_empty())
                .ok_or_else(|| CoreError::Validation(format!("invalid {field}")))
        };

        Ok(ChapterStatusUpdate {
            user_id: required(self.user_id, "user id")?,
            chapter_id: required(self.chapter_id, "chapter id")?,
            status: required(self.status, "status")?,
        })
    }
}
