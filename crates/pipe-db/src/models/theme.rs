//! Theme database model

use pipe_core::Theme;
use sqlx::FromRow;

/// Database model for the themes table
#[derive(Debug, Clone, FromRow)]
pub struct ThemeModel {
    pub user_id: i64,
    pub dark_mode: bool,
}

impl From<ThemeModel> for Theme {
    fn from(model: ThemeModel) -> Self {
        Theme {
            user_id: model.user_id,
            dark_mode: model.dark_mode,
        }
    }
}
