use crate::constants::PRIVILEGED_USER_ID;
use crate::models::Cafe;

/// The logged-in user the page is rendered for. Anonymous visitors have no id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewer {
    user_id: Option<i32>,
}

impl Viewer {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    #[must_use]
    pub const fn user(user_id: i32) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    #[must_use]
    pub const fn from_option(user_id: Option<i32>) -> Self {
        Self { user_id }
    }

    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.user_id == Some(PRIVILEGED_USER_ID)
    }

    #[must_use]
    pub fn can_delete(&self, _cafe: &Cafe) -> bool {
        self.is_privileged()
    }

    /// An anonymous viewer never matches a cafe without an author.
    #[must_use]
    pub fn can_edit(&self, cafe: &Cafe) -> bool {
        self.is_privileged() || (self.user_id.is_some() && self.user_id == cafe.author_id)
    }
}
