//! Notices
//!
//! User-facing transient notifications. A rejected removal surfaces exactly
//! one [`Notice`]; nothing here is fatal or persistent.

use crate::form::FormError;

/// How prominently a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message.
    Info,

    /// A rejected action the user should correct.
    Warning,
}

/// A transient, dismissible message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Presentation severity.
    pub severity: Severity,

    /// Short heading.
    pub title: String,

    /// Full message body.
    pub description: String,
}

impl Notice {
    /// The warning shown for a rejected form removal.
    #[must_use]
    pub fn from_form_error(error: &FormError) -> Self {
        let description = match error {
            FormError::LastEntry => {
                "You must have at least one entry. \
                 Please add an entry before attempting to delete."
            }
            FormError::LastStore { .. } => {
                "You must have at least one store for each entry. \
                 Please add a store before attempting to delete."
            }
        };

        Notice {
            severity: Severity::Warning,
            title: "Action Not Allowed".to_string(),
            description: description.to_string(),
        }
    }
}

impl From<&FormError> for Notice {
    fn from(error: &FormError) -> Self {
        Notice::from_form_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_guard_maps_to_warning() {
        let notice = Notice::from_form_error(&FormError::LastEntry);

        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.title, "Action Not Allowed");
        assert!(notice.description.contains("at least one entry"));
    }

    #[test]
    fn store_guard_maps_to_warning() {
        let notice = Notice::from(&FormError::LastStore { entry_id: 3 });

        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.title, "Action Not Allowed");
        assert!(notice.description.contains("at least one store"));
    }

    #[test]
    fn guard_messages_are_distinct() {
        let entry_notice = Notice::from_form_error(&FormError::LastEntry);
        let store_notice = Notice::from_form_error(&FormError::LastStore { entry_id: 1 });

        assert_ne!(entry_notice.description, store_notice.description);
    }
}
