//! Admin role-management form state.
//!
//! Each form on the roles tab is a plain record with a pure validation
//! function; the forms are grouped into one tagged union so callers can
//! dispatch on form kind without attaching behavior to loose objects.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{ClientError, ClientResult};

/// How the "view roles" form filters its query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleViewMethod {
    /// List all users holding a given role.
    Role,
    /// Look up the role of a single user.
    Username,
}

impl RoleViewMethod {
    /// Query parameter value for the role handler.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Username => "username",
        }
    }
}

/// State of the "view roles" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleViewForm {
    /// Chosen filter method.
    pub method: RoleViewMethod,
    /// Role to query for; required when `method` is [`RoleViewMethod::Role`].
    #[serde(default)]
    pub role: Option<String>,
    /// Username to query for; required when `method` is
    /// [`RoleViewMethod::Username`].
    #[serde(default)]
    pub username: Option<String>,
}

impl RoleViewForm {
    /// Check the form for the field its method requires. Pure; issues no
    /// request.
    pub fn validate(&self) -> ClientResult<()> {
        match self.method {
            RoleViewMethod::Role if is_blank(self.role.as_deref()) => Err(
                ClientError::Validation("a role is required when viewing by role".to_string()),
            ),
            RoleViewMethod::Username if is_blank(self.username.as_deref()) => {
                Err(ClientError::Validation(
                    "a username is required when viewing by username".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

/// State of the "update role" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdateForm {
    /// User whose role is being changed.
    pub username: String,
    /// Role to assign.
    pub new_role: String,
    /// Topic scope, required only for topic-scoped roles such as topic
    /// manager; the backend enforces that pairing.
    #[serde(default)]
    pub topic_id: Option<String>,
}

impl RoleUpdateForm {
    /// Check that the identifying fields are filled in. Pure; issues no
    /// request.
    pub fn validate(&self) -> ClientResult<()> {
        if self.username.trim().is_empty() {
            return Err(ClientError::Validation(
                "a username is required to update a role".to_string(),
            ));
        }
        if self.new_role.trim().is_empty() {
            return Err(ClientError::Validation(
                "a role is required to update a role".to_string(),
            ));
        }
        Ok(())
    }
}

/// Admin form states, one variant per form on the roles tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleForm {
    /// The role lookup form.
    View(RoleViewForm),
    /// The role assignment form.
    Update(RoleUpdateForm),
}

impl RoleForm {
    /// Validate the form state for its kind.
    pub fn validate(&self) -> ClientResult<()> {
        match self {
            Self::View(form) => form.validate(),
            Self::Update(form) => form.validate(),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_by_role_requires_role() {
        let form = RoleViewForm {
            method: RoleViewMethod::Role,
            role: None,
            username: Some("alice".to_string()),
        };
        let error = form.validate().unwrap_err();
        assert!(matches!(error, ClientError::Validation(_)));
        assert!(error.to_string().contains("role is required"));
    }

    #[test]
    fn test_view_by_username_requires_username() {
        let form = RoleViewForm {
            method: RoleViewMethod::Username,
            role: None,
            username: Some("   ".to_string()),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_valid_view_forms_pass() {
        let by_role = RoleViewForm {
            method: RoleViewMethod::Role,
            role: Some("moderator".to_string()),
            username: None,
        };
        assert!(by_role.validate().is_ok());

        let by_username = RoleViewForm {
            method: RoleViewMethod::Username,
            role: None,
            username: Some("alice".to_string()),
        };
        assert!(by_username.validate().is_ok());
    }

    #[test]
    fn test_update_form_requires_username_and_role() {
        let missing_username = RoleUpdateForm {
            username: String::new(),
            new_role: "moderator".to_string(),
            topic_id: None,
        };
        assert!(missing_username.validate().is_err());

        let missing_role = RoleUpdateForm {
            username: "alice".to_string(),
            new_role: String::new(),
            topic_id: None,
        };
        assert!(missing_role.validate().is_err());

        let complete = RoleUpdateForm {
            username: "alice".to_string(),
            new_role: "topic_manager".to_string(),
            topic_id: Some("topic_1".to_string()),
        };
        assert!(complete.validate().is_ok());
    }

    #[test]
    fn test_role_form_dispatches_by_kind() {
        let invalid = RoleForm::View(RoleViewForm {
            method: RoleViewMethod::Role,
            role: None,
            username: None,
        });
        assert!(invalid.validate().is_err());

        let valid = RoleForm::Update(RoleUpdateForm {
            username: "bob".to_string(),
            new_role: "admin".to_string(),
            topic_id: None,
        });
        assert!(valid.validate().is_ok());
    }
}
