//! Admin role-management API wrapper.

use std::collections::HashMap;

use crate::domain::errors::ClientResult;
use crate::domain::models::{RoleUpdateForm, RoleViewForm};

use super::http::ApiClient;

/// Endpoint for role queries and assignments.
const ADMIN_ROLE_HANDLER_URL: &str = "/adminrolehandler";

/// Client for the admin role handler.
///
/// Both operations validate their form before issuing any request, so a
/// half-filled form never reaches the backend.
#[derive(Debug, Clone)]
pub struct AdminClient {
    api: ApiClient,
}

impl AdminClient {
    /// Wrap the shared API transport.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Query user-to-role assignments by role or by username.
    ///
    /// Returns the backend's username-to-role map; an empty map means no
    /// results, not an error.
    pub async fn view_roles(&self, form: &RoleViewForm) -> ClientResult<HashMap<String, String>> {
        form.validate()?;
        let mut query: Vec<(&str, &str)> = vec![("method", form.method.as_str())];
        if let Some(role) = form.role.as_deref() {
            query.push(("role", role));
        }
        if let Some(username) = form.username.as_deref() {
            query.push(("username", username));
        }
        self.api.get_json(ADMIN_ROLE_HANDLER_URL, &query).await
    }

    /// Assign a new role to a user.
    pub async fn update_role(&self, form: &RoleUpdateForm) -> ClientResult<()> {
        form.validate()?;
        let body = serde_json::json!({
            "role": form.new_role,
            "username": form.username,
            "topic_id": form.topic_id,
        });
        self.api.post_json(ADMIN_ROLE_HANDLER_URL, &body).await?;
        tracing::info!(username = %form.username, role = %form.new_role, "role updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ClientError;
    use crate::domain::models::RoleViewMethod;
    use std::time::Duration;

    #[tokio::test]
    async fn test_view_roles_rejects_invalid_form_before_any_request() {
        // The base URL points nowhere; a validation failure must surface
        // before the transport is ever involved.
        let api = ApiClient::new("http://localhost:9", Duration::from_secs(1)).unwrap();
        let client = AdminClient::new(api);
        let form = RoleViewForm {
            method: RoleViewMethod::Role,
            role: None,
            username: None,
        };
        let error = client.view_roles(&form).await.unwrap_err();
        assert!(matches!(error, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_role_rejects_invalid_form_before_any_request() {
        let api = ApiClient::new("http://localhost:9", Duration::from_secs(1)).unwrap();
        let client = AdminClient::new(api);
        let form = RoleUpdateForm {
            username: String::new(),
            new_role: "moderator".to_string(),
            topic_id: None,
        };
        let error = client.update_role(&form).await.unwrap_err();
        assert!(matches!(error, ClientError::Validation(_)));
    }
}
