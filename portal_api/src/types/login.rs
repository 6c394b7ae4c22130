use serde::{Deserialize, Serialize};

/// Portal the credentials belong to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Role::Student => "student",
                Role::Teacher => "teacher",
                Role::Admin => "admin",
                Role::Other => "other",
            }
        )
    }
}

#[derive(Serialize, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    /// Token lifetime in seconds, when the server reports one.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_minimal() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token":"t0k"}"#).unwrap();
        assert_eq!(resp.token, "t0k");
        assert!(resp.role.is_none());
    }

    #[test]
    fn unknown_role_maps_to_other() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"t","userId":"T-17","role":"hr","expiresIn":3600}"#)
                .unwrap();
        assert_eq!(resp.role, Some(Role::Other));
        assert_eq!(resp.user_id.as_deref(), Some("T-17"));
        assert_eq!(resp.expires_in, Some(3600));
    }

    #[test]
    fn role_display_matches_wire_name() {
        assert_eq!(Role::Teacher.to_string(), "teacher");
        assert_eq!(Role::Other.to_string(), "other");
    }

    #[test]
    fn password_is_not_debug_printed() {
        let req = LoginRequest {
            username: "asha".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{:?}", req).contains("hunter2"));
    }
}
