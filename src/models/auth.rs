use serde::{Deserialize, Serialize};

/// Cuerpo de /auth/register y /auth/login
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Debug manual: la contraseña nunca llega a los logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let creds = Credentials::new("maria", "segredo123");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("maria"));
        assert!(!printed.contains("segredo123"));
    }

    #[test]
    fn serializes_as_username_password() {
        let creds = Credentials::new("maria", "segredo123");
        let json = serde_json::to_string(&creds).unwrap();
        assert_eq!(json, r#"{"username":"maria","password":"segredo123"}"#);
    }
}
