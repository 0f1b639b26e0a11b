use crate::models::value::Value;
use std::fmt;

/// Merchant credentials sent with every request.
#[derive(Clone, PartialEq, Eq, uniffi::Record)]
pub struct Credentials {
    pub merchant: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(merchant: &str, username: &str, password: &str) -> Self {
        Self {
            merchant: merchant.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// The credentials as request attributes, under the names the service expects.
    pub(crate) fn attributes(&self) -> [(&'static str, Value); 3] {
        [
            ("shopName", Value::from(self.merchant.as_str())),
            ("userName", Value::from(self.username.as_str())),
            ("password", Value::from(self.password.as_str())),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant", &self.merchant)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_the_password() {
        let credentials = Credentials::new("testshop", "testing", "123456");
        let debug = format!("{credentials:?}");

        assert!(debug.contains("testshop"));
        assert!(!debug.contains("123456"));
    }
}
