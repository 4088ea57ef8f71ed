/// Identity attached to a request once the admin credential check passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    username: String,
}

impl AdminIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
