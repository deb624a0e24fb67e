//! Authentication and the signed-in user's cached profile.

use tracing::{info, warn};

use crate::client::{ApiClient, Submission};
use crate::error::Result;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};

/// Login, registration and session state.
pub struct AuthQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Sign in and persist the returned token and profile.
    pub fn login(&self, credentials: LoginRequest) -> Result<AuthResponse> {
        let resp: AuthResponse = self.client.submit(&Submission::Login(credentials))?;
        self.persist(&resp)?;
        info!(user_id = resp.user.id, "logged in");
        Ok(resp)
    }

    /// Create an account and persist the returned token and profile.
    pub fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        let resp: AuthResponse = self.client.submit(&Submission::Register(request))?;
        self.persist(&resp)?;
        info!(user_id = resp.user.id, "registered");
        Ok(resp)
    }

    pub fn logout(&self) -> Result<()> {
        self.client.session().clear()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().token().is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        self.client.session().user()
    }

    pub fn update_current_user(&self, user: &User) -> Result<()> {
        self.client.session().set_user(user)
    }

    /// Cached profile when signed in. A signed-in session without a readable
    /// profile is treated as broken and logged out.
    pub fn refresh_user_data(&self) -> Result<Option<User>> {
        if !self.is_authenticated() {
            return Ok(None);
        }
        match self.current_user() {
            Some(user) => Ok(Some(user)),
            None => {
                warn!("token present without a profile, logging out");
                self.logout()?;
                Ok(None)
            }
        }
    }

    fn persist(&self, resp: &AuthResponse) -> Result<()> {
        let session = self.client.session();
        session.set_token(&resp.token)?;
        session.set_user(&resp.user)
    }
}
