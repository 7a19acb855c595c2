use erudio_shared::protocol::{AuthResponse, GoogleTokenRequest};

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Exchange a Google identity token for a backend access token.
    /// Sent without a bearer token.
    pub async fn google_login(&self, google_token: &str) -> Result<AuthResponse> {
        let body = GoogleTokenRequest {
            token: google_token.to_string(),
        };
        self.post_json("/auth/google", None, &body).await
    }
}
