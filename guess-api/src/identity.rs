//! https://docs.aws.amazon.com/cognito-user-identity-pools/latest/APIReference/API_GetUser.html

use reqwest::{header::CONTENT_TYPE, Method};
use tracing::Level;

use crate::{
    protocol::identity::{GetUserRequest, User},
    Client, Error, Service,
};

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const AMZ_TARGET: &str = "X-Amz-Target";
const GET_USER: &str = "AWSCognitoIdentityProviderService.GetUser";

pub const GIVEN_NAME: &str = "given_name";

impl Client {
    /// Profile of the user the access token was issued to.
    #[tracing::instrument(level = Level::DEBUG, skip_all, err)]
    pub async fn user(&self, access_token: &str) -> Result<User, Error> {
        let shared = &self.shared;
        let body = serde_json::to_vec(&GetUserRequest { access_token })?;
        let request = shared
            .request(Method::POST, shared.endpoints.identity.clone())
            .header(CONTENT_TYPE, AMZ_JSON)
            .header(AMZ_TARGET, GET_USER)
            .body(body);
        let user: User = shared
            .send(Service::Identity, request)
            .await?
            .json()
            .await?;
        tracing::debug!(attributes = user.attributes.len());
        Ok(user)
    }

    /// The user's given name, or an empty string if the profile has none.
    pub async fn given_name(&self, access_token: &str) -> Result<String, Error> {
        let user = self.user(access_token).await?;
        Ok(user.attribute(GIVEN_NAME).unwrap_or_default().to_owned())
    }
}
