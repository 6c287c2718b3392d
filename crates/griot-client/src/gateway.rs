//! reqwest implementation of the gateway ports.

use async_trait::async_trait;
use griot_core::dto::{
    ContentDto, ContentKind, FamilyDto, ProfileDto, ProfileUpdateDto, PublicationRequestDto,
    RiddleDraftDto, UserDto,
};
use griot_core::error::GatewayError;
use griot_core::gateway::{CurationGateway, ModerationGateway, ProfileGateway};
use griot_core::session::Session;
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::routes;

/// Default base URL of the super-admin API.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// HTTP gateway to the super-admin API.
///
/// Every request carries `Authorization: Bearer <token>` while the session
/// holds a token. No timeout and no retry are configured.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpGateway {
    /// Creates a gateway with a default `reqwest::Client`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self::with_client(Client::new(), base_url, session)
    }

    /// Creates a gateway over an existing client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client,
            base_url,
            session,
        }
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let response = self.authorize(builder).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "request refused");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        Self::json(self.send(self.client.get(self.url(path))).await?).await
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        response
            .json()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }

    async fn text(response: Response) -> Result<String, GatewayError> {
        response.text().await.map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

#[async_trait]
impl ModerationGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn list_requests(&self) -> Result<Vec<PublicationRequestDto>, GatewayError> {
        self.get_json(routes::REQUESTS).await
    }

    #[instrument(skip(self))]
    async fn validate_request(&self, request_id: i64) -> Result<String, GatewayError> {
        let builder = self
            .client
            .post(self.url(&routes::validate_request(request_id)))
            .json(&serde_json::json!({}));
        Self::text(self.send(builder).await?).await
    }

    #[instrument(skip(self, comment))]
    async fn reject_request(
        &self,
        request_id: i64,
        comment: &str,
    ) -> Result<String, GatewayError> {
        let builder = self
            .client
            .post(self.url(&routes::reject_request(request_id)))
            .query(&[("commentaire", comment)])
            .json(&serde_json::json!({}));
        Self::text(self.send(builder).await?).await
    }
}

#[async_trait]
impl CurationGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn list_families(&self) -> Result<Vec<FamilyDto>, GatewayError> {
        self.get_json(routes::FAMILIES).await
    }

    #[instrument(skip(self, kind), fields(kind = %kind))]
    async fn list_contents(&self, kind: ContentKind) -> Result<Vec<ContentDto>, GatewayError> {
        let items: Vec<ContentDto> = self.get_json(&routes::contents(kind)).await?;
        if !routes::lists_mixed_kinds(kind) {
            return Ok(items);
        }
        let total = items.len();
        let items: Vec<ContentDto> =
            items.into_iter().filter(|item| item.is_of_kind(kind)).collect();
        tracing::debug!(total, kept = items.len(), "filtered mixed listing by type");
        Ok(items)
    }

    #[instrument(skip(self, draft))]
    async fn create_riddle(&self, draft: &RiddleDraftDto) -> Result<ContentDto, GatewayError> {
        let form = Form::new()
            .text("titre", draft.titre.clone())
            .text("texteDevinette", draft.texte_devinette.clone())
            .text("reponseDevinette", draft.reponse_devinette.clone());
        let builder = self.client.post(self.url(routes::NEW_RIDDLE)).multipart(form);
        Self::json(self.send(builder).await?).await
    }

    #[instrument(skip(self, kind), fields(kind = %kind))]
    async fn delete_content(
        &self,
        kind: ContentKind,
        content_id: i64,
    ) -> Result<String, GatewayError> {
        let builder = self
            .client
            .delete(self.url(&routes::delete_content(kind, content_id)));
        Self::text(self.send(builder).await?).await
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<UserDto>, GatewayError> {
        self.get_json(routes::USERS).await
    }

    #[instrument(skip(self))]
    async fn set_user_activation(&self, user_id: i64, active: bool) -> Result<(), GatewayError> {
        let builder = self
            .client
            .patch(self.url(&routes::user_activation(user_id)))
            .query(&[("actif", active)]);
        self.send(builder).await.map(|_| ())
    }
}

#[async_trait]
impl ProfileGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn get_profile(&self, user_id: i64) -> Result<ProfileDto, GatewayError> {
        self.get_json(&routes::profile(user_id)).await
    }

    #[instrument(skip(self, update))]
    async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdateDto,
    ) -> Result<ProfileDto, GatewayError> {
        let builder = self.client.put(self.url(&routes::profile(user_id))).json(update);
        Self::json(self.send(builder).await?).await
    }
}
