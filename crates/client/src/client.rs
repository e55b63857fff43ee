//! API client

use std::{fmt, sync::Arc, time::Duration};

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    config::ClientConfig,
    errors::ClientError,
    interceptors,
    models::{ChatReply, ChatRequest, MessageResponse, NewOrder, Order, OrderUpdate},
    tokens::TokenStore,
};

/// Entry point for talking to the order tracker API.
///
/// Cheap to clone; clones share the HTTP connection pool and token store.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client for `config`, reading bearer tokens from `tokens`.
    #[must_use]
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: Client::new(),
            config,
            tokens,
        }
    }

    /// Calls under `{base}/orders`.
    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi {
            endpoint: Endpoint {
                client: self,
                name: "Orders API",
                url: self.config.orders_url(),
                timeout: self.config.orders_timeout,
            },
        }
    }

    /// Calls under `{base}/chatbot`.
    pub fn chatbot(&self) -> ChatbotApi<'_> {
        ChatbotApi {
            endpoint: Endpoint {
                client: self,
                name: "Chatbot API",
                url: self.config.chatbot_url(),
                timeout: self.config.chatbot_timeout,
            },
        }
    }
}

#[derive(Debug)]
struct Endpoint<'a> {
    client: &'a ApiClient,
    name: &'static str,
    url: String,
    #[cfg_attr(
        target_arch = "wasm32",
        expect(dead_code, reason = "browser fetch has no per-request timeout")
    )]
    timeout: Duration,
}

impl Endpoint<'_> {
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.http.request(method.clone(), url);

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(self.timeout);

        interceptors::on_request(
            self.name,
            builder,
            &method,
            url,
            self.client.tokens.as_ref(),
        )
    }

    fn member_url(&self, id: Uuid) -> String {
        format!("{}/{id}", self.url)
    }

    async fn call<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = builder
            .send()
            .await
            .map_err(|source| interceptors::on_transport_error(self.name, source))?;

        let body =
            interceptors::on_response(self.name, response, self.client.tokens.as_ref()).await?;

        serde_json::from_str(&body).map_err(ClientError::Decode)
    }
}

/// Order endpoints.
#[derive(Debug)]
pub struct OrdersApi<'a> {
    endpoint: Endpoint<'a>,
}

impl OrdersApi<'_> {
    /// Every order, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the server rejects it.
    pub async fn list(&self) -> Result<Vec<Order>, ClientError> {
        let endpoint = &self.endpoint;

        endpoint
            .call(endpoint.request(Method::GET, &endpoint.url))
            .await
    }

    /// One order by record id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id, or another error when the
    /// request fails.
    pub async fn get(&self, id: Uuid) -> Result<Order, ClientError> {
        let endpoint = &self.endpoint;

        endpoint
            .call(endpoint.request(Method::GET, &endpoint.member_url(id)))
            .await
    }

    /// Create an order and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] carrying the server's message when validation fails.
    pub async fn create(&self, order: &NewOrder) -> Result<Order, ClientError> {
        let endpoint = &self.endpoint;

        endpoint
            .call(endpoint.request(Method::POST, &endpoint.url).json(order))
            .await
    }

    /// Apply a partial update and return the updated order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id, or another error when the
    /// request fails.
    pub async fn update(&self, id: Uuid, update: &OrderUpdate) -> Result<Order, ClientError> {
        let endpoint = &self.endpoint;

        endpoint
            .call(
                endpoint
                    .request(Method::PUT, &endpoint.member_url(id))
                    .json(update),
            )
            .await
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id, or another error when the
    /// request fails.
    pub async fn delete(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let endpoint = &self.endpoint;

        endpoint
            .call(endpoint.request(Method::DELETE, &endpoint.member_url(id)))
            .await
    }
}

/// Chat relay endpoint.
#[derive(Debug)]
pub struct ChatbotApi<'a> {
    endpoint: Endpoint<'a>,
}

impl ChatbotApi<'_> {
    /// Send one message and return the relay's answer.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the relay reports a failure.
    pub async fn send(&self, message: &str) -> Result<ChatReply, ClientError> {
        let endpoint = &self.endpoint;

        endpoint
            .call(
                endpoint
                    .request(Method::POST, &endpoint.url)
                    .json(&ChatRequest { message }),
            )
            .await
    }
}
