use anyhow::Result;
use link_curator_backend::{
    controllers::{
        links::LinksController, session::SessionController, suggestions::SuggestionsController,
    },
    domain::{
        links::LinkService,
        session::SessionService,
        suggestions::{LinkSuggestionService, SuggestionAccumulator},
    },
    infrastructure::{http::build_router, repositories::SessionRepository},
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use uuid::Uuid;

pub mod api_client;
pub mod fakes;

use api_client::{ApiResponse, TestClient};
use fakes::{KeywordRelevanceFilter, ScriptedSuggestionSource};

/// One running server per test, wired to in-process fakes instead of OpenAI
pub struct TestContext {
    pub client: TestClient,
    pub source: Arc<ScriptedSuggestionSource>,
    pub relevance: Arc<KeywordRelevanceFilter>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let source = Arc::new(ScriptedSuggestionSource::default());
            let relevance = Arc::new(KeywordRelevanceFilter::default());

            let session_repo = Arc::new(SessionRepository::new(100, Duration::from_secs(600)));
            let session_service = Arc::new(SessionService::new(session_repo.clone()));
            let link_service = Arc::new(LinkService::new(session_repo.clone(), relevance.clone()));
            let suggestion_service = Arc::new(LinkSuggestionService::new(
                session_repo.clone(),
                source.clone(),
                SuggestionAccumulator::default(),
            ));

            let app = build_router(
                session_repo,
                Arc::new(SessionController::new(session_service)),
                Arc::new(LinksController::new(link_service)),
                Arc::new(SuggestionsController::new(suggestion_service)),
            );

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&format!("http://{}", addr)),
                source,
                relevance,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

impl TestContext {
    /// Open an empty session and return its id
    pub async fn create_session(&self) -> Result<Uuid> {
        let response = self.client.post_empty("/api/sessions").await?;
        let body = response.body.as_ref().expect("Missing session body");
        Ok(body["id"].as_str().expect("Missing session id").parse()?)
    }

    pub async fn suggest(&self, session_id: Uuid, request: &Value) -> Result<ApiResponse> {
        self.client
            .post(&format!("/api/sessions/{}/suggestions", session_id), request)
            .await
    }

    pub async fn list_links(&self, session_id: Uuid, query: &str) -> Result<ApiResponse> {
        self.client
            .get(&format!("/api/sessions/{}/links{}", session_id, query))
            .await
    }
}
