//! Scenario tests for the seminar crate
//! Cover the detail pipeline end to end against an in-memory repository.

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use kernel::error::kind::ErrorKind;
    use kernel::id::{Id, SeminarId};

    use crate::application::config::SeminarConfig;
    use crate::domain::entity::seminar::{Seminar, SeminarType, Student};
    use crate::domain::repository::SeminarRepository;
    use crate::domain::value_object::access_token::AccessToken;
    use crate::domain::value_object::shared_secret::SharedSecret;
    use crate::error::{SeminarError, SeminarResult};

    pub const SECRET: &str = "s3cr3t";

    /// Records every call so tests can prove nothing was fetched
    #[derive(Clone, Default)]
    pub struct InMemorySeminarRepository {
        seminars: Arc<Vec<Seminar>>,
        failure: Option<ErrorKind>,
        fetched: Arc<Mutex<Vec<SeminarId>>>,
        listed_with: Arc<Mutex<Vec<String>>>,
    }

    impl InMemorySeminarRepository {
        pub fn with(seminars: Vec<Seminar>) -> Self {
            Self {
                seminars: Arc::new(seminars),
                ..Self::default()
            }
        }

        pub fn failing(kind: ErrorKind) -> Self {
            Self {
                failure: Some(kind),
                ..Self::default()
            }
        }

        pub fn fetched(&self) -> Vec<SeminarId> {
            self.fetched.lock().unwrap().clone()
        }

        pub fn listed_with(&self) -> Vec<String> {
            self.listed_with.lock().unwrap().clone()
        }

        fn fail(&self) -> SeminarResult<()> {
            match self.failure {
                Some(kind) => Err(SeminarError::service(
                    kind,
                    Some("Seminar service is down for maintenance".to_string()),
                )),
                None => Ok(()),
            }
        }
    }

    impl SeminarRepository for InMemorySeminarRepository {
        async fn find_by_id(&self, seminar_id: SeminarId) -> SeminarResult<Option<Seminar>> {
            self.fetched.lock().unwrap().push(seminar_id);
            self.fail()?;
            Ok(self.seminars.iter().find(|s| s.id == seminar_id).cloned())
        }

        async fn list(&self, bearer_token: &str) -> SeminarResult<Vec<Seminar>> {
            self.listed_with
                .lock()
                .unwrap()
                .push(bearer_token.to_string());
            self.fail()?;
            Ok(self.seminars.to_vec())
        }
    }

    pub fn secret() -> SharedSecret {
        SharedSecret::new(SECRET).unwrap()
    }

    pub fn config() -> SeminarConfig {
        SeminarConfig::new(
            secret(),
            "http://localhost:8000/api/",
            "https://seminars.example.edu/seminar/detail",
        )
        .unwrap()
    }

    pub fn token_for(id: u64) -> String {
        AccessToken::issue(Id::new(id), &secret()).encode()
    }

    pub fn seminar(id: u64, title: &str, student: &str, scheduled_at: Option<&str>) -> Seminar {
        Seminar {
            id: Id::new(id),
            title: title.to_string(),
            student: Student {
                id: None,
                name: student.to_string(),
                student_number: None,
            },
            scheduled_at: scheduled_at.map(|s| s.parse().unwrap()),
            room: None,
            advisors: Vec::new(),
            assessors: Vec::new(),
            seminar_type: SeminarType::Proposal,
        }
    }
}

#[cfg(test)]
mod resolve_detail_tests {
    use std::sync::Arc;

    use kernel::error::kind::ErrorKind;
    use kernel::id::Id;

    use super::support::*;
    use crate::application::ResolveSeminarDetailUseCase;
    use crate::domain::value_object::shared_secret::SharedSecret;
    use crate::error::SeminarError;

    fn use_case(
        repo: &InMemorySeminarRepository,
    ) -> ResolveSeminarDetailUseCase<InMemorySeminarRepository> {
        ResolveSeminarDetailUseCase::new(Arc::new(repo.clone()), Arc::new(config()))
    }

    #[tokio::test]
    async fn test_valid_token_fetches_exactly_that_seminar() {
        let repo = InMemorySeminarRepository::with(vec![
            seminar(41, "Other", "Budi", None),
            seminar(42, "Adaptive Scheduling", "Rina", None),
        ]);

        let found = use_case(&repo).execute(&token_for(42)).await.unwrap();

        assert_eq!(found.title, "Adaptive Scheduling");
        assert_eq!(repo.fetched(), vec![Id::new(42)]);
    }

    #[tokio::test]
    async fn test_forged_code_never_fetches() {
        let repo = InMemorySeminarRepository::with(vec![seminar(42, "A", "Rina", None)]);

        let err = use_case(&repo).execute("deadbeef:su42").await.unwrap_err();

        assert!(matches!(err, SeminarError::HashMismatch));
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert!(repo.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_code_moved_to_another_id_is_rejected() {
        let repo = InMemorySeminarRepository::with(vec![seminar(43, "B", "Sari", None)]);
        let code_for_42 = token_for(42);
        let (code, _) = code_for_42.split_once(':').unwrap();

        let err = use_case(&repo)
            .execute(&format!("{code}:su43"))
            .await
            .unwrap_err();

        assert!(matches!(err, SeminarError::HashMismatch));
        assert!(repo.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_tokens_never_fetch() {
        let repo = InMemorySeminarRepository::with(vec![seminar(42, "A", "Rina", None)]);
        let use_case = use_case(&repo);

        for raw in ["", "abcsu42", ":su42", "abc:", "abc:su"] {
            let err = use_case.execute(raw).await.unwrap_err();
            assert!(
                matches!(err, SeminarError::InvalidFormat | SeminarError::InvalidId),
                "{raw:?} gave {err:?}"
            );
        }
        for raw in ["abc:suXY", "abc:su-1", "abc:su4 2", "abc:su99999999999999999999"] {
            let err = use_case.execute(raw).await.unwrap_err();
            assert!(matches!(err, SeminarError::InvalidId), "{raw:?} gave {err:?}");
        }

        assert!(repo.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_token_from_another_secret_is_rejected() {
        let repo = InMemorySeminarRepository::with(vec![seminar(42, "A", "Rina", None)]);
        let other = SharedSecret::new("rotated").unwrap();
        let raw = crate::AccessToken::issue(Id::new(42), &other).encode();

        let err = use_case(&repo).execute(&raw).await.unwrap_err();

        assert!(matches!(err, SeminarError::HashMismatch));
        assert!(repo.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_verified_but_missing_seminar() {
        let repo = InMemorySeminarRepository::default();

        let err = use_case(&repo).execute(&token_for(99)).await.unwrap_err();

        assert!(matches!(err, SeminarError::NotFound));
        assert_eq!(repo.fetched(), vec![Id::new(99)]);
    }

    #[tokio::test]
    async fn test_service_failure_passes_through() {
        let repo = InMemorySeminarRepository::failing(ErrorKind::ServiceUnavailable);

        let err = use_case(&repo).execute(&token_for(42)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(err.user_message(), "Seminar service is down for maintenance");
    }
}

#[cfg(test)]
mod list_seminars_tests {
    use std::sync::Arc;

    use kernel::pagination::PageRequest;

    use super::support::*;
    use crate::application::{ListSeminarsInput, ListSeminarsUseCase};
    use crate::domain::services::{SortKey, SortOrder};
    use crate::error::SeminarError;

    fn repo() -> InMemorySeminarRepository {
        InMemorySeminarRepository::with(vec![
            seminar(1, "beta", "Sari", Some("2026-11-03T09:00:00Z")),
            seminar(2, "Alpha", "Budi", None),
            seminar(3, "gamma", "Rina", Some("2026-11-01T09:00:00Z")),
        ])
    }

    #[tokio::test]
    async fn test_list_requires_bearer_token() {
        let repo = repo();
        let use_case = ListSeminarsUseCase::new(Arc::new(repo.clone()));

        let err = use_case
            .execute(ListSeminarsInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SeminarError::Unauthorized));
        assert!(repo.listed_with().is_empty());
    }

    #[tokio::test]
    async fn test_list_sorts_then_paginates() {
        let repo = repo();
        let use_case = ListSeminarsUseCase::new(Arc::new(repo.clone()));

        let page = use_case
            .execute(ListSeminarsInput {
                bearer_token: Some("coordinator".to_string()),
                page: PageRequest::new(Some(1), Some(2)),
                sort_key: SortKey::Title,
                sort_order: SortOrder::Asc,
            })
            .await
            .unwrap();

        let titles: Vec<_> = page.items.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "beta"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(repo.listed_with(), vec!["coordinator".to_string()]);
    }

    #[tokio::test]
    async fn test_list_default_sort_is_by_schedule() {
        let use_case = ListSeminarsUseCase::new(Arc::new(repo()));

        let page = use_case
            .execute(ListSeminarsInput {
                bearer_token: Some("coordinator".to_string()),
                ..ListSeminarsInput::default()
            })
            .await
            .unwrap();

        let ids: Vec<_> = page.items.iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, [3, 1, 2]);
    }
}

#[cfg(test)]
mod issue_link_tests {
    use kernel::id::Id;

    use super::support::*;
    use crate::application::config::SeminarConfig;
    use crate::application::issue_link::{TOKEN_QUERY_PARAM, issue_access_link};
    use crate::application::verify_access_token;

    fn token_param(url: &reqwest::Url) -> Vec<String> {
        url.query_pairs()
            .filter(|(key, _)| key == TOKEN_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .collect()
    }

    #[test]
    fn test_issued_link_verifies() {
        let config = config();
        let link = issue_access_link(Id::new(42), &config);

        assert_eq!(token_param(&link.url), vec![link.token.clone()]);
        assert!(link.token.ends_with(":su42"));
        assert_eq!(
            verify_access_token(&link.token, &config.access_secret).unwrap(),
            Id::new(42)
        );
        assert!(
            link.url
                .as_str()
                .starts_with("https://seminars.example.edu/seminar/detail?id=")
        );
    }

    #[test]
    fn test_issued_link_replaces_stale_token() {
        let config = SeminarConfig::new(
            secret(),
            "http://localhost:8000/api/",
            "https://seminars.example.edu/seminar/detail?lang=en&id=stale",
        )
        .unwrap();

        let link = issue_access_link(Id::new(7), &config);

        assert_eq!(token_param(&link.url), vec![link.token.clone()]);
        assert!(link.url.query_pairs().any(|(k, v)| k == "lang" && v == "en"));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use kernel::error::kind::ErrorKind;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::verify_access_token;
    use crate::presentation::router::seminar_router_generic;

    async fn get(
        repo: &InMemorySeminarRepository,
        uri: &str,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let app = seminar_router_generic(repo.clone(), config());

        let mut request = Request::builder().uri(uri);
        if let Some(token) = bearer {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_detail_ok() {
        let repo = InMemorySeminarRepository::with(vec![seminar(
            42,
            "Adaptive Scheduling",
            "Rina",
            Some("2026-11-02T09:30:00Z"),
        )]);

        let (status, body) = get(&repo, &format!("/detail?id={}", token_for(42)), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["seminar"]["id"], 42);
        assert_eq!(body["seminar"]["title"], "Adaptive Scheduling");
        assert_eq!(body["seminar"]["type"], "proposal");
    }

    #[tokio::test]
    async fn test_detail_without_token() {
        let repo = InMemorySeminarRepository::default();

        for uri in ["/detail", "/detail?id="] {
            let (status, body) = get(&repo, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["status"], 400);
            assert_eq!(body["detail"], "This seminar link is not valid");
        }
        assert!(repo.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_detail_forged_token() {
        let repo = InMemorySeminarRepository::with(vec![seminar(42, "A", "Rina", None)]);

        let (status, body) = get(&repo, "/detail?id=deadbeef:su42", None).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["detail"], "This seminar link is not valid");
        assert!(body["action"].is_string());
        assert!(repo.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let repo = InMemorySeminarRepository::default();

        let (status, body) = get(&repo, &format!("/detail?id={}", token_for(5)), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "The seminar could not be found");
    }

    #[tokio::test]
    async fn test_detail_upstream_failure() {
        let repo = InMemorySeminarRepository::failing(ErrorKind::BadGateway);

        let (status, body) = get(&repo, &format!("/detail?id={}", token_for(5)), None).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["detail"], "Seminar service is down for maintenance");
    }

    #[tokio::test]
    async fn test_list_without_bearer() {
        let repo = InMemorySeminarRepository::with(vec![seminar(1, "A", "Rina", None)]);

        let (status, body) = get(&repo, "/", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], 401);
        assert!(repo.listed_with().is_empty());
    }

    #[tokio::test]
    async fn test_list_sorted_page() {
        let repo = InMemorySeminarRepository::with(vec![
            seminar(1, "beta", "Sari", None),
            seminar(2, "Alpha", "Budi", None),
            seminar(3, "gamma", "Rina", None),
        ]);

        let (status, body) = get(
            &repo,
            "/?page=1&perPage=2&sortBy=title&order=desc",
            Some("coordinator"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["title"], "gamma");
        assert_eq!(body["items"][1]["title"], "beta");
        assert_eq!(body["perPage"], 2);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["pageNumbers"], serde_json::json!([1, 2]));
        assert_eq!(repo.listed_with(), vec!["coordinator".to_string()]);
    }

    #[tokio::test]
    async fn test_list_unparseable_query_is_problem_document() {
        let repo = InMemorySeminarRepository::with(vec![seminar(1, "A", "Rina", None)]);

        for uri in ["/?sortBy=bogus", "/?page=abc", "/?perPage=-1", "/?order=sideways"] {
            let (status, body) = get(&repo, uri, Some("coordinator")).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["status"], 400, "{uri}");
            assert_eq!(body["title"], "Bad Request", "{uri}");
            assert!(body["detail"].is_string(), "{uri}");
        }
        assert!(repo.listed_with().is_empty());
    }

    #[tokio::test]
    async fn test_detail_padded_token_is_rejected_like_decoder() {
        let repo = InMemorySeminarRepository::with(vec![seminar(42, "A", "Rina", None)]);
        let token = token_for(42);

        let (status, body) = get(&repo, &format!("/detail?id=%20{token}%20"), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "This seminar link is not valid");
        assert!(verify_access_token(&format!(" {token} "), &secret()).is_err());
        assert!(repo.fetched().is_empty());
    }
}
