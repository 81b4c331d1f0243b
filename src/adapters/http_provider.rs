use crate::domain::model::{Entity, RecordKind, SortSpec};
use crate::domain::ports::{ConfigProvider, DataProvider};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

/// REST 資料提供者：`{base_url}/entities/{Kind}`
#[derive(Debug, Clone)]
pub struct HttpDataProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    api_key_header: String,
}

impl HttpDataProvider {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            api_key_header: "api_key".to_string(),
        }
    }

    pub fn with_api_key(mut self, header: &str, key: &str) -> Self {
        self.api_key_header = header.to_string();
        self.api_key = Some(key.to_string());
        self
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        let provider = Self::new(client, config.api_base_url());
        Ok(match config.api_key() {
            Some(key) => provider.with_api_key(config.api_key_header(), key),
            None => provider,
        })
    }

    pub fn collection_url(&self, kind: RecordKind) -> String {
        format!("{}/entities/{}", self.base_url, kind.entity_name())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(self.api_key_header.as_str(), key.as_str()),
            None => request,
        }
    }

    async fn ensure_success(kind: RecordKind, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(PortfolioError::ProviderError {
            kind,
            status: status.as_u16(),
            message: if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            },
        })
    }
}

#[async_trait]
impl DataProvider for HttpDataProvider {
    async fn list<E: Entity>(&self, sort: Option<&SortSpec>) -> Result<Vec<E>> {
        let url = self.collection_url(E::KIND);
        let mut request = self.authorize(self.client.get(&url));
        if let Some(sort) = sort {
            request = request.query(&[("sort", sort.to_string())]);
        }

        tracing::debug!("Listing {} records from: {}", E::KIND, url);
        let response = Self::ensure_success(E::KIND, request.send().await?).await?;
        tracing::debug!("{} list response status: {}", E::KIND, response.status());

        let status = response.status().as_u16();
        let json_data: serde_json::Value = response.json().await?;
        let serde_json::Value::Array(items) = json_data else {
            return Err(PortfolioError::ProviderError {
                kind: E::KIND,
                status,
                message: "expected a JSON array of records".to_string(),
            });
        };

        Ok(decode_records(items))
    }

    async fn create<E: Entity>(&self, fields: &E) -> Result<E> {
        let url = self.collection_url(E::KIND);
        tracing::debug!("Creating {} record at: {}", E::KIND, url);

        let request = self.authorize(self.client.post(&url)).json(fields);
        let response = Self::ensure_success(E::KIND, request.send().await?).await?;

        Ok(response.json().await?)
    }
}

// 逐筆解析：壞掉的記錄只丟掉自己，不拖累整個清單
fn decode_records<E: Entity>(items: Vec<serde_json::Value>) -> Vec<E> {
    let total = items.len();
    let records: Vec<E> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("⚠️ Skipping malformed {} record #{}: {}", E::KIND, index, e);
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::debug!("Kept {}/{} {} records", records.len(), total, E::KIND);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Profile, Project, Skill, SkillCategory};
    use httpmock::prelude::*;

    fn provider_for(server: &MockServer) -> HttpDataProvider {
        HttpDataProvider::new(Client::new(), &server.base_url())
    }

    #[tokio::test]
    async fn test_list_sends_sort_and_api_key() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/entities/Skill")
                    .query_param("sort", "category")
                    .header("api_key", "secret");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!([
                        {"id": "s1", "name": "Rust", "category": "technical", "proficiency": 5},
                        {"id": "s2", "name": "Figma", "category": "design", "proficiency": 3}
                    ]));
            })
            .await;

        let provider = provider_for(&server).with_api_key("api_key", "secret");
        let sort = SortSpec::ascending("category");
        let skills: Vec<Skill> = provider.list(Some(&sort)).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Rust");
        assert_eq!(skills[1].category, SkillCategory::Design);
    }

    #[tokio::test]
    async fn test_list_non_success_is_provider_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entities/Profile");
                then.status(500).body("database offline");
            })
            .await;

        let result: Result<Vec<Profile>> = provider_for(&server).list(None).await;

        match result {
            Err(PortfolioError::ProviderError {
                kind,
                status,
                message,
            }) => {
                assert_eq!(kind, RecordKind::Profile);
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_rejects_non_array_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entities/Profile");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"full_name": "Not a list"}));
            })
            .await;

        let result: Result<Vec<Profile>> = provider_for(&server).list(None).await;
        assert!(matches!(result, Err(PortfolioError::ProviderError { .. })));
    }

    #[tokio::test]
    async fn test_list_skips_only_malformed_records() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entities/Project");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!([
                        {"title": "Blank date", "completion_date": "", "featured": null},
                        {"title": "Broken", "technologies": "not-a-list"},
                        {"title": "Fine", "technologies": ["Rust"], "completion_date": "2024-01-01"}
                    ]));
            })
            .await;

        let projects: Vec<Project> = provider_for(&server).list(None).await.unwrap();

        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Blank date", "Fine"]);
        assert_eq!(projects[0].completion_date, None);
    }

    #[tokio::test]
    async fn test_list_profile_with_null_fields() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entities/Profile");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!([
                        {"full_name": "Ada", "bio": null, "detailed_about": null}
                    ]));
            })
            .await;

        let profiles: Vec<Profile> = provider_for(&server).list(None).await.unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].full_name, "Ada");
    }

    #[tokio::test]
    async fn test_create_posts_record_fields() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/entities/Skill")
                    .json_body(serde_json::json!({
                        "name": "Git",
                        "category": "tools",
                        "proficiency": 4
                    }));
                then.status(201)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({
                        "id": "new-skill",
                        "name": "Git",
                        "category": "tools",
                        "proficiency": 4
                    }));
            })
            .await;

        let draft = Skill {
            name: "Git".to_string(),
            category: SkillCategory::Tools,
            proficiency: 4,
            ..Default::default()
        };
        let created = provider_for(&server).create(&draft).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(created.id.as_deref(), Some("new-skill"));
        assert_eq!(created.name, "Git");
    }

    #[test]
    fn test_collection_url_trims_trailing_slash() {
        let provider = HttpDataProvider::new(Client::new(), "https://api.example.com/apps/42/");
        assert_eq!(
            provider.collection_url(RecordKind::Experience),
            "https://api.example.com/apps/42/entities/Experience"
        );
    }
}
