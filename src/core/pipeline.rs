use crate::core::transform;
use crate::domain::model::{RecordSet, Summary};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::{EtlError, Result};
use chrono::Utc;
use reqwest::Client;

/// Owns the single reqwest client, reused for both the GET and the PUT.
pub struct SummaryPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> SummaryPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for SummaryPipeline<C> {
    async fn extract(&self) -> Result<RecordSet> {
        tracing::debug!("Making API request to: {}", self.config.fetch_endpoint());
        let response = self
            .client
            .get(self.config.fetch_endpoint())
            .timeout(self.config.request_timeout())
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        // 非成功狀態就中止，不讓空結果流進 transform
        if !response.status().is_success() {
            return Err(EtlError::FetchFailed {
                status: response.status().as_u16(),
            });
        }

        let record_set = response
            .json::<RecordSet>()
            .await
            .map_err(|e| EtlError::MalformedPayload {
                reason: e.to_string(),
            })?;

        Ok(record_set)
    }

    async fn transform(&self, data: RecordSet) -> Result<Summary> {
        // the clock enters the pipeline only at this seam
        let today = Utc::now().date_naive();
        Ok(transform::compute(&data.data, today))
    }

    async fn load(&self, result: Summary) -> Result<()> {
        tracing::debug!("Submitting summary to: {}", self.config.submit_endpoint());
        let response = self
            .client
            .put(self.config.submit_endpoint())
            .timeout(self.config.request_timeout())
            .json(&result)
            .send()
            .await?;

        tracing::debug!("Submit response status: {}", response.status());

        if !response.status().is_success() {
            return Err(EtlError::SubmitFailed {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    struct MockConfig {
        fetch_endpoint: String,
        submit_endpoint: String,
    }

    impl MockConfig {
        fn new(fetch_endpoint: String, submit_endpoint: String) -> Self {
            Self {
                fetch_endpoint,
                submit_endpoint,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn fetch_endpoint(&self) -> &str {
            &self.fetch_endpoint
        }

        fn submit_endpoint(&self) -> &str {
            &self.submit_endpoint
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(5)
        }
    }

    fn sample_payload() -> serde_json::Value {
        serde_json::json!({
            "title": "Test payload",
            "details": "details",
            "requestType": "PUT",
            "uriToSubmit": "https://example.com/api/SubmitTest",
            "objectLayout": "{}",
            "data": [
                {
                    "id": 1,
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "ada@example.com",
                    "dob": "2000-01-01T00:00:00",
                    "favouriteColour": "Red"
                },
                {
                    "id": 2,
                    "firstName": "Grace",
                    "lastName": "Hopper",
                    "email": "grace@example.com",
                    "dob": "1990-01-01T00:00:00",
                    "favouriteColour": "Blue"
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_extract_successful_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/gettest");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(sample_payload());
        });

        let config = MockConfig::new(server.url("/api/gettest"), server.url("/api/SubmitTest"));
        let pipeline = SummaryPipeline::new(config);

        let result = pipeline.extract().await.unwrap();

        api_mock.assert();
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.data[0].favourite_colour, "Red");
        assert_eq!(result.title, "Test payload");
    }

    #[tokio::test]
    async fn test_extract_http_error_is_fetch_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/gettest");
            then.status(500);
        });

        let config = MockConfig::new(server.url("/api/gettest"), server.url("/api/SubmitTest"));
        let pipeline = SummaryPipeline::new(config);

        let result = pipeline.extract().await;

        api_mock.assert();
        assert!(matches!(result, Err(EtlError::FetchFailed { status: 500 })));
    }

    #[tokio::test]
    async fn test_extract_unparsable_body_is_malformed_payload() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/gettest");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json at all");
        });

        let config = MockConfig::new(server.url("/api/gettest"), server.url("/api/SubmitTest"));
        let pipeline = SummaryPipeline::new(config);

        let result = pipeline.extract().await;

        api_mock.assert();
        assert!(matches!(result, Err(EtlError::MalformedPayload { .. })));
    }

    #[tokio::test]
    async fn test_load_puts_summary_json() {
        let server = MockServer::start();
        let submit_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/SubmitTest")
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "AgePlus20": [44, 54],
                    "TopColours": {"Red": 2, "Blue": 1}
                }));
            then.status(200);
        });

        let config = MockConfig::new(server.url("/api/gettest"), server.url("/api/SubmitTest"));
        let pipeline = SummaryPipeline::new(config);

        let summary = Summary {
            age_plus_20: vec![44, 54],
            top_colours: crate::domain::model::ColourRanking::new(vec![
                ("Red".to_string(), 2),
                ("Blue".to_string(), 1),
            ]),
        };

        pipeline.load(summary).await.unwrap();
        submit_mock.assert();
    }

    #[tokio::test]
    async fn test_load_http_error_is_submit_failure() {
        let server = MockServer::start();
        let submit_mock = server.mock(|when, then| {
            when.method(PUT).path("/api/SubmitTest");
            then.status(400);
        });

        let config = MockConfig::new(server.url("/api/gettest"), server.url("/api/SubmitTest"));
        let pipeline = SummaryPipeline::new(config);

        let summary = Summary {
            age_plus_20: vec![],
            top_colours: Default::default(),
        };

        let result = pipeline.load(summary).await;

        submit_mock.assert();
        assert!(matches!(result, Err(EtlError::SubmitFailed { status: 400 })));
    }
}
