use std::time::Duration;

use docqa_logging::{qa_debug, qa_info};
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::wire::{self, AskRequest};
use crate::{DocumentUpload, FailureKind, RequestError, UploadReceipt};

/// Multipart field name the ingestion endpoint expects the document under.
pub const DOCUMENT_FIELD: &str = "document";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub upload_path: String,
    pub ask_path: String,
    pub connect_timeout: Duration,
    /// Upper bound for a whole round trip. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://rag-oa.onrender.com".to_string(),
            upload_path: "/upload-document".to_string(),
            ask_path: "/ask-question".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Some(Duration::from_secs(120)),
        }
    }
}

#[async_trait::async_trait]
pub trait QaService: Send + Sync {
    async fn upload_document(&self, document: &DocumentUpload)
        -> Result<UploadReceipt, RequestError>;

    async fn ask_question(&self, question: &str) -> Result<Option<String>, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestQaClient {
    client: reqwest::Client,
    upload_url: Url,
    ask_url: Url,
}

impl ReqwestQaClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, RequestError> {
        let base = Url::parse(&settings.base_url).map_err(invalid_url)?;
        let upload_url = base.join(&settings.upload_path).map_err(invalid_url)?;
        let ask_url = base.join(&settings.ask_path).map_err(invalid_url)?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            upload_url,
            ask_url,
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    pub fn ask_url(&self) -> &Url {
        &self.ask_url
    }
}

#[async_trait::async_trait]
impl QaService for ReqwestQaClient {
    async fn upload_document(
        &self,
        document: &DocumentUpload,
    ) -> Result<UploadReceipt, RequestError> {
        let part = Part::bytes(document.content.to_vec()).file_name(document.file_name.clone());
        let form = Form::new().part(DOCUMENT_FIELD, part);

        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let bytes = success_body(response).await?;
        let body = wire::parse_upload_body(&bytes)?;

        qa_info!("Upload result: {}", body);
        Ok(UploadReceipt { body })
    }

    async fn ask_question(&self, question: &str) -> Result<Option<String>, RequestError> {
        let response = self
            .client
            .post(self.ask_url.clone())
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let bytes = success_body(response).await?;

        qa_debug!("Answer body is {} bytes", bytes.len());
        wire::parse_answer(&bytes)
    }
}

async fn success_body(response: reqwest::Response) -> Result<bytes::Bytes, RequestError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::new(
            FailureKind::HttpStatus(status.as_u16()),
            format!("HTTP error! status: {status}"),
        ));
    }
    response.bytes().await.map_err(map_reqwest_error)
}

fn invalid_url(err: url::ParseError) -> RequestError {
    RequestError::new(FailureKind::InvalidUrl, err.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
