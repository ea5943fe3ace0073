//! HTTP client for the Checkmate service

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::{error_message, ApiError};
use super::types::{
    AnswerPage, AnswerUpdate, Member, MemberSignUp, NewAnswer, QuestionPage, Review, SignInRequest,
    SignInResponse,
};
use crate::config::ApiConfig;
use crate::wizard::{RegistrationApi, RegistrationSubmission};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("checkmate/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Replace the access token sent with authorized requests
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn non-2xx responses into `ApiError::Rejected`
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create a member account
    pub async fn sign_up(&self, submission: &RegistrationSubmission) -> Result<(), ApiError> {
        let body = MemberSignUp::from(submission);
        tracing::debug!("POST members for {}", submission.email);
        let response = self.http.post(self.url("members")).json(&body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Exchange credentials for an access token
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = SignInRequest {
            member_email: email,
            member_password: password,
        };
        let response = self
            .http
            .post(self.url("members/login"))
            .json(&body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let parsed: SignInResponse = Self::decode(response).await?;
        Ok(parsed.accesstoken)
    }

    pub async fn get_member(&self, member_id: i64) -> Result<Member, ApiError> {
        let request = self.http.get(self.url(&format!("members/{}", member_id)));
        let response = Self::check(self.authorized(request).send().await?).await?;
        Self::decode(response).await
    }

    pub async fn list_answers(
        &self,
        question_id: i64,
        offset: u32,
        limit: u32,
    ) -> Result<AnswerPage, ApiError> {
        let path = format!("answers/list/{}/{}/{}", question_id, offset, limit);
        let request = self.http.get(self.url(&path));
        let response = Self::check(self.authorized(request).send().await?).await?;
        Self::decode(response).await
    }

    /// Questions newest first; `author` narrows the list to one member's questions
    pub async fn list_questions(
        &self,
        author: Option<i64>,
        offset: u32,
        limit: u32,
    ) -> Result<QuestionPage, ApiError> {
        let path = match author {
            Some(member_id) => format!("questions/member/{}/{}/{}", member_id, offset, limit),
            None => format!("questions/list/{}/{}", offset, limit),
        };
        let request = self.http.get(self.url(&path));
        let response = Self::check(self.authorized(request).send().await?).await?;
        Self::decode(response).await
    }

    /// Post a correction for a question
    pub async fn add_answer(&self, answer: &NewAnswer) -> Result<(), ApiError> {
        tracing::debug!("POST answers for question {}", answer.question_id);
        let request = self.http.post(self.url("answers")).json(answer);
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }

    /// Replace the text of an existing answer
    pub async fn update_answer(&self, update: &AnswerUpdate) -> Result<(), ApiError> {
        tracing::debug!("PUT answers for answer {}", update.answer_id);
        let request = self.http.put(self.url("answers")).json(update);
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }

    pub async fn delete_answer(&self, answer_id: i64) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.url(&format!("answers/delete/{}", answer_id)));
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }

    /// Accept an answer for a question, leaving a review for its author
    pub async fn choose_answer(
        &self,
        question_id: i64,
        answer_id: i64,
        review: &Review,
    ) -> Result<(), ApiError> {
        let path = format!("choose/{}/{}", question_id, answer_id);
        let request = self.http.post(self.url(&path)).json(review);
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }
}

#[async_trait]
impl RegistrationApi for ApiClient {
    async fn register(&self, submission: &RegistrationSubmission) -> Result<(), ApiError> {
        self.sign_up(submission).await
    }
}
