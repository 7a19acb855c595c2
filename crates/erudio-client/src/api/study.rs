use erudio_shared::protocol::{QuizQuestion, QuizResponse, TopicContent, TopicRequest};

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn generate_quiz(&self, token: Option<&str>, topic_name: &str) -> Result<Vec<QuizQuestion>> {
        let body = TopicRequest {
            topic_name: topic_name.to_string(),
        };
        let resp: QuizResponse = self.post_json("/chat/generate-quiz", token, &body).await?;
        Ok(resp.questions)
    }

    pub async fn generate_topic_content(
        &self,
        token: Option<&str>,
        topic_name: &str,
    ) -> Result<TopicContent> {
        let body = TopicRequest {
            topic_name: topic_name.to_string(),
        };
        self.post_json("/chat/generate-topic-content", token, &body).await
    }
}
