use std::sync::Arc;

use crate::application::{
    dto::TopicDto,
    error::{ApplicationError, ApplicationResult},
    queries::EmptyListPolicy,
};
use crate::domain::topic::TopicRepository;

pub struct TopicQueryService {
    topic_repo: Arc<dyn TopicRepository>,
    empty_policy: EmptyListPolicy,
}

impl TopicQueryService {
    pub fn new(topic_repo: Arc<dyn TopicRepository>, empty_policy: EmptyListPolicy) -> Self {
        Self {
            topic_repo,
            empty_policy,
        }
    }

    pub async fn list_topics(&self) -> ApplicationResult<Vec<TopicDto>> {
        let topics = self.topic_repo.list().await?;

        if topics.is_empty() && self.empty_policy == EmptyListPolicy::NotFound {
            return Err(ApplicationError::not_found("No topics found"));
        }

        Ok(topics.into_iter().map(Into::into).collect())
    }
}
