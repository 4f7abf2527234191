use std::sync::Arc;

use crate::domain::{
    article::{ArticleReadRepository, ArticleSchemaRepository},
    comment::CommentRepository,
    topic::TopicRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) schema_repo: Arc<dyn ArticleSchemaRepository>,
    pub(super) topic_repo: Arc<dyn TopicRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        schema_repo: Arc<dyn ArticleSchemaRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            read_repo,
            schema_repo,
            topic_repo,
            comment_repo,
        }
    }
}
