// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        queries::{
            EmptyListPolicy, articles::ArticleQueryService, topics::TopicQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleSchemaRepository, ArticleWriteRepository},
        comment::CommentRepository,
        topic::TopicRepository,
        user::UserRepository,
    },
};

/// Storage ports the application services are built over.
#[derive(Clone)]
pub struct Repositories {
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_schema: Arc<dyn ArticleSchemaRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub users: Arc<dyn UserRepository>,
    pub topics: Arc<dyn TopicRepository>,
}

/// Answers for listings over an entirely empty table.
#[derive(Debug, Clone, Copy)]
pub struct ListingPolicies {
    pub users: EmptyListPolicy,
    pub topics: EmptyListPolicy,
}

impl Default for ListingPolicies {
    fn default() -> Self {
        Self {
            users: EmptyListPolicy::NotFound,
            topics: EmptyListPolicy::Empty,
        }
    }
}

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub topic_queries: Arc<TopicQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, policies: ListingPolicies) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.article_schema),
            Arc::clone(&repos.topics),
            Arc::clone(&repos.comments),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(
            &repos.article_write,
        )));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comments),
        ));

        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            policies.users,
        ));
        let topic_queries = Arc::new(TopicQueryService::new(
            Arc::clone(&repos.topics),
            policies.topics,
        ));

        Self {
            article_queries,
            article_commands,
            comment_commands,
            user_queries,
            topic_queries,
        }
    }
}
