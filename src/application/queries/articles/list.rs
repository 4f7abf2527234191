use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListing, SortColumn, SortOrder},
        topic::{INVALID_FILTER_QUERY, TopicSlug},
    },
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

impl ArticleQueryService {
    /// Validate order, sort column and topic filter, in that order, then run
    /// the listing. An empty result is not an error.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let listing = self.validate_listing(query).await?;

        let articles = self.read_repo.list(&listing).await?;
        tracing::debug!(
            sort_by = listing.sort_by.as_str(),
            order = listing.order.as_sql(),
            topic = listing.topic.as_ref().map(TopicSlug::as_str),
            count = articles.len(),
            "listed articles"
        );

        Ok(articles.into_iter().map(Into::into).collect())
    }

    async fn validate_listing(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListing> {
        let order = SortOrder::parse(supplied(query.order.as_deref()))?;

        let allowlist = self.schema_repo.article_columns().await?;
        let sort_by = SortColumn::parse(supplied(query.sort_by.as_deref()), &allowlist)?;

        let topic = match query.topic.filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(self.validate_topic(raw).await?),
            None => None,
        };

        Ok(ArticleListing {
            sort_by,
            order,
            topic,
        })
    }

    async fn validate_topic(&self, raw: String) -> ApplicationResult<TopicSlug> {
        let slug = TopicSlug::new(raw)?;
        if self.topic_repo.exists(&slug).await? {
            Ok(slug)
        } else {
            Err(ApplicationError::bad_request(INVALID_FILTER_QUERY))
        }
    }
}

/// An empty query value (`?topic=`) counts as not supplied.
fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}
