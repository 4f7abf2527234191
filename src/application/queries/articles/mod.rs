mod comments;
mod get_by_id;
mod list;
mod service;

pub use comments::ListArticleCommentsQuery;
pub use get_by_id::{ARTICLE_NOT_FOUND, GetArticleByIdQuery};
pub(crate) use get_by_id::require_article;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
