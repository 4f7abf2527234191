pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use listing::{ArticleListing, ColumnAllowlist, SortColumn, SortOrder};
pub use repository::{ArticleReadRepository, ArticleSchemaRepository, ArticleWriteRepository};
pub use value_objects::{ArticleId, VoteDelta};
