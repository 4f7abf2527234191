mod get;
mod list;
mod service;

pub use get::GetUserQuery;
pub use service::UserQueryService;
