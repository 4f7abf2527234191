use super::UserQueryService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
    queries::EmptyListPolicy,
};

impl UserQueryService {
    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;

        if users.is_empty() && self.empty_policy == EmptyListPolicy::NotFound {
            return Err(ApplicationError::not_found("No users found"));
        }

        Ok(users.into_iter().map(Into::into).collect())
    }
}
