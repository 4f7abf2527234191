use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub const USER_NOT_FOUND: &str = "No user found";

pub struct GetUserQuery {
    pub username: String,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let username =
            Username::new(query.username).map_err(|_| ApplicationError::not_found(USER_NOT_FOUND))?;

        self.user_repo
            .find_by_username(&username)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(USER_NOT_FOUND))
    }
}
