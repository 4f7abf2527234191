use std::sync::Arc;

use crate::application::queries::EmptyListPolicy;
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) empty_policy: EmptyListPolicy,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, empty_policy: EmptyListPolicy) -> Self {
        Self {
            user_repo,
            empty_policy,
        }
    }
}
