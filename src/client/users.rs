//! `/users` (admin endpoints)

use agri_types::user::{UserEnvelope, UserList};
use agri_types::{MessageResponse, User, UserUpdate};

use super::ApiClient;
use crate::error::ApiError;

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET /users
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let list: UserList = self.client.get_json("/users", &[]).await?;
        Ok(list.users)
    }

    /// GET /users/{id}
    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.client.get_json(&format!("/users/{}", id), &[]).await?;
        Ok(envelope.user)
    }

    /// PUT /users/{id}
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .client
            .put_json(&format!("/users/{}", id), Some(update))
            .await?;
        Ok(envelope.user)
    }

    /// DELETE /users/{id}
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _: MessageResponse = self.client.delete_json(&format!("/users/{}", id)).await?;
        Ok(())
    }
}
