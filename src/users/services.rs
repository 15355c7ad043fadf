use tracing::debug;

use crate::errors::AppError;
use crate::users::{dto::UserWithMessages, repo::UserStore, repo_types::UserRow};

pub async fn list_users(store: &dyn UserStore) -> Result<Vec<UserRow>, AppError> {
    let users = store.list_users().await?;
    debug!(count = users.len(), "users listed");
    Ok(users)
}

/// Loads the user first, then the user's messages. An unknown id stops before the second read.
pub async fn get_user_with_messages(
    store: &dyn UserStore,
    id: i32,
) -> Result<UserWithMessages, AppError> {
    let user = store
        .find_user(id)
        .await?
        .ok_or(AppError::UserNotFound(id))?;
    let messages = store.list_messages(id).await?;
    debug!(user_id = id, messages = messages.len(), "user loaded");
    Ok(UserWithMessages::new(user, messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repo::fake::FakeUserStore;
    use crate::users::repo_types::MessageRow;

    #[tokio::test]
    async fn attaches_only_the_requested_users_messages() {
        let store = FakeUserStore::default()
            .with_user(1, "Ava", "admin")
            .with_user(2, "Bo", "staff")
            .with_message(1, "hi", 1)
            .with_message(2, "bye", 1)
            .with_message(3, "other", 2);

        let user = get_user_with_messages(&store, 1).await.unwrap();
        assert_eq!(user.name, "Ava");
        assert_eq!(user.kind, "admin");
        assert_eq!(
            user.messages,
            vec![
                MessageRow { id: 1, msg: "hi".into() },
                MessageRow { id: 2, msg: "bye".into() },
            ]
        );
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = FakeUserStore::default().with_message(1, "orphan", 9);
        let err = get_user_with_messages(&store, 9).await.unwrap_err();
        assert!(matches!(err, AppError::UserNotFound(9)));
    }

    #[tokio::test]
    async fn store_failure_is_a_database_error() {
        let store = FakeUserStore::failing();
        assert!(matches!(
            list_users(&store).await.unwrap_err(),
            AppError::Database(_)
        ));
        assert!(matches!(
            get_user_with_messages(&store, 1).await.unwrap_err(),
            AppError::Database(_)
        ));
    }
}
