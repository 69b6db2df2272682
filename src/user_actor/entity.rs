//! [`ActorEntity`] implementation for [`User`].

use super::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn validate_email(email: &str) -> Result<(), UserError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(UserError::ValidationError(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = ();
    type Context = ();
    type Error = UserError;

    /// Registers a user. The username must be non-blank and the email well formed.
    async fn from_create_params(
        id: UserId,
        params: UserCreate,
        _ctx: &(),
    ) -> Result<Self, UserError> {
        let username = params.username.trim();
        if username.is_empty() {
            return Err(UserError::ValidationError("username may not be blank".into()));
        }
        validate_email(&params.email)?;

        Ok(Self {
            id,
            username: username.to_string(),
            email: params.email,
            first_name: params.first_name,
            last_name: params.last_name,
            is_staff: params.is_staff,
        })
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `email`, `first_name`, `last_name`: profile details
    /// - `is_staff`: staff privileges
    ///
    /// The email is checked before anything changes, so a rejected update leaves the
    /// user untouched.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(is_staff) = update.is_staff {
            self.is_staff = is_staff;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserCreate {
        UserCreate {
            username: " alice ".into(),
            email: "alice@example.com".into(),
            first_name: "Alice".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_trims_username() {
        let user = User::from_create_params(UserId(1), alice(), &()).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.first_name, "Alice");
        assert!(!user.is_staff);
    }

    #[tokio::test]
    async fn create_rejects_blank_username_and_bad_email() {
        let blank = UserCreate {
            username: "  ".into(),
            ..alice()
        };
        assert!(matches!(
            User::from_create_params(UserId(1), blank, &()).await,
            Err(UserError::ValidationError(_))
        ));

        let bad_email = UserCreate {
            email: "alice.example.com".into(),
            ..alice()
        };
        assert!(matches!(
            User::from_create_params(UserId(1), bad_email, &()).await,
            Err(UserError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn rejected_update_changes_nothing() {
        let mut user = User::from_create_params(UserId(1), alice(), &()).await.unwrap();
        let update = UserUpdate {
            email: Some("nope".into()),
            last_name: Some("Smith".into()),
            ..Default::default()
        };
        assert!(user.on_update(update, &()).await.is_err());
        assert_eq!(user.last_name, "");
        assert_eq!(user.email, "alice@example.com");
    }
}
