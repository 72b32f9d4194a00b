use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

use bistro_auth_schema::users;
use bistro_domain::validate::normalize_email;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::AuthServiceError;

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, AuthServiceError> {
        let trimmed = identifier.trim();
        let model = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Email.eq(normalize_email(trimmed)))
                    .add(users::Column::PhoneNumber.eq(trimmed))
                    .add(users::Column::Username.eq(trimmed)),
            )
            .one(&self.db)
            .await
            .context("find user by identifier")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::PhoneNumber.eq(phone))
            .one(&self.db)
            .await
            .context("find user by phone")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            phone_number: Set(user.phone_number.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_owned()),
            is_active: Set(user.is_active),
            created_at: Set(user.created_at),
            updated_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(map_insert_err)?;
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        let result = users::Entity::update_many()
            .col_expr(
                users::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                users::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update password")?;
        if result.rows_affected == 0 {
            return Err(AuthServiceError::UserNotFound);
        }
        Ok(())
    }
}

fn map_insert_err(err: DbErr) -> AuthServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return AuthServiceError::UserAlreadyExists;
    }
    AuthServiceError::Internal(anyhow::Error::new(err).context("insert user"))
}

fn user_from_model(model: users::Model) -> Result<User, AuthServiceError> {
    let role = model
        .role
        .parse()
        .with_context(|| format!("user {} has unknown role", model.id))?;
    Ok(User {
        id: model.id,
        username: model.username,
        email: model.email,
        phone_number: model.phone_number,
        password_hash: model.password_hash,
        role,
        is_active: model.is_active,
        created_at: model.created_at,
    })
}
