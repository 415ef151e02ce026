use diesel::prelude::*;
use prescripto_primitives::error::{ApiError, AuthError};
use prescripto_primitives::models::entities::user::{NewUser, User, UserProfileChanges};
use prescripto_primitives::schema::users;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<User>, ApiError> {
        users::table
            .find(user_id)
            .select(User::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::email.eq(user_email))
            .select(User::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(conn)
            .map_err(|e| {
                if matches!(
                    e,
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    )
                ) {
                    ApiError::Auth(AuthError::DuplicateEmail)
                } else {
                    ApiError::Database(e)
                }
            })
    }

    /// `Ok(None)` when the user does not exist.
    pub fn update_profile(
        conn: &mut PgConnection,
        user_id: Uuid,
        changes: UserProfileChanges,
    ) -> Result<Option<User>, ApiError> {
        diesel::update(users::table.find(user_id))
            .set(&changes)
            .returning(User::as_returning())
            .get_result(conn)
            .optional()
            .map_err(ApiError::Database)
    }
}
