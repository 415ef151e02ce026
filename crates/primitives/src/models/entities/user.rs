use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub image: String,
    pub phone: String,
    pub address: Value,
    pub gender: String,
    pub dob: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Profile fields a user may change. `image` is only written when a new
/// upload produced a URL.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
pub struct UserProfileChanges<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub address: Value,
    pub dob: &'a str,
    pub gender: &'a str,
    pub image: Option<&'a str>,
}
