use crate::error::ApiError;
use crate::models::entities::slots::SlotsBooked;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::doctors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub image: String,
    pub speciality: String,
    pub degree: String,
    pub experience: String,
    pub about: String,
    pub available: bool,
    pub fees: i64,
    pub address: Value,
    pub slots_booked: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Doctor {
    pub fn slots(&self) -> Result<SlotsBooked, ApiError> {
        SlotsBooked::from_value(&self.slots_booked)
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::doctors)]
pub struct NewDoctor<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub image: &'a str,
    pub speciality: &'a str,
    pub degree: &'a str,
    pub experience: &'a str,
    pub about: &'a str,
    pub fees: i64,
    pub address: Value,
}
