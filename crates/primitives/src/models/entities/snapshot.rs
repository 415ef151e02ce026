use crate::models::entities::address::Address;
use crate::models::entities::doctor::Doctor;
use crate::models::entities::user::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Patient details frozen into an appointment when it is booked. Later
/// profile edits do not reach existing appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSnapshot {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: String,
    pub phone: String,
    pub address: Address,
    pub gender: String,
    pub dob: String,
}

impl From<&User> for UserSnapshot {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
            phone: user.phone.clone(),
            address: Address::from_value(&user.address),
            gender: user.gender.clone(),
            dob: user.dob.clone(),
        }
    }
}

/// Doctor details frozen into an appointment. Never carries the password
/// hash or the slot map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorSnapshot {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: String,
    pub speciality: String,
    pub degree: String,
    pub experience: String,
    pub about: String,
    pub fees: i64,
    pub address: Address,
}

impl From<&Doctor> for DoctorSnapshot {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
            email: doctor.email.clone(),
            image: doctor.image.clone(),
            speciality: doctor.speciality.clone(),
            degree: doctor.degree.clone(),
            experience: doctor.experience.clone(),
            about: doctor.about.clone(),
            fees: doctor.fees,
            address: Address::from_value(&doctor.address),
        }
    }
}

pub fn to_document<T: Serialize>(snapshot: &T) -> Value {
    serde_json::to_value(snapshot).unwrap_or(Value::Null)
}
