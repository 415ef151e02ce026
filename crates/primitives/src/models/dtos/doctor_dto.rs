use crate::error::ApiError;
use crate::models::entities::address::Address;
use crate::models::entities::doctor::Doctor;
use crate::utility::{validate_not_blank, validate_password};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Public doctor card. Carries the booked slots so the client can render
/// the free ones; never the email or password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub speciality: String,
    pub degree: String,
    pub experience: String,
    pub about: String,
    pub available: bool,
    pub fees: i64,
    pub address: Address,
    pub slots_booked: BTreeMap<String, Vec<String>>,
}

impl TryFrom<&Doctor> for DoctorSummary {
    type Error = ApiError;

    fn try_from(doctor: &Doctor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doctor.id,
            name: doctor.name.clone(),
            image: doctor.image.clone(),
            speciality: doctor.speciality.clone(),
            degree: doctor.degree.clone(),
            experience: doctor.experience.clone(),
            about: doctor.about.clone(),
            available: doctor.available,
            fees: doctor.fees,
            address: Address::from_value(&doctor.address),
            slots_booked: doctor.slots()?.into_inner(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DoctorListResponse {
    pub success: bool,
    pub doctors: Vec<DoctorSummary>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddDoctorRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default)]
    #[schema(example = "richard@prescripto.dev")]
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    #[serde(default)]
    #[schema(format = "password")]
    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    #[schema(example = "General physician")]
    #[validate(custom(function = "validate_not_blank"))]
    pub speciality: String,

    #[serde(default)]
    #[schema(example = "MBBS")]
    #[validate(custom(function = "validate_not_blank"))]
    pub degree: String,

    #[serde(default)]
    #[schema(example = "4 Years")]
    #[validate(custom(function = "validate_not_blank"))]
    pub experience: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub about: String,

    #[serde(default)]
    #[schema(example = 500)]
    #[validate(range(min = 1, message = "Fees must be positive"))]
    pub fees: i64,

    #[serde(default)]
    pub address: Address,
}

impl AddDoctorRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self.name = self.name.trim().to_string();
        self
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeAvailabilityRequest {
    #[serde(rename = "docId", default)]
    pub doc_id: String,
}
