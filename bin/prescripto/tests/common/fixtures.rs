use diesel::PgConnection;
use fake::faker::name::en::Name;
use fake::Fake;
use prescripto_core::repositories::{DoctorRepository, UserRepository};
use prescripto_core::services::auth_service::AuthService;
use prescripto_primitives::models::entities::address::Address;
use prescripto_primitives::models::entities::doctor::{Doctor, NewDoctor};
use prescripto_primitives::models::entities::user::{NewUser, User};
use secrecy::SecretString;
use std::sync::OnceLock;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "SecurePass123";

/// One argon2 hash shared by every fixture account.
pub fn test_password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| {
        AuthService::hash_password(&SecretString::from(TEST_PASSWORD))
            .expect("Failed to hash password")
    })
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}+{}@example.com", prefix, Uuid::new_v4())
}

pub fn insert_user(conn: &mut PgConnection) -> User {
    let name: String = Name().fake();
    let email = unique_email("patient");

    UserRepository::create(
        conn,
        NewUser {
            name: &name,
            email: &email,
            password_hash: test_password_hash(),
        },
    )
    .expect("Failed to insert user")
}

pub fn insert_doctor(conn: &mut PgConnection, fees: i64, available: bool) -> Doctor {
    let name = format!("Dr. {}", Name().fake::<String>());
    let email = unique_email("doctor");
    let address = Address {
        line1: "17th Cross, Richmond".to_string(),
        line2: "Circle, Ring Road, London".to_string(),
    };

    let doctor = DoctorRepository::create(
        conn,
        NewDoctor {
            name: &name,
            email: &email,
            password_hash: test_password_hash(),
            image: "https://example.com/doctor.png",
            speciality: "General physician",
            degree: "MBBS",
            experience: "4 Years",
            about: "Committed to preventive care.",
            fees,
            address: address.to_value(),
        },
    )
    .expect("Failed to insert doctor");

    if available {
        doctor
    } else {
        DoctorRepository::toggle_availability(conn, doctor.id).expect("Failed to toggle");
        DoctorRepository::find_by_id(conn, doctor.id)
            .expect("Failed to reload doctor")
            .expect("Doctor vanished")
    }
}
