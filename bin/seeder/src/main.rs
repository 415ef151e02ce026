use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use eyre::{eyre, Result};
use prescripto_core::repositories::{DoctorRepository, UserRepository};
use prescripto_core::services::admin_service::DEFAULT_DOCTOR_IMAGE;
use prescripto_core::services::auth_service::AuthService;
use prescripto_primitives::models::entities::address::Address;
use prescripto_primitives::models::entities::doctor::NewDoctor;
use prescripto_primitives::models::entities::user::NewUser;
use prescripto_primitives::schema::doctors;
use secrecy::SecretString;
use std::env;

struct DemoDoctor {
    name: &'static str,
    email: &'static str,
    speciality: &'static str,
    degree: &'static str,
    experience: &'static str,
    fees: i64,
    line1: &'static str,
    line2: &'static str,
}

const DEMO_DOCTORS: &[DemoDoctor] = &[
    DemoDoctor {
        name: "Dr. Richard James",
        email: "richard.james@prescripto.dev",
        speciality: "General physician",
        degree: "MBBS",
        experience: "4 Years",
        fees: 500,
        line1: "17th Cross, Richmond",
        line2: "Circle, Ring Road, London",
    },
    DemoDoctor {
        name: "Dr. Emily Larson",
        email: "emily.larson@prescripto.dev",
        speciality: "Gynecologist",
        degree: "MBBS",
        experience: "3 Years",
        fees: 600,
        line1: "27th Cross, Richmond",
        line2: "Circle, Ring Road, London",
    },
    DemoDoctor {
        name: "Dr. Sarah Patel",
        email: "sarah.patel@prescripto.dev",
        speciality: "Dermatologist",
        degree: "MBBS",
        experience: "1 Years",
        fees: 300,
        line1: "37th Cross, Richmond",
        line2: "Circle, Ring Road, London",
    },
    DemoDoctor {
        name: "Dr. Christopher Lee",
        email: "christopher.lee@prescripto.dev",
        speciality: "Pediatricians",
        degree: "MBBS",
        experience: "2 Years",
        fees: 400,
        line1: "47th Cross, Richmond",
        line2: "Circle, Ring Road, London",
    },
    DemoDoctor {
        name: "Dr. Jennifer Garcia",
        email: "jennifer.garcia@prescripto.dev",
        speciality: "Neurologist",
        degree: "MBBS",
        experience: "4 Years",
        fees: 500,
        line1: "57th Cross, Richmond",
        line2: "Circle, Ring Road, London",
    },
    DemoDoctor {
        name: "Dr. Andrew Williams",
        email: "andrew.williams@prescripto.dev",
        speciality: "Gastroenterologist",
        degree: "MBBS",
        experience: "4 Years",
        fees: 500,
        line1: "67th Cross, Richmond",
        line2: "Circle, Ring Road, London",
    },
];

const DEMO_PASSWORD: &str = "prescripto123";

fn establish_connection() -> Result<PgConnection> {
    let database_url = env::var("DATABASE_URL").map_err(|_| eyre!("DATABASE_URL must be set"))?;
    PgConnection::establish(&database_url)
        .map_err(|e| eyre!("Error connecting to database: {}", e))
}

fn main() -> Result<()> {
    dotenv().ok();
    println!("Seeding database...");

    let mut conn = establish_connection()?;

    if env::args().any(|arg| arg == "--reset") {
        clean_db(&mut conn)?;
    }

    let password_hash = AuthService::hash_password(&SecretString::from(DEMO_PASSWORD))?;

    for doctor in DEMO_DOCTORS {
        seed_doctor(&mut conn, doctor, &password_hash)?;
    }

    seed_patient(&mut conn, "patient@prescripto.dev", "Demo Patient", &password_hash)?;

    println!("Database seeded successfully!");
    Ok(())
}

fn clean_db(conn: &mut PgConnection) -> Result<()> {
    println!("Cleaning database...");
    diesel::sql_query("TRUNCATE appointments, doctors, users CASCADE").execute(conn)?;
    Ok(())
}

fn seed_doctor(conn: &mut PgConnection, demo: &DemoDoctor, password_hash: &str) -> Result<()> {
    let existing = doctors::table
        .filter(doctors::email.eq(demo.email))
        .select(doctors::id)
        .first::<uuid::Uuid>(conn)
        .optional()?;

    if existing.is_some() {
        println!("Doctor {} already exists", demo.email);
        return Ok(());
    }

    let address = Address {
        line1: demo.line1.to_string(),
        line2: demo.line2.to_string(),
    };

    let about = format!(
        "{} is committed to delivering comprehensive {} care, with a strong \
         emphasis on preventive medicine, early diagnosis and effective treatment.",
        demo.name,
        demo.speciality.to_lowercase()
    );

    DoctorRepository::create(
        conn,
        NewDoctor {
            name: demo.name,
            email: demo.email,
            password_hash,
            image: DEFAULT_DOCTOR_IMAGE,
            speciality: demo.speciality,
            degree: demo.degree,
            experience: demo.experience,
            about: &about,
            fees: demo.fees,
            address: address.to_value(),
        },
    )?;

    println!("Created doctor: {}", demo.name);
    Ok(())
}

fn seed_patient(
    conn: &mut PgConnection,
    email: &str,
    name: &str,
    password_hash: &str,
) -> Result<()> {
    if UserRepository::find_by_email(conn, email)?.is_some() {
        println!("User {} already exists", email);
        return Ok(());
    }

    UserRepository::create(
        conn,
        NewUser {
            name,
            email,
            password_hash,
        },
    )?;

    println!("Created user: {} (password: {})", email, DEMO_PASSWORD);
    Ok(())
}
