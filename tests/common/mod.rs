#![allow(dead_code)]

use std::sync::{Arc, Once};

use jsonwebtoken::{DecodingKey, EncodingKey};
use sitterly::models::{Child, Nanny, Role, Workdays};
use sitterly::services::jwt::JwtService;
use sitterly::stores::memory::{MemoryChildDirectory, MemoryHireStore, MemoryNannyDirectory};
use sitterly::stores::{ChildDirectory, HireStore, NannyDirectory};
use time::{Date, Duration, OffsetDateTime, Weekday};
use tokio::net::TcpListener;
use uuid::Uuid;

const TEST_JWT_SECRET: &[u8] = b"integration-test-secret";

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("sitterly=debug")
            .with_test_writer()
            .init();
    });
}

fn jwt_service() -> JwtService {
    JwtService::new(
        EncodingKey::from_secret(TEST_JWT_SECRET),
        DecodingKey::from_secret(TEST_JWT_SECRET),
    )
}

/// A running application over in-memory stores, plus handles to seed them.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub hires: Arc<MemoryHireStore>,
    pub nannies: Arc<MemoryNannyDirectory>,
    pub children: Arc<MemoryChildDirectory>,
    jwt: JwtService,
}

impl TestApp {
    /// Mints a bearer token for the given user and role.
    pub fn token(&self, user_id: Uuid, role: Role) -> String {
        self.jwt
            .create_access_token(user_id, role)
            .expect("Failed to mint test token")
    }

    /// Seeds a nanny working only on `workday`, accepting ages 2..=10 in
    /// groups of up to 3.
    pub fn seed_nanny_on(&self, workday: Weekday) -> Nanny {
        let nanny = Nanny {
            id: Uuid::new_v4(),
            first_name: "Mary".into(),
            last_name: "Poppins".into(),
            workdays: Workdays {
                monday: workday == Weekday::Monday,
                tuesday: workday == Weekday::Tuesday,
                wednesday: workday == Weekday::Wednesday,
                thursday: workday == Weekday::Thursday,
                friday: workday == Weekday::Friday,
                saturday: workday == Weekday::Saturday,
                sunday: workday == Weekday::Sunday,
            },
            group_size: 3,
            child_min_age: 2,
            child_max_age: 10,
        };
        self.nannies.insert(nanny.clone());
        nanny
    }

    /// Seeds a nanny available every day of the week.
    pub fn seed_nanny(&self) -> Nanny {
        let nanny = Nanny {
            id: Uuid::new_v4(),
            first_name: "Mary".into(),
            last_name: "Poppins".into(),
            workdays: Workdays {
                monday: true,
                tuesday: true,
                wednesday: true,
                thursday: true,
                friday: true,
                saturday: true,
                sunday: true,
            },
            group_size: 3,
            child_min_age: 2,
            child_max_age: 10,
        };
        self.nannies.insert(nanny.clone());
        nanny
    }

    /// Seeds a child of `parent_id` who is exactly `age` years old today.
    pub fn seed_child(&self, parent_id: Uuid, age: i32) -> Child {
        let child = Child {
            id: Uuid::new_v4(),
            parent_id,
            name: "Jane".into(),
            birthdate: birthdate_for_age(age),
        };
        self.children.insert(child.clone());
        child
    }
}

/// Spawns the application on a random port over fresh in-memory stores.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> TestApp {
    init_tracing_once();

    let hires = Arc::new(MemoryHireStore::new());
    let nannies = Arc::new(MemoryNannyDirectory::new());
    let children = Arc::new(MemoryChildDirectory::new());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app = sitterly::app_with_stores(
        Arc::clone(&hires) as Arc<dyn HireStore>,
        Arc::clone(&nannies) as Arc<dyn NannyDirectory>,
        Arc::clone(&children) as Arc<dyn ChildDirectory>,
        jwt_service(),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        client: reqwest::Client::new(),
        hires,
        nannies,
        children,
        jwt: jwt_service(),
    }
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// First future date falling on the given weekday.
pub fn next(weekday: Weekday) -> Date {
    let mut date = today() + Duration::days(1);
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}

/// Birthdate making a child exactly `age` years old today.
pub fn birthdate_for_age(age: i32) -> Date {
    let now = today();
    now.replace_year(now.year() - age)
        .unwrap_or_else(|_| Date::from_calendar_date(now.year() - age, now.month(), 28).unwrap())
}
