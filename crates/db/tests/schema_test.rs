//! Integration tests for the schema builder.

mod common;

use chrono::{NaiveDate, NaiveDateTime};
use common::{DB_LOCK, count, public_tables, test_db};
use pace_core::MinimalFixture;
use pace_core::records::{NewUser, UserRole};
use pace_db::entities::{beneficiaries, beneficiaries_cases, case_events, documents, users};
use pace_db::schema::{self, TABLES};
use pace_db::seed::insert_users;
use pace_db::seed_fresh;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};

async fn fresh_schema() -> Option<DatabaseConnection> {
    let db = test_db().await?;
    schema::rebuild(&db).await.expect("Failed to rebuild schema");
    Some(db)
}

async fn insert_beneficiary(db: &DatabaseConnection, name: &str) -> i32 {
    beneficiaries::ActiveModel {
        name: Set(name.to_string()),
        date_of_filing: Set(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert beneficiary")
    .id
}

#[tokio::test]
async fn test_rebuild_creates_all_tables() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };

    let tables = public_tables(&db).await;
    for table in TABLES {
        assert!(tables.iter().any(|t| t == table), "missing {table}");
        assert_eq!(count(&db, table).await, 0);
    }
}

#[tokio::test]
async fn test_rebuild_discards_existing_rows() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };

    insert_beneficiary(&db, "Priya Sharma").await;
    schema::rebuild(&db).await.expect("Second rebuild failed");

    assert_eq!(count(&db, "beneficiaries").await, 0);
}

#[tokio::test]
async fn test_drop_all_then_create_all() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };

    schema::drop_all(&db).await.expect("Failed to drop schema");
    let tables = public_tables(&db).await;
    for table in TABLES {
        assert!(!tables.iter().any(|t| t == table), "{table} still exists");
    }

    schema::create_all(&db).await.expect("Failed to create schema");
    assert!(schema::create_all(&db).await.is_err(), "tables already exist");
}

#[tokio::test]
async fn test_beneficiary_defaults() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };

    let id = insert_beneficiary(&db, "Rajesh Kumar").await;
    let stored = beneficiaries::Entity::find_by_id(id)
        .one(&db)
        .await
        .expect("Failed to query beneficiary")
        .expect("Beneficiary not found");

    assert_eq!(stored.has_smartphone, Some(false));
    assert_eq!(stored.can_read, Some(true));
    assert!(stored.created_at.is_some());
}

#[tokio::test]
async fn test_case_status_outside_closed_set_is_rejected() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };

    let beneficiary = insert_beneficiary(&db, "Sunita Devi").await;
    let result = db
        .execute_unprepared(&format!(
            "INSERT INTO cases (case_code, beneficiary_id, case_type, case_title, status) \
             VALUES ('PACE-2024-001', {beneficiary}, 'Child Custody', 'Custody', 'bogus')"
        ))
        .await;

    assert!(result.is_err(), "CHECK constraint should reject 'bogus'");
    assert_eq!(count(&db, "cases").await, 0);
}

#[tokio::test]
async fn test_reminder_method_outside_closed_set_is_rejected() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };
    seed_fresh(&db, &mut MinimalFixture)
        .await
        .expect("Failed to seed fixture");

    let rejected = db
        .execute_unprepared(
            "INSERT INTO reminders (case_event_id, send_date, send_time, method) \
             VALUES (1, '2024-12-14', '09:00', 'carrier-pigeon')",
        )
        .await;
    assert!(rejected.is_err());

    let accepted = db
        .execute_unprepared(
            "INSERT INTO reminders (case_event_id, send_date, send_time, method) \
             VALUES (1, '2024-12-14', '09:00', 'voice-note')",
        )
        .await;
    assert!(accepted.is_ok());
}

#[tokio::test]
async fn test_duplicate_case_code_is_rejected() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };

    let beneficiary = insert_beneficiary(&db, "Amit Patel").await;
    let insert = format!(
        "INSERT INTO cases (case_code, beneficiary_id, case_type, case_title) \
         VALUES ('PACE-2024-001', {beneficiary}, 'Labor Rights', 'Employment')"
    );
    db.execute_unprepared(&insert)
        .await
        .expect("First insert should succeed");

    assert!(db.execute_unprepared(&insert).await.is_err());
}

#[tokio::test]
async fn test_deleting_beneficiary_cascades() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };
    seed_fresh(&db, &mut MinimalFixture)
        .await
        .expect("Failed to seed fixture");

    let priya = beneficiaries::Entity::find()
        .filter(beneficiaries::Column::Name.eq("Priya Sharma"))
        .one(&db)
        .await
        .expect("Failed to query beneficiary")
        .expect("Priya Sharma not seeded");
    db.execute_unprepared(
        "INSERT INTO reminders (case_event_id, send_date, send_time, method) \
         SELECT e.id, '2024-12-14', '09:00', 'sms' FROM case_events e \
         JOIN cases c ON c.id = e.case_id WHERE c.case_code = 'PACE-2024-001'",
    )
    .await
    .expect("Failed to add reminder");

    beneficiaries::Entity::delete_by_id(priya.id)
        .exec(&db)
        .await
        .expect("Failed to delete beneficiary");

    assert_eq!(count(&db, "cases").await, 3);
    assert_eq!(count(&db, "beneficiaries_cases").await, 3);
    assert_eq!(count(&db, "case_events").await, 3);
    assert_eq!(count(&db, "reminders").await, 0);
    let links = beneficiaries_cases::Entity::find()
        .filter(beneficiaries_cases::Column::BeneficiaryId.eq(priya.id))
        .all(&db)
        .await
        .expect("Failed to query links");
    assert!(links.is_empty());
}

#[tokio::test]
async fn test_deleting_event_keeps_document() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };
    seed_fresh(&db, &mut MinimalFixture)
        .await
        .expect("Failed to seed fixture");

    let event = case_events::Entity::find()
        .one(&db)
        .await
        .expect("Failed to query events")
        .expect("No event seeded");
    let document = documents::ActiveModel {
        case_id: Set(event.case_id),
        event_id: Set(Some(event.id)),
        document_name: Set("hearing-notice.pdf".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("Failed to insert document");

    case_events::Entity::delete_by_id(event.id)
        .exec(&db)
        .await
        .expect("Failed to delete event");

    let stored = documents::Entity::find_by_id(document.id)
        .one(&db)
        .await
        .expect("Failed to query document")
        .expect("Document should survive event deletion");
    assert_eq!(stored.event_id, None);
    assert_eq!(stored.case_id, event.case_id);
}

#[tokio::test]
async fn test_update_refreshes_updated_at() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };

    db.execute_unprepared(
        "INSERT INTO users (name, email, password_hash, updated_at) \
         VALUES ('Old Name', 'old@pace.org', 'x', '2000-01-01 00:00:00')",
    )
    .await
    .expect("Failed to insert user");
    db.execute_unprepared("UPDATE users SET name = 'New Name' WHERE email = 'old@pace.org'")
        .await
        .expect("Failed to update user");

    let user = users::Entity::find()
        .filter(users::Column::Email.eq("old@pace.org"))
        .one(&db)
        .await
        .expect("Failed to query user")
        .expect("User not found");
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let updated: NaiveDateTime = user.updated_at.expect("updated_at should be set");
    assert!(updated > epoch);
}

#[tokio::test]
async fn test_existing_email_is_skipped() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };

    let admin = || NewUser {
        name: "Admin User".to_string(),
        email: "admin@pace.org".to_string(),
        password_hash: "x".to_string(),
        role: UserRole::Admin,
    };

    assert_eq!(insert_users(&db, vec![admin()]).await.unwrap(), 1);
    assert_eq!(insert_users(&db, vec![admin()]).await.unwrap(), 0);
    assert_eq!(count(&db, "users").await, 1);
}

#[tokio::test]
async fn test_link_pair_is_unique() {
    let _guard = DB_LOCK.lock().await;
    let Some(db) = fresh_schema().await else {
        return;
    };
    seed_fresh(&db, &mut MinimalFixture)
        .await
        .expect("Failed to seed fixture");

    let link = beneficiaries_cases::Entity::find()
        .one(&db)
        .await
        .expect("Failed to query links")
        .expect("No link seeded");
    let duplicate = beneficiaries_cases::ActiveModel {
        beneficiary_id: Set(link.beneficiary_id),
        case_id: Set(link.case_id),
        ..Default::default()
    }
    .insert(&db)
    .await;

    assert!(duplicate.is_err());
}
