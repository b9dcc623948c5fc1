//! Schema builder.
//!
//! Holds the DDL for every table, index and trigger, and the functions that
//! apply it. [`rebuild`] is DESTRUCTIVE: it drops every table first and all
//! rows in them are lost.

use sea_orm::{ConnectionTrait, DbErr};
use tracing::{info, warn};

/// Tables in creation order. Each depends only on tables before it.
pub const TABLES: [&str; 7] = [
    "users",
    "beneficiaries",
    "cases",
    "beneficiaries_cases",
    "case_events",
    "documents",
    "reminders",
];

/// Tables carrying an `updated_at` column kept current by trigger.
pub const TOUCHED_TABLES: [&str; 4] = ["users", "beneficiaries", "cases", "case_events"];

/// Creates every table, index and trigger.
///
/// # Errors
///
/// Fails if any of the tables already exists or a statement is rejected.
pub async fn create_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    for (table, sql) in TABLES.iter().zip(CREATE_TABLES_SQL) {
        db.execute_unprepared(sql).await?;
        info!(table, "Created table");
    }
    db.execute_unprepared(INDEXES_SQL).await?;
    db.execute_unprepared(TRIGGERS_SQL).await?;
    Ok(())
}

/// Drops every table, leaves first, plus the trigger function.
///
/// # Errors
///
/// Returns an error if a drop statement fails.
pub async fn drop_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    db.execute_unprepared(DROP_ALL_SQL).await?;
    Ok(())
}

/// Drops and recreates the whole schema. DESTRUCTIVE.
///
/// # Errors
///
/// Returns the first failing statement's error.
pub async fn rebuild<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    warn!("Dropping all case-management tables; existing rows will be lost");
    drop_all(db).await?;
    create_all(db).await?;
    info!(tables = TABLES.len(), "Schema rebuilt");
    Ok(())
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const CREATE_TABLES_SQL: [&str; 7] = [
    USERS_SQL,
    BENEFICIARIES_SQL,
    CASES_SQL,
    BENEFICIARIES_CASES_SQL,
    CASE_EVENTS_SQL,
    DOCUMENTS_SQL,
    REMINDERS_SQL,
];

const USERS_SQL: &str = r"
CREATE TABLE users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) UNIQUE NOT NULL,
    password_hash VARCHAR(255) NOT NULL,
    role VARCHAR(50) NOT NULL DEFAULT 'staff' CHECK (role IN ('admin', 'staff')),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

const BENEFICIARIES_SQL: &str = r"
CREATE TABLE beneficiaries (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    contact_number VARCHAR(20),
    email VARCHAR(255),
    address TEXT,
    date_of_filing DATE NOT NULL,
    has_smartphone BOOLEAN DEFAULT FALSE,
    can_read BOOLEAN DEFAULT TRUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

const CASES_SQL: &str = r"
CREATE TABLE cases (
    id SERIAL PRIMARY KEY,
    case_code VARCHAR(50) UNIQUE NOT NULL,
    beneficiary_id INTEGER NOT NULL REFERENCES beneficiaries(id) ON DELETE CASCADE,
    case_type VARCHAR(100) NOT NULL,
    case_title TEXT NOT NULL,
    case_resolution_type VARCHAR(100),
    court VARCHAR(255),
    organizations TEXT[],
    status VARCHAR(50) DEFAULT 'active'
        CHECK (status IN ('active', 'pending', 'urgent', 'resolved', 'closed')),
    notes TEXT,
    google_drive_folder_id VARCHAR(255),
    google_drive_url TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

const BENEFICIARIES_CASES_SQL: &str = r"
CREATE TABLE beneficiaries_cases (
    id SERIAL PRIMARY KEY,
    beneficiary_id INTEGER NOT NULL REFERENCES beneficiaries(id) ON DELETE CASCADE,
    case_id INTEGER NOT NULL REFERENCES cases(id) ON DELETE CASCADE,
    role VARCHAR(100) DEFAULT 'primary',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    UNIQUE (beneficiary_id, case_id)
);
";

const CASE_EVENTS_SQL: &str = r"
CREATE TABLE case_events (
    id SERIAL PRIMARY KEY,
    case_id INTEGER NOT NULL REFERENCES cases(id) ON DELETE CASCADE,
    event_type VARCHAR(100) NOT NULL,
    event_title VARCHAR(255) NOT NULL,
    event_date DATE NOT NULL,
    event_time TIME,
    location VARCHAR(255),
    description TEXT,
    event_status VARCHAR(50) DEFAULT 'scheduled'
        CHECK (event_status IN ('scheduled', 'completed', 'cancelled', 'postponed')),
    google_drive_url TEXT,
    created_by INTEGER REFERENCES users(id),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

const DOCUMENTS_SQL: &str = r"
CREATE TABLE documents (
    id SERIAL PRIMARY KEY,
    case_id INTEGER NOT NULL REFERENCES cases(id) ON DELETE CASCADE,
    event_id INTEGER REFERENCES case_events(id) ON DELETE SET NULL,
    document_name VARCHAR(255) NOT NULL,
    document_type VARCHAR(100),
    category VARCHAR(50) DEFAULT 'other'
        CHECK (category IN ('complaint', 'order', 'correspondence', 'evidence', 'other')),
    file_path TEXT,
    google_drive_id VARCHAR(255),
    google_drive_url TEXT,
    file_size BIGINT,
    mime_type VARCHAR(100),
    uploaded_by INTEGER REFERENCES users(id),
    uploaded_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

const REMINDERS_SQL: &str = r"
CREATE TABLE reminders (
    id SERIAL PRIMARY KEY,
    case_event_id INTEGER NOT NULL REFERENCES case_events(id) ON DELETE CASCADE,
    send_date DATE NOT NULL,
    send_time TIME NOT NULL,
    method VARCHAR(50) NOT NULL
        CHECK (method IN ('sms', 'whatsapp', 'voice-note', 'manual-call', 'email')),
    status VARCHAR(50) DEFAULT 'pending'
        CHECK (status IN ('pending', 'sent', 'failed', 'cancelled')),
    message_content TEXT,
    sent_at TIMESTAMP,
    error_message TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

const INDEXES_SQL: &str = r"
CREATE INDEX idx_beneficiaries_name ON beneficiaries(name);
CREATE INDEX idx_cases_status ON cases(status);
CREATE INDEX idx_cases_case_code ON cases(case_code);
CREATE INDEX idx_case_events_date ON case_events(event_date);
CREATE INDEX idx_documents_case_id ON documents(case_id);
";

const TRIGGERS_SQL: &str = r"
-- ============================================================
-- FUNCTION: update_updated_at_column
-- Sets updated_at to the current time on every row update
-- ============================================================
CREATE OR REPLACE FUNCTION update_updated_at_column()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = CURRENT_TIMESTAMP;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER update_users_updated_at
BEFORE UPDATE ON users
FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

CREATE TRIGGER update_beneficiaries_updated_at
BEFORE UPDATE ON beneficiaries
FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

CREATE TRIGGER update_cases_updated_at
BEFORE UPDATE ON cases
FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

CREATE TRIGGER update_case_events_updated_at
BEFORE UPDATE ON case_events
FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();
";

const DROP_ALL_SQL: &str = r"
-- ============================================================
-- DROP ALL
-- Order matters due to foreign key constraints
-- ============================================================
DROP TABLE IF EXISTS reminders CASCADE;
DROP TABLE IF EXISTS documents CASCADE;
DROP TABLE IF EXISTS case_events CASCADE;
DROP TABLE IF EXISTS beneficiaries_cases CASCADE;
DROP TABLE IF EXISTS cases CASCADE;
DROP TABLE IF EXISTS beneficiaries CASCADE;
DROP TABLE IF EXISTS users CASCADE;

DROP FUNCTION IF EXISTS update_updated_at_column() CASCADE;
";
