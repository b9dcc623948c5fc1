//! `SeaORM` active enums for the CHECK-constrained string columns.

use pace_core::records;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum UserRole {
    /// Administrator.
    #[sea_orm(string_value = "admin")]
    Admin,
    /// Staff member.
    #[sea_orm(string_value = "staff")]
    Staff,
}

/// `cases.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum CaseStatus {
    /// Being worked on.
    #[sea_orm(string_value = "active")]
    Active,
    /// Waiting on an external party.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Needs immediate attention.
    #[sea_orm(string_value = "urgent")]
    Urgent,
    /// Outcome reached.
    #[sea_orm(string_value = "resolved")]
    Resolved,
    /// No further work.
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// `case_events.event_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum EventStatus {
    /// Upcoming.
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    /// Took place.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Will not take place.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    /// Moved to a later date.
    #[sea_orm(string_value = "postponed")]
    Postponed,
}

/// `documents.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum DocumentCategory {
    /// Filed complaint.
    #[sea_orm(string_value = "complaint")]
    Complaint,
    /// Court order.
    #[sea_orm(string_value = "order")]
    Order,
    /// Letters and messages.
    #[sea_orm(string_value = "correspondence")]
    Correspondence,
    /// Evidence.
    #[sea_orm(string_value = "evidence")]
    Evidence,
    /// Anything else.
    #[sea_orm(string_value = "other")]
    Other,
}

/// `reminders.method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum ReminderMethod {
    /// Text message.
    #[sea_orm(string_value = "sms")]
    Sms,
    /// WhatsApp message.
    #[sea_orm(string_value = "whatsapp")]
    Whatsapp,
    /// Recorded voice note.
    #[sea_orm(string_value = "voice-note")]
    VoiceNote,
    /// Staff phone call.
    #[sea_orm(string_value = "manual-call")]
    ManualCall,
    /// Email.
    #[sea_orm(string_value = "email")]
    Email,
}

/// `reminders.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum ReminderStatus {
    /// Not yet sent.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Delivered.
    #[sea_orm(string_value = "sent")]
    Sent,
    /// Delivery failed.
    #[sea_orm(string_value = "failed")]
    Failed,
    /// Withdrawn before sending.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl From<records::UserRole> for UserRole {
    fn from(role: records::UserRole) -> Self {
        match role {
            records::UserRole::Admin => Self::Admin,
            records::UserRole::Staff => Self::Staff,
        }
    }
}

impl From<records::CaseStatus> for CaseStatus {
    fn from(status: records::CaseStatus) -> Self {
        match status {
            records::CaseStatus::Active => Self::Active,
            records::CaseStatus::Pending => Self::Pending,
            records::CaseStatus::Urgent => Self::Urgent,
            records::CaseStatus::Resolved => Self::Resolved,
            records::CaseStatus::Closed => Self::Closed,
        }
    }
}

impl From<records::EventStatus> for EventStatus {
    fn from(status: records::EventStatus) -> Self {
        match status {
            records::EventStatus::Scheduled => Self::Scheduled,
            records::EventStatus::Completed => Self::Completed,
            records::EventStatus::Cancelled => Self::Cancelled,
            records::EventStatus::Postponed => Self::Postponed,
        }
    }
}

impl From<records::ReminderMethod> for ReminderMethod {
    fn from(method: records::ReminderMethod) -> Self {
        match method {
            records::ReminderMethod::Sms => Self::Sms,
            records::ReminderMethod::Whatsapp => Self::Whatsapp,
            records::ReminderMethod::VoiceNote => Self::VoiceNote,
            records::ReminderMethod::ManualCall => Self::ManualCall,
            records::ReminderMethod::Email => Self::Email,
        }
    }
}

impl From<records::ReminderStatus> for ReminderStatus {
    fn from(status: records::ReminderStatus) -> Self {
        match status {
            records::ReminderStatus::Pending => Self::Pending,
            records::ReminderStatus::Sent => Self::Sent,
            records::ReminderStatus::Failed => Self::Failed,
            records::ReminderStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveEnum, Iterable};

    #[test]
    fn test_stored_values_match_domain_strings() {
        for role in records::UserRole::ALL {
            assert_eq!(UserRole::from(role).to_value(), role.as_str());
        }
        for status in records::CaseStatus::ALL {
            assert_eq!(CaseStatus::from(status).to_value(), status.as_str());
        }
        for status in records::EventStatus::ALL {
            assert_eq!(EventStatus::from(status).to_value(), status.as_str());
        }
        for method in records::ReminderMethod::ALL {
            assert_eq!(ReminderMethod::from(method).to_value(), method.as_str());
        }
        for status in records::ReminderStatus::ALL {
            assert_eq!(ReminderStatus::from(status).to_value(), status.as_str());
        }
    }

    #[test]
    fn test_document_categories() {
        let values: Vec<String> = DocumentCategory::iter().map(|c| c.to_value()).collect();
        assert_eq!(
            values,
            ["complaint", "order", "correspondence", "evidence", "other"]
        );
    }
}
