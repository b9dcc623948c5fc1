//! Closed enumerations stored in CHECK-constrained columns.
//!
//! Every variant's `as_str` value is exactly the literal the schema accepts.
//! Anything outside these sets is rejected by the database.

use std::fmt;

/// Operator role on a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Regular case worker.
    Staff,
}

impl UserRole {
    /// Every accepted role.
    pub const ALL: [Self; 2] = [Self::Admin, Self::Staff];

    /// Returns the stored string for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStatus {
    /// Being worked on.
    Active,
    /// Waiting on an external party.
    Pending,
    /// Needs immediate attention.
    Urgent,
    /// Outcome reached.
    Resolved,
    /// No further work.
    Closed,
}

impl CaseStatus {
    /// Every accepted status.
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::Pending,
        Self::Urgent,
        Self::Resolved,
        Self::Closed,
    ];

    /// Returns the stored string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Urgent => "urgent",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a scheduled case event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    /// Still upcoming.
    Scheduled,
    /// Took place.
    Completed,
    /// Will not take place.
    Cancelled,
    /// Moved to a later date.
    Postponed,
}

impl EventStatus {
    /// Every accepted status.
    pub const ALL: [Self; 4] = [
        Self::Scheduled,
        Self::Completed,
        Self::Cancelled,
        Self::Postponed,
    ];

    /// Returns the stored string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Postponed => "postponed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel a reminder is delivered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderMethod {
    /// Text message.
    Sms,
    /// WhatsApp message.
    Whatsapp,
    /// Recorded voice note, for beneficiaries who cannot read.
    VoiceNote,
    /// Staff phone call.
    ManualCall,
    /// Email.
    Email,
}

impl ReminderMethod {
    /// Every accepted method.
    pub const ALL: [Self; 5] = [
        Self::Sms,
        Self::Whatsapp,
        Self::VoiceNote,
        Self::ManualCall,
        Self::Email,
    ];

    /// Returns the stored string for this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Whatsapp => "whatsapp",
            Self::VoiceNote => "voice-note",
            Self::ManualCall => "manual-call",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ReminderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery status of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderStatus {
    /// Not yet sent.
    Pending,
    /// Delivered.
    Sent,
    /// Delivery failed.
    Failed,
    /// Withdrawn before sending.
    Cancelled,
}

impl ReminderStatus {
    /// Every accepted status.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Sent, Self::Failed, Self::Cancelled];

    /// Returns the stored string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
