//! `SeaORM` Entity for reminders table.

use super::sea_orm_active_enums::{ReminderMethod, ReminderStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reminders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub case_event_id: i32,
    pub send_date: Date,
    pub send_time: Time,
    pub method: ReminderMethod,
    pub status: Option<ReminderStatus>,
    #[sea_orm(column_type = "Text", nullable)]
    pub message_content: Option<String>,
    pub sent_at: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_message: Option<String>,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::case_events::Entity",
        from = "Column::CaseEventId",
        to = "super::case_events::Column::Id",
        on_delete = "Cascade"
    )]
    CaseEvents,
}

impl Related<super::case_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CaseEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
