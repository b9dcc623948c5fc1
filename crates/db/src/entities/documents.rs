//! `SeaORM` Entity for documents table.

use super::sea_orm_active_enums::DocumentCategory;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub case_id: i32,
    pub event_id: Option<i32>,
    pub document_name: String,
    pub document_type: Option<String>,
    pub category: Option<DocumentCategory>,
    #[sea_orm(column_type = "Text", nullable)]
    pub file_path: Option<String>,
    pub google_drive_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub google_drive_url: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub uploaded_by: Option<i32>,
    pub uploaded_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cases::Entity",
        from = "Column::CaseId",
        to = "super::cases::Column::Id",
        on_delete = "Cascade"
    )]
    Cases,
    #[sea_orm(
        belongs_to = "super::case_events::Entity",
        from = "Column::EventId",
        to = "super::case_events::Column::Id",
        on_delete = "SetNull"
    )]
    CaseEvents,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploadedBy",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::cases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cases.def()
    }
}

impl Related<super::case_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CaseEvents.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
