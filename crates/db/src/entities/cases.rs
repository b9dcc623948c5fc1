//! `SeaORM` Entity for cases table.

use super::sea_orm_active_enums::CaseStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "cases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub case_code: String,
    pub beneficiary_id: i32,
    pub case_type: String,
    #[sea_orm(column_type = "Text")]
    pub case_title: String,
    pub case_resolution_type: Option<String>,
    pub court: Option<String>,
    pub organizations: Option<Vec<String>>,
    pub status: Option<CaseStatus>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub google_drive_folder_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub google_drive_url: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::beneficiaries::Entity",
        from = "Column::BeneficiaryId",
        to = "super::beneficiaries::Column::Id",
        on_delete = "Cascade"
    )]
    Beneficiaries,
    #[sea_orm(has_many = "super::beneficiaries_cases::Entity")]
    BeneficiariesCases,
    #[sea_orm(has_many = "super::case_events::Entity")]
    CaseEvents,
    #[sea_orm(has_many = "super::documents::Entity")]
    Documents,
}

impl Related<super::beneficiaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beneficiaries.def()
    }
}

impl Related<super::beneficiaries_cases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeneficiariesCases.def()
    }
}

impl Related<super::case_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CaseEvents.def()
    }
}

impl Related<super::documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
