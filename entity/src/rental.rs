use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rental")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub apartment_id: i32,
    pub client_id: i32,
    pub check_in: Date,
    pub check_out: Date,
    pub rooms: i32,
    pub final_price: f64,
    /// Whether the rental window is currently in effect. Toggled by
    /// reconciliation based on the calendar, never for cancelled rentals.
    pub is_active: bool,
    /// Terminal flag. A cancelled rental is never reactivated.
    pub cancelled: bool,
    /// Set once the upcoming-expiry reminder has been delivered.
    pub expiry_reminder_sent: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::apartment::Entity",
        from = "Column::ApartmentId",
        to = "super::apartment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Apartment,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ClientId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apartment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
