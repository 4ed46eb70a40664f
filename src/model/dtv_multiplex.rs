use sea_orm::entity::prelude::*;

/// One satellite transport stream as MythTV stores it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dtv_multiplex")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub mplexid: i32,
    pub sourceid: i32,
    pub transportid: i32,
    pub networkid: i32,
    pub frequency: i32,
    pub symbolrate: i32,
    pub polarity: String,
    pub mod_sys: String,
    pub hierarchy: String,
    pub modulation: String,
    pub constellation: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Channel,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Channel => Entity::has_many(super::channel::Entity).into(),
        }
    }
}

impl Related<super::channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Channel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
