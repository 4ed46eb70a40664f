use sea_orm::entity::prelude::*;

/// One broadcast service carried within a multiplex.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "channel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub chanid: i32,
    pub channum: i32,
    pub sourceid: i32,
    pub callsign: String,
    pub name: String,
    pub useonairguide: bool,
    pub mplexid: i32,
    pub serviceid: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Multiplex,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Multiplex => Entity::belongs_to(super::dtv_multiplex::Entity)
                .from(Column::Mplexid)
                .to(super::dtv_multiplex::Column::Mplexid)
                .into(),
        }
    }
}

impl Related<super::dtv_multiplex::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Multiplex.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
