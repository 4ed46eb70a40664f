pub mod channel;
pub mod dtv_multiplex;
