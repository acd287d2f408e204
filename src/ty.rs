pub mod block;
pub mod kind;
