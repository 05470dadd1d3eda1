pub mod build;
pub mod dispatch;
pub mod envs;
pub mod hash;
pub mod mutate;
pub mod parse;
pub mod rewrite;
pub mod schema;
