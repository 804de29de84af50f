//! Product records and the codec that mints new ones.

mod factory;
mod record;
mod update;

pub use factory::{unix_now, DemoFactory, ProductFactory};
pub use record::Product;
pub use update::ProductUpdate;
