pub mod catalog;
pub mod price;
pub mod report;
pub mod timestamp;
pub mod user;

pub use catalog::*;
pub use price::*;
pub use report::*;
pub use user::*;

/// Backend identifier type shared by every entity.
pub type EntityId = i64;
pub type ProductId = EntityId;
pub type RegionId = EntityId;
pub type UserId = EntityId;
