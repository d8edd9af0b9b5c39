// 🚴 Entity Models - roster value types
// Identity is content-addressed (see identity.rs), never autoincrement.

pub mod category;
pub mod rider;
pub mod team;

pub use category::Category;
pub use rider::Rider;
pub use team::Team;
