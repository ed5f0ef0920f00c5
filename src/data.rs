pub mod amino;
pub mod food;
pub mod user;

pub use amino::{AminoAcidProfile, CoverageResult, NeedsVector};
pub use food::{FoodId, FoodItem};
pub use user::UserProfile;
