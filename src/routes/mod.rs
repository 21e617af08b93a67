pub mod contact;
pub mod custom_tour;
pub mod health;
pub mod intake;

pub use contact::contact;
pub use custom_tour::custom_tour;
pub use health::health_check;
