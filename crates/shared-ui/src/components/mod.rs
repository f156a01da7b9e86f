pub mod badge;
pub mod card;
pub mod form_select;
pub mod input;
pub mod label;
pub mod skeleton;
pub mod textarea;

// Re-exports for convenience
pub use badge::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use skeleton::*;
pub use textarea::*;
