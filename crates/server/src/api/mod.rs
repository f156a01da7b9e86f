mod account;
pub use account::*;

mod clinic;
pub use clinic::*;

mod patient;
pub use patient::*;

mod appointment;
pub use appointment::*;
