#[cfg(feature = "button-pad")]
pub mod button_pad;
pub mod controller;
pub mod scripted;
