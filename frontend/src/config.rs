use log::Level;

pub const SITE_TITLE: &str = "Homeopathy for Children";

// Fixed delivery targets for the appointment form.
pub const PRACTICE_EMAIL: &str = "appointments@homeopathy-for-children.co.uk";
pub const PRACTICE_PHONE: &str = "+447700900123";
pub const WHATSAPP_NUMBER: &str = "447700900123";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
