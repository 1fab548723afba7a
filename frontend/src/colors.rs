/// Site palette shared by the page chrome and the form widgets.
pub const PRIMARY: &str = "#80bc6a";
pub const SECOND: &str = "#2f5d50";

pub const PINNED_BACKGROUND: &str = "rgba(219,230,214,0.9)";
pub const FIELD_BACKGROUND: &str = "rgba(255,255,255,0.5)";
