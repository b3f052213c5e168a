// Shared building blocks for the forumdeck screens

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod status_panel;

pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use status_panel::StatusPanel;
