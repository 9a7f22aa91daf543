//! Application configuration.
//!
//! Compile-time settings for the GalacticCollectibles frontend.

/// Application name, used as the document title.
pub const APP_NAME: &str = "GalacticCollectibles";

/// Id of the element the app mounts into.
///
/// Falls back to `<body>` when the host page has no such element.
pub const MOUNT_ID: &str = "app";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
