//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Backend that receives contact submissions when no config overrides it
pub const DEFAULT_ENDPOINT: &str = "https://contact-us-backend-jjw6.onrender.com";

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "CONTACT_FORM_ENDPOINT";

/// Directory under the home directory holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = ".contact-form";

/// Log file written in the working directory
pub const LOG_FILE_NAME: &str = "contact-form.log";

/// Application name
pub const APP_NAME: &str = "Contact Us";

/// Shown after the backend accepted the submission
pub const SUCCESS_TEXT: &str = "Thank you! Your message has been sent.";

/// Shown for any failed submission; details only go to the log
pub const FAILURE_TEXT: &str = "Something went wrong. Please try again.";

/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Send Message";

/// Submit control label while a submission is in flight
pub const SUBMITTING_LABEL: &str = "Sending...";
