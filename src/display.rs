//! Turning errors into text an end user can be shown.
//!
//! Developers see the full description of every error. Everyone else sees a
//! generic message, except for HTTP status errors, which keep their code.
//! This only changes the text; the error kind is never altered.

use crate::Error;

/// The message shown in place of errors that are not safe to display.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong!";

/// Environment variable read by [`DisplayMode::from_env`].
pub const DEVELOPER_MODE_ENV: &str = "APPSERVICES_DEVELOPER_MODE";

/// Who the error text is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Show full diagnostic detail.
    Developer,
    /// Show only what an end user should see.
    Release,
}

impl Default for DisplayMode {
    /// `Developer` in debug builds, `Release` otherwise.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            DisplayMode::Developer
        } else {
            DisplayMode::Release
        }
    }
}

impl DisplayMode {
    /// Reads the mode from `APPSERVICES_DEVELOPER_MODE`.
    ///
    /// Falls back to [`DisplayMode::default`] when the variable is unset or
    /// not a recognized boolean.
    pub fn from_env() -> Self {
        std::env::var(DEVELOPER_MODE_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(DisplayMode::Developer),
            "0" | "false" | "no" | "off" => Some(DisplayMode::Release),
            _ => None,
        }
    }
}

/// A reduced form of [`Error`] that is safe to put in front of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowableError {
    /// The server answered with this non-2xx status.
    HttpStatus(u16),
    /// Anything else.
    SomethingWentWrong,
}

impl ShowableError {
    /// The text to display.
    pub fn description(&self) -> String {
        match self {
            ShowableError::HttpStatus(code) => http_status_description(*code),
            ShowableError::SomethingWentWrong => SOMETHING_WENT_WRONG.to_string(),
        }
    }
}

fn http_status_description(code: u16) -> String {
    format!("{SOMETHING_WENT_WRONG} Underlying status code: {code}")
}

impl Error {
    /// The full description of this error.
    ///
    /// ```
    /// use appservices::Error;
    ///
    /// assert_eq!(Error::BadUrl.error_description(), "Malformed URL was sent to session.");
    /// assert!(Error::HttpStatus(404).error_description().contains("404"));
    /// ```
    pub fn error_description(&self) -> String {
        match self {
            Error::BadUrl => "Malformed URL was sent to session.".to_string(),
            Error::ResponseConversionFailed => "Typecasting failed.".to_string(),
            Error::HttpStatus(code) => http_status_description(*code),
            Error::SerializationFailed(_) => "JSON Serialization Failed".to_string(),
            Error::SomethingWentWrong => SOMETHING_WENT_WRONG.to_string(),
            Error::Decode { message, .. } => message.clone(),
            Error::Network(e) => e.to_string(),
            Error::InvalidHeader(message) => message.clone(),
        }
    }

    /// The reduced form of this error.
    pub fn showable(&self) -> ShowableError {
        match self {
            Error::HttpStatus(code) => ShowableError::HttpStatus(*code),
            _ => ShowableError::SomethingWentWrong,
        }
    }

    /// The description to display in `mode`.
    ///
    /// ```
    /// use appservices::{DisplayMode, Error};
    ///
    /// let err = Error::SerializationFailed("key must be a string".to_string());
    /// assert_eq!(err.showable_description(DisplayMode::Release), "Something went wrong!");
    /// assert_eq!(err.showable_description(DisplayMode::Developer), "JSON Serialization Failed");
    /// ```
    pub fn showable_description(&self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::Developer => self.error_description(),
            DisplayMode::Release => self.showable().description(),
        }
    }
}
