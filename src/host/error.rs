use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    BadArgs(String),
    CreateFailed,
    MissingHost(String),
    NotImplemented(String),
}

impl HostError {
    pub fn bad_args(message: &str) -> Self {
        Self::BadArgs(message.to_owned())
    }

    pub fn get_code(&self) -> &'static str {
        match self {
            Self::BadArgs(_) => "bad_args",
            Self::CreateFailed => "create_failed",
            Self::MissingHost(_) => "missing_host",
            Self::NotImplemented(_) => "not_implemented",
        }
    }

    pub fn get_info(&self) -> String {
        match self {
            Self::BadArgs(message) => message.clone(),
            Self::CreateFailed => "Failed to create host window.".to_owned(),
            Self::MissingHost(_) => "Host not found.".to_owned(),
            Self::NotImplemented(method) => format!("Method '{method}' is not implemented."),
        }
    }

    pub fn get_log_level(&self) -> log::Level {
        match self {
            Self::CreateFailed | Self::NotImplemented(_) => log::Level::Warn,
            _ => log::Level::Debug,
        }
    }
}

impl Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHost(id) => write!(f, "{}: {} ({})", self.get_code(), self.get_info(), id),
            _ => write!(f, "{}: {}", self.get_code(), self.get_info()),
        }
    }
}

impl<T> From<HostError> for Result<T, HostError> {
    fn from(value: HostError) -> Self {
        Err(value)
    }
}
