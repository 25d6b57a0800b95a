use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Kind of failure, used to pick a notification title and treatment
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    StrumDisplay,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ErrorCategory {
    ClientError,
    ServerError,
    NetworkError,
    UnknownError,
}

impl ErrorCategory {
    /// Fixed category key (`clientError`, `serverError`, ...)
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Message key of the localized title, e.g. `errors.titles.networkError`
    pub fn title_key(&self) -> String {
        format!("errors.titles.{}", self.as_str())
    }
}
