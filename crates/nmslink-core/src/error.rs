use thiserror::Error;

/// Errors from the fetch stage.
///
/// Join and naming are pure and cannot fail; everything that can go wrong
/// happens while pulling the three tables.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A fetch failed; `resource` names the table being pulled.
    #[error("failed to fetch {resource} from LibreNMS: {source}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: nmslink_api::Error,
    },
}

impl CoreError {
    /// The resource that was being fetched when the error occurred.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Fetch { resource, .. } => resource,
        }
    }

    /// True when the instance answered but reported a non-"ok" status,
    /// as opposed to a transport or decoding problem.
    pub fn is_api_failure(&self) -> bool {
        match self {
            Self::Fetch { source, .. } => source.is_api_failure(),
        }
    }
}
