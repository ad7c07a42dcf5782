use std::fmt::{Display, Formatter};

/// A parameter of a packing run is out of its valid domain.
///
/// Raised before any placement is attempted and carried inside an [`anyhow::Error`].
/// Use [`anyhow::Error::downcast_ref`] to distinguish it from other failures.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidParameter {
    pub parameter: &'static str,
    pub reason: String,
}

impl InvalidParameter {
    pub fn new(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self {
            parameter,
            reason: reason.into(),
        }
    }
}

impl Display for InvalidParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid parameter `{}`: {}", self.parameter, self.reason)
    }
}

impl std::error::Error for InvalidParameter {}

/// Returns early with an [`InvalidParameter`] wrapped in an [`anyhow::Error`] if the condition does not hold.
#[macro_export]
macro_rules! ensure_param {
    ($cond:expr, $param:literal, $($arg:tt)+) => {
        if !$cond {
            return Err(::anyhow::Error::new($crate::InvalidParameter::new(
                $param,
                format!($($arg)+),
            )));
        }
    };
}
