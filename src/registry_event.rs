/// Events emitted by a registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
///
/// # Examples
///
/// ```rust
/// use once_instance::RegistryEvent;
///
/// let event = RegistryEvent::Build { type_name: "i32" };
/// assert_eq!(event.to_string(), "build { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    /// No instance existed; the type was built and cached.
    Build {
        /// The type name of the constructed value (e.g., "my_app::Config")
        type_name: &'static str,
    },

    /// An instance already existed and was returned; the call's arguments were ignored.
    Reuse {
        /// The type name of the cached value that was returned
        type_name: &'static str,
    },

    /// The first construction attempt failed; nothing was cached.
    BuildFailed {
        /// The type name whose build returned an error
        type_name: &'static str,
    },

    /// A concurrent caller cached its instance first; the freshly built one was dropped.
    Discard {
        /// The type name of the value that was built and dropped
        type_name: &'static str,
    },

    /// An existing instance was requested without constructing.
    Get {
        /// The type name that was requested
        type_name: &'static str,
        /// Whether an instance was found
        found: bool,
    },

    /// A type existence check was performed.
    Contains {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether an instance exists in the registry
        found: bool,
    },

    /// The registry was cleared.
    Clear {},
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Build { type_name } => write!(f, "build {{ type_name: {type_name} }}"),
            RegistryEvent::Reuse { type_name } => write!(f, "reuse {{ type_name: {type_name} }}"),
            RegistryEvent::BuildFailed { type_name } => {
                write!(f, "build_failed {{ type_name: {type_name} }}")
            }
            RegistryEvent::Discard { type_name } => {
                write!(f, "discard {{ type_name: {type_name} }}")
            }
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {type_name}, found: {found} }}")
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(f, "contains {{ type_name: {type_name}, found: {found} }}")
            }
            RegistryEvent::Clear {} => write!(f, "Clearing the Registry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_event_display() {
        let event = RegistryEvent::Reuse { type_name: "i32" };
        assert_eq!(event.to_string(), "reuse { type_name: i32 }");

        let event = RegistryEvent::BuildFailed { type_name: "Config" };
        assert_eq!(event.to_string(), "build_failed { type_name: Config }");

        let event = RegistryEvent::Get {
            type_name: "String",
            found: true,
        };
        assert_eq!(event.to_string(), "get { type_name: String, found: true }");

        let event = RegistryEvent::Contains {
            type_name: "u8",
            found: false,
        };
        assert_eq!(
            event.to_string(),
            "contains { type_name: u8, found: false }"
        );
    }

    #[test]
    fn test_registry_event_clone() {
        let event = RegistryEvent::Discard { type_name: "i32" };
        assert_eq!(event.clone(), event);
    }
}
