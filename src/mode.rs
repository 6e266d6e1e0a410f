use std::fmt;

/// Which declaration of the static tables this build carries. Chosen by the `synthesis` cargo
/// feature before compilation; nothing branches on it at runtime to pick table contents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuildMode {
    /// Literal values compiled in for numeric simulation
    Simulation,
    /// Zeroed tables, contents supplied by an external synthesis front end
    Synthesis,
}

impl BuildMode {
    #[cfg(not(feature = "synthesis"))]
    pub const CURRENT: BuildMode = BuildMode::Simulation;
    #[cfg(feature = "synthesis")]
    pub const CURRENT: BuildMode = BuildMode::Synthesis;

    pub const fn is_populated(self) -> bool {
        matches!(self, BuildMode::Simulation)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Simulation => write!(f, "simulation"),
            BuildMode::Synthesis => write!(f, "synthesis"),
        }
    }
}
