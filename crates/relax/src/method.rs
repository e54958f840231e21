use std::{convert::Infallible, fmt, str::FromStr};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The relaxation scheme used by [`crate::solve`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Gauss-Jacobi, every pass reads only the previous iterate.
    Jacobi,
    /// Gauss-Seidel, every pass updates the iterate in place.
    #[default]
    Seidel,
}

impl Method {
    /// Names accepted for [`Method::Jacobi`]. Anything else selects [`Method::Seidel`].
    pub const JACOBI_ALIASES: [&'static str; 3] = ["jacobi", "gauss jacobi", "gauss-jacobi"];
}

impl From<&str> for Method {
    /// Case and surrounding whitespace are ignored.
    fn from(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        if Self::JACOBI_ALIASES.contains(&name.as_str()) {
            Method::Jacobi
        } else {
            Method::Seidel
        }
    }
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Method::from(s))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Jacobi => write!(f, "Gauss-Jacobi"),
            Method::Seidel => write!(f, "Gauss-Seidel"),
        }
    }
}
