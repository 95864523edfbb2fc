use thiserror::Error;

/// Errors raised at the integrator boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The method tag is not one of the recognized integration schemes.
    #[error("invalid method '{0}' (expected explicit, implicit, or symplectic)")]
    InvalidMethod(String),

    /// The step size cannot produce a grid.
    #[error("invalid step size {0} (must be positive and finite)")]
    InvalidStep(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e = SimError::InvalidMethod("Euler".into());
        assert!(e.to_string().contains("'Euler'"));

        let e = SimError::InvalidStep(-0.5);
        assert!(e.to_string().contains("-0.5"));
    }
}
