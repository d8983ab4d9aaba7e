/// Grades at or above this value pass. Display only; the backend does not enforce it.
pub const PASSING_THRESHOLD: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeStatus {
    Passing,
    Failing,
}

impl GradeStatus {
    pub fn of(value: f64) -> Self {
        if value >= PASSING_THRESHOLD {
            Self::Passing
        } else {
            Self::Failing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Passing => "Aprobado",
            Self::Failing => "Reprobado",
        }
    }

    /// Colour family used for badges and averages.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Passing => "green",
            Self::Failing => "red",
        }
    }

    pub fn is_passing(self) -> bool {
        self == Self::Passing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive_on_the_pass_side() {
        assert_eq!(GradeStatus::of(3.5).label(), "Aprobado");
        assert_eq!(GradeStatus::of(3.49).label(), "Reprobado");
        assert!(GradeStatus::of(10.0).is_passing());
        assert_eq!(GradeStatus::of(0.0).tone(), "red");
    }
}
