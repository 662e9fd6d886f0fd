use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::common::config::ShellConfigError;
use crate::numerics::combinatorics::CombinatoricsError;
use crate::numerics::normalization::NormalizationError;
use crate::shell::ShellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GbasisErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl GbasisErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GbasisError {
    category: GbasisErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl GbasisError {
    pub fn new(
        category: GbasisErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            GbasisErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(GbasisErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(GbasisErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(GbasisErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> GbasisErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for GbasisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for GbasisError {}

impl From<CombinatoricsError> for GbasisError {
    fn from(error: CombinatoricsError) -> Self {
        match error {
            CombinatoricsError::InvalidBinomialArguments { .. } => {
                Self::input_validation("INPUT.BINOMIAL_ARGS", error.to_string())
            }
            CombinatoricsError::Overflow { .. } => {
                Self::computation("RUN.INTEGER_OVERFLOW", error.to_string())
            }
        }
    }
}

impl From<ShellError> for GbasisError {
    fn from(error: ShellError) -> Self {
        match error {
            ShellError::Overflow { .. } => {
                Self::computation("RUN.INTEGER_OVERFLOW", error.to_string())
            }
            ShellError::Combinatorics(inner) => inner.into(),
            ShellError::NegativeAngularMomentum(_) => {
                Self::input_validation("INPUT.ANGULAR_MOMENTUM", error.to_string())
            }
            ShellError::InvalidShellType(_)
            | ShellError::ExceedsMaxShellType { .. }
            | ShellError::UnknownLabel { .. }
            | ShellError::NoLabel(_) => Self::input_validation("INPUT.SHELL_TYPE", error.to_string()),
        }
    }
}

impl From<NormalizationError> for GbasisError {
    fn from(error: NormalizationError) -> Self {
        match error {
            NormalizationError::InvalidExponent { .. } => {
                Self::input_validation("INPUT.EXPONENT", error.to_string())
            }
            NormalizationError::NegativeAngularMomentum { .. } => {
                Self::input_validation("INPUT.ANGULAR_MOMENTUM", error.to_string())
            }
            NormalizationError::Combinatorics(inner) => inner.into(),
        }
    }
}

impl From<ShellConfigError> for GbasisError {
    fn from(error: ShellConfigError) -> Self {
        match error {
            ShellConfigError::Read { .. } => Self::io_system("IO.SHELL_CONFIG", error.to_string()),
            ShellConfigError::Parse { .. }
            | ShellConfigError::NegativeMaxShellType { .. }
            | ShellConfigError::MaxShellTypeAboveSupported { .. } => {
                Self::input_validation("INPUT.SHELL_CONFIG", error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GbasisError, GbasisErrorCategory};
    use crate::common::config::ShellConfigError;
    use crate::numerics::combinatorics::CombinatoricsError;
    use crate::shell::ShellError;

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (
                GbasisErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (GbasisErrorCategory::IoSystemError, 3, "IoSystemError"),
            (GbasisErrorCategory::ComputationError, 4, "ComputationError"),
            (GbasisErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, name) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), name);
        }
    }

    #[test]
    fn fatal_error_renders_diagnostic_lines() {
        let error = GbasisError::input_validation("INPUT.SHELL_TYPE", "shell type -1 is invalid");

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.SHELL_TYPE] shell type -1 is invalid"
        );
        assert_eq!(error.fatal_exit_line(), "FATAL EXIT CODE: 2");

        let internal = GbasisError::internal("SYS.CLI", "failed to render output");
        assert_eq!(internal.exit_code(), 5);
        assert_eq!(
            internal.diagnostic_line(),
            "ERROR: [SYS.CLI] failed to render output"
        );
    }

    #[test]
    fn module_errors_map_to_categories() {
        let overflow: GbasisError = CombinatoricsError::Overflow {
            operation: "double_factorial",
        }
        .into();
        assert_eq!(overflow.category(), GbasisErrorCategory::ComputationError);
        assert_eq!(overflow.placeholder(), "RUN.INTEGER_OVERFLOW");

        let invalid: GbasisError = ShellError::InvalidShellType(-1).into();
        assert_eq!(invalid.category(), GbasisErrorCategory::InputValidationError);
        assert_eq!(invalid.exit_code(), 2);

        let nested: GbasisError =
            ShellError::Combinatorics(CombinatoricsError::InvalidBinomialArguments { n: 1, m: 2 })
                .into();
        assert_eq!(nested.placeholder(), "INPUT.BINOMIAL_ARGS");

        let negative: GbasisError = ShellError::NegativeAngularMomentum(-2).into();
        assert_eq!(negative.placeholder(), "INPUT.ANGULAR_MOMENTUM");
        assert_eq!(negative.exit_code(), 2);

        let oversized: GbasisError = ShellConfigError::MaxShellTypeAboveSupported {
            value: 9,
            supported: 7,
        }
        .into();
        assert_eq!(oversized.placeholder(), "INPUT.SHELL_CONFIG");
        assert_eq!(oversized.exit_code(), 2);
    }
}
