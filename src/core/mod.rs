pub mod digits;
pub mod machine;
pub mod verify;

pub use crate::domain::model::{FiveDigit, Input, NumberReport};
pub use crate::domain::ports::ReportRenderer;
pub use crate::domain::verification::{SuiteReport, VerificationCase};
pub use crate::utils::error::Result;
