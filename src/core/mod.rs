pub mod birth_date;
pub mod catalog;
pub mod contact;
pub mod intake;
pub mod postal;
pub mod registry;
pub mod suggest;

pub use crate::domain::model::{FieldId, FieldIssue, IntakeForm};
pub use crate::domain::ports::{CandidateSource, ConfigProvider};
pub use crate::utils::error::Result;
