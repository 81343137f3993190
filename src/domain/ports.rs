use crate::utils::error::Result;
use std::path::Path;

/// Where the read-only candidate lists come from.
pub trait CandidateSource {
    fn load_candidates(&self, path: &Path) -> Result<Vec<String>>;
}

/// Settings the validator needs from whatever configuration drove it.
pub trait ConfigProvider {
    fn max_birth_age_years(&self) -> u32;
}
