//! Firewall resources.

use tracing::info;

use crate::answers::AnswerSource;
use crate::error::IacResult;

/// Firewall rules are not generated yet; nothing is asked or written.
pub fn generate(_answers: &mut dyn AnswerSource) -> IacResult<usize> {
    info!("Firewall generation is not implemented, nothing written");
    Ok(0)
}
