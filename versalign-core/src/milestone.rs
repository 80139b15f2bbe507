//! Milestone nesting

use crate::error::{CoreError, Result};
use crate::types::{MilestoneNode, VerseObject};

/// Fold milestones, outermost first, into a single chain.
///
/// Each milestone becomes the sole child of the one before it. The innermost
/// milestone keeps its own children, which is where callers place the
/// aligned words.
pub fn nest(milestones: &[MilestoneNode]) -> Result<MilestoneNode> {
    let mut chain = milestones.iter().rev();
    let mut nested = chain.next().cloned().ok_or(CoreError::EmptyMilestoneChain)?;
    for outer in chain {
        nested = MilestoneNode {
            children: vec![VerseObject::Milestone(nested)],
            ..outer.clone()
        };
    }
    Ok(nested)
}
