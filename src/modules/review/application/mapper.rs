use super::dto::{ReviewCreateRequest, ReviewRequest, ReviewUpdateRequest};
use crate::modules::review::domain::ReviewDraft;

/// Request to draft conversions. Attaching a draft to a movie is the service's job.
pub struct ReviewMapper;

impl ReviewMapper {
    pub fn to_draft(request: &ReviewRequest) -> ReviewDraft {
        ReviewDraft::new(
            request.rating,
            request.comment.clone(),
            request.reviewer_name.clone(),
        )
    }

    pub fn create_to_draft(request: &ReviewCreateRequest) -> ReviewDraft {
        ReviewDraft::new(
            request.rating,
            request.comment.clone(),
            request.reviewer_name.clone(),
        )
    }

    pub fn update_to_draft(request: &ReviewUpdateRequest) -> ReviewDraft {
        ReviewDraft::new(
            request.rating,
            request.comment.clone(),
            request.reviewer_name.clone(),
        )
    }
}
