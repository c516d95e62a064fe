use super::dto::MovieRequest;
use crate::modules::movie::domain::MovieDraft;
use crate::modules::review::application::ReviewMapper;
use crate::modules::review::domain::ReviewDraft;

/// Request to draft conversions for the movie aggregate
pub struct MovieMapper;

impl MovieMapper {
    /// Scalar movie fields only; reviews go through [`MovieMapper::review_drafts`]
    pub fn to_draft(request: &MovieRequest) -> MovieDraft {
        MovieDraft::new(
            request.title.clone(),
            request.release_year,
            request.genre.clone(),
            request.director.clone(),
        )
    }

    pub fn review_drafts(request: &MovieRequest) -> Vec<ReviewDraft> {
        request.reviews.iter().map(ReviewMapper::to_draft).collect()
    }
}
