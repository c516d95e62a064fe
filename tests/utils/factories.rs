/// Test data factories using builder pattern
///
/// Provides convenient methods to create request bodies with sensible defaults
use movie_reviews::modules::movie::application::dto::MovieRequest;
use movie_reviews::modules::review::application::dto::{
    ReviewCreateRequest, ReviewRequest, ReviewUpdateRequest,
};

pub struct MovieRequestFactory {
    title: String,
    release_year: i32,
    genre: String,
    director: String,
    reviews: Vec<ReviewRequest>,
}

impl Default for MovieRequestFactory {
    fn default() -> Self {
        Self {
            title: "Test Movie".to_string(),
            release_year: 2000,
            genre: "Drama".to_string(),
            director: "Test Director".to_string(),
            reviews: Vec::new(),
        }
    }
}

impl MovieRequestFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical example: Inception with a single five-star review
    pub fn inception() -> Self {
        Self::new()
            .title("Inception")
            .release_year(2010)
            .genre("Sci-Fi")
            .director("Christopher Nolan")
            .review(5, "Mind-bending", "Alice")
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn release_year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    pub fn genre(mut self, genre: &str) -> Self {
        self.genre = genre.to_string();
        self
    }

    pub fn director(mut self, director: &str) -> Self {
        self.director = director.to_string();
        self
    }

    pub fn review(mut self, rating: i32, comment: &str, reviewer: &str) -> Self {
        self.reviews.push(ReviewRequest::new(rating, comment, reviewer));
        self
    }

    /// One review per rating, with generated comment and reviewer
    pub fn ratings(mut self, ratings: &[i32]) -> Self {
        for (i, rating) in ratings.iter().enumerate() {
            self.reviews.push(ReviewRequest::new(
                *rating,
                format!("Comment {}", i),
                format!("Reviewer {}", i),
            ));
        }
        self
    }

    pub fn build(self) -> MovieRequest {
        MovieRequest {
            title: self.title,
            release_year: self.release_year,
            genre: self.genre,
            director: self.director,
            reviews: self.reviews,
        }
    }
}

pub fn review_create(movie_id: i64, rating: i32) -> ReviewCreateRequest {
    ReviewCreateRequest {
        movie_id,
        rating,
        comment: "Worth a watch".to_string(),
        reviewer_name: "Jordan".to_string(),
    }
}

pub fn review_update(rating: i32, movie_id: Option<i64>) -> ReviewUpdateRequest {
    ReviewUpdateRequest {
        rating,
        comment: "Changed my mind".to_string(),
        reviewer_name: "Jordan".to_string(),
        movie_id,
    }
}
