pub mod rating;

pub use rating::{Rating, RatingProps};
