//! Article normalization: raw, inconsistently shaped news records into [`Article`]s.

mod model;
mod normalize;

pub use model::{
    Article, DATE_FORMAT_ERROR, NO_CONTENT_TYPE, NO_DATE, NO_LINK, NO_SUMMARY, NO_TITLE, STORY,
};
pub use normalize::{format_published, normalize};
