pub mod article;
pub mod comment;
pub mod hashtag;
pub mod user;
pub use self::{
  article::*,
  comment::*,
  hashtag::*,
  user::*,
};
