pub mod audit;
pub mod user;
pub mod article;
pub mod hashtag;
pub mod comment;
pub mod page;
pub mod search;
pub use self::{
  audit::*,
  user::*,
  article::*,
  hashtag::*,
  comment::*,
  page::*,
  search::*,
};
