use log::*;

use crate::error::*;
use crate::app::*;
use crate::models::*;
use crate::forms::*;
use crate::util::now;

use crate::db::*;

pub const DEFAULT_MAX_COMMENT_LENGTH: u32 = 500;

pub(crate) fn comment_details<S: UserStore + ?Sized>(store: &S, comment: ArticleComment) -> Result<CommentDetails> {
  let author = store.find_user(&comment.user_id)?
    .map(|user| Profile::from(&user))
    .ok_or_else(|| Error::not_found("user", &comment.user_id))?;
  Ok(CommentDetails {
    id: comment.id,
    article_id: comment.article_id,
    content: comment.content,
    author,
    audit: comment.audit,
  })
}

#[derive(Clone)]
pub struct CommentService {
  db: DbService,
  pub max_length: usize,
}

impl super::Service for CommentService {
  fn load_app_config(&mut self, config: &AppConfig) -> Result<()> {
    self.max_length = config.get_positive("comment.max_length", DEFAULT_MAX_COMMENT_LENGTH)? as usize;
    Ok(())
  }
}

impl CommentService {
  pub fn new(db: DbService) -> CommentService {
    CommentService {
      db,
      max_length: DEFAULT_MAX_COMMENT_LENGTH as usize,
    }
  }

  /// Comments of an article, newest first.
  pub fn comments(&self, article_id: ArticleId) -> Result<CommentList> {
    self.db.read(|tables| {
      let comments = tables.comments_by_article(article_id)?
        .into_iter()
        .map(|comment| comment_details(tables, comment))
        .collect::<Result<Vec<_>>>()?;
      Ok(CommentList {
        comments,
      })
    })
  }

  pub fn save_comment(&self, actor: &Principal, article_id: ArticleId, form: &CreateComment) -> Result<CommentId> {
    validate_text("content", &form.content, self.max_length)?;
    self.db.transaction(|tx| {
      if tx.find_article(article_id)?.is_none() {
        warn!("save comment: article={} not found", article_id);
        return Err(Error::not_found("article", article_id));
      }
      if tx.find_user(&actor.user_id)?.is_none() {
        return Err(Error::not_found("user", &actor.user_id));
      }
      let comment = tx.insert_comment(NewComment {
        article_id,
        user_id: actor.user_id.clone(),
        content: form.content.clone(),
        audit: AuditFields::new(actor, now()),
      })?;
      debug!("save comment: id={}, article={}", comment.id, article_id);
      Ok(comment.id)
    })
  }

  pub fn update_comment(&self, actor: &Principal, comment_id: CommentId, form: &UpdateComment) -> Result<CommentDetails> {
    validate_text("content", &form.content, self.max_length)?;
    self.db.transaction(|tx| {
      let mut comment = self.find_own_comment(&*tx, actor, comment_id)?;
      comment.content = form.content.clone();
      comment.audit.touch(actor, now());
      tx.save_comment(&comment)?;
      comment_details(&*tx, comment)
    })
  }

  pub fn delete_comment(&self, actor: &Principal, comment_id: CommentId) -> Result<()> {
    self.db.transaction(|tx| {
      self.find_own_comment(&*tx, actor, comment_id)?;
      tx.delete_comment(comment_id)
    })
  }

  fn find_own_comment(&self, tables: &Tables, actor: &Principal, comment_id: CommentId) -> Result<ArticleComment> {
    let comment = tables.find_comment(comment_id)?
      .ok_or_else(|| Error::not_found("comment", comment_id))?;
    if !actor.is(&comment.user_id) {
      warn!("comment={}: {} is not the author", comment_id, actor.user_id);
      return Err(Error::forbidden("comment", comment_id, &actor.user_id));
    }
    Ok(comment)
  }
}
