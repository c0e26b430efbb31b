use crate::error::*;
use crate::models::*;

use crate::db::*;

impl CommentStore for Tables {
  fn find_comment(&self, id: CommentId) -> Result<Option<ArticleComment>> {
    Ok(self.comments.get(&id).cloned())
  }

  fn insert_comment(&mut self, comment: NewComment) -> Result<ArticleComment> {
    if !self.articles.contains_key(&comment.article_id) {
      return Err(Error::not_found("article", comment.article_id));
    }
    self.last_comment_id += 1;
    let comment = ArticleComment {
      id: self.last_comment_id,
      article_id: comment.article_id,
      user_id: comment.user_id,
      content: comment.content,
      audit: comment.audit,
    };
    self.comments.insert(comment.id, comment.clone());
    Ok(comment)
  }

  fn save_comment(&mut self, comment: &ArticleComment) -> Result<()> {
    match self.comments.get_mut(&comment.id) {
      Some(row) => {
        *row = comment.clone();
        Ok(())
      },
      None => Err(Error::not_found("comment", comment.id)),
    }
  }

  fn delete_comment(&mut self, id: CommentId) -> Result<()> {
    match self.comments.remove(&id) {
      Some(_) => Ok(()),
      None => Err(Error::not_found("comment", id)),
    }
  }

  fn comments_by_article(&self, article_id: ArticleId) -> Result<Vec<ArticleComment>> {
    let mut rows: Vec<ArticleComment> = self.comments.values()
      .filter(|c| c.article_id == article_id)
      .cloned()
      .collect();
    rows.sort_by(|a, b| {
      b.audit.created_at.cmp(&a.audit.created_at).then_with(|| b.id.cmp(&a.id))
    });
    Ok(rows)
  }

  fn delete_comments_by_article(&mut self, article_id: ArticleId) -> Result<u64> {
    let before = self.comments.len();
    self.comments.retain(|_, c| c.article_id != article_id);
    Ok((before - self.comments.len()) as u64)
  }
}
