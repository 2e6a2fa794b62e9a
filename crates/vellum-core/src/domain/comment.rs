use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment on a post, optionally carrying one level of nested replies.
/// Replies never have replies of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: Uuid,
    pub user_name: String,
    pub user_avatar: String,
    pub user_email: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub likes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<Comment>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveCommentError {
    /// The comment id is nowhere in the tree.
    NotFound,
    /// The comment exists but the acting user has no right to delete it.
    Forbidden,
}

/// Remove a comment from a tree, enforcing the two-party deletion rule:
/// a top-level comment may be deleted by its author; a reply by either the
/// reply's author or the parent comment's author. Deleting a top-level
/// comment takes its replies with it. Sibling comments are untouched and
/// stored order is preserved.
pub fn remove_comment(
    comments: Vec<Comment>,
    comment_id: &str,
    acting_email: &str,
) -> Result<Vec<Comment>, RemoveCommentError> {
    let mut found = false;
    let mut forbidden = false;
    let mut kept: Vec<Comment> = Vec::with_capacity(comments.len());

    for mut comment in comments {
        if comment.id == comment_id {
            found = true;
            if comment.user_email.eq_ignore_ascii_case(acting_email) {
                continue; // drop it, replies included
            }
            forbidden = true;
            kept.push(comment);
            continue;
        }

        if let Some(replies) = comment.replies.take() {
            let mut kept_replies: Vec<Comment> = Vec::with_capacity(replies.len());
            for reply in replies {
                if reply.id == comment_id {
                    found = true;
                    let allowed = reply.user_email.eq_ignore_ascii_case(acting_email)
                        || comment.user_email.eq_ignore_ascii_case(acting_email);
                    if allowed {
                        continue;
                    }
                    forbidden = true;
                }
                kept_replies.push(reply);
            }
            comment.replies = Some(kept_replies);
        }

        kept.push(comment);
    }

    if !found {
        return Err(RemoveCommentError::NotFound);
    }
    if forbidden {
        return Err(RemoveCommentError::Forbidden);
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, email: &str, replies: Option<Vec<Comment>>) -> Comment {
        Comment {
            id: id.to_string(),
            post_id: Uuid::nil(),
            user_name: "Someone".to_string(),
            user_avatar: String::new(),
            user_email: email.to_string(),
            comment: "text".to_string(),
            created_at: Utc::now(),
            updated_at: None,
            likes: 0,
            replies,
        }
    }

    fn tree() -> Vec<Comment> {
        vec![
            comment("c1", "alex@example.com", None),
            comment(
                "c2",
                "sarah@example.com",
                Some(vec![comment("c2r1", "john@example.com", None)]),
            ),
            comment("c3", "mike@example.com", None),
        ]
    }

    #[test]
    fn test_deleting_top_level_removes_its_replies_only() {
        let kept = remove_comment(tree(), "c2", "sarah@example.com").unwrap();
        let ids: Vec<&str> = kept.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn test_author_can_delete_own_reply() {
        let kept = remove_comment(tree(), "c2r1", "john@example.com").unwrap();
        assert_eq!(kept[1].replies.as_ref().unwrap().len(), 0);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_parent_author_can_delete_reply() {
        let kept = remove_comment(tree(), "c2r1", "sarah@example.com").unwrap();
        assert_eq!(kept[1].replies.as_ref().unwrap().len(), 0);
    }

    #[test]
    fn test_stranger_cannot_delete() {
        assert_eq!(
            remove_comment(tree(), "c1", "mallory@example.com"),
            Err(RemoveCommentError::Forbidden)
        );
        assert_eq!(
            remove_comment(tree(), "c2r1", "mallory@example.com"),
            Err(RemoveCommentError::Forbidden)
        );
    }

    #[test]
    fn test_missing_comment_is_not_found() {
        assert_eq!(
            remove_comment(tree(), "nope", "alex@example.com"),
            Err(RemoveCommentError::NotFound)
        );
    }

    #[test]
    fn test_email_comparison_ignores_case() {
        let kept = remove_comment(tree(), "c1", "Alex@Example.COM").unwrap();
        assert_eq!(kept.len(), 2);
    }
}
