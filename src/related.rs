//! Related-post ranking by shared tags.
//!
//! A candidate's score is the number of distinct tags it shares with the
//! reference post. Candidates are ordered by score, highest first; posts
//! with equal scores keep their order in the collection. Zero-score posts
//! are still eligible, so a post with few tag matches is padded out with
//! the next posts in collection order.

use crate::types::BlogPost;
use std::collections::HashSet;

/// Number of related posts shown when the caller doesn't choose.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// A candidate post and its overlap with the reference post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatednessScore<'a> {
    pub post: &'a BlogPost,
    pub score: usize,
}

/// Score every post except the reference (matched by `id`), in collection
/// order.
pub fn score_related_posts<'a>(
    reference: &BlogPost,
    posts: &'a [BlogPost],
) -> Vec<RelatednessScore<'a>> {
    let reference_tags: HashSet<&str> = reference.tags.iter().map(String::as_str).collect();
    posts
        .iter()
        .filter(|post| post.id != reference.id)
        .map(|post| {
            let tags: HashSet<&str> = post.tags.iter().map(String::as_str).collect();
            RelatednessScore {
                post,
                score: tags.intersection(&reference_tags).count(),
            }
        })
        .collect()
}

/// The `limit` posts most related to `reference`.
///
/// Returns fewer than `limit` when the collection has fewer other posts.
pub fn get_related_blog_posts<'a>(
    reference: &BlogPost,
    posts: &'a [BlogPost],
    limit: usize,
) -> Vec<&'a BlogPost> {
    rank_related_posts(reference, posts, limit)
        .into_iter()
        .map(|scored| scored.post)
        .collect()
}

/// Like [`get_related_blog_posts`], keeping the scores.
pub fn rank_related_posts<'a>(
    reference: &BlogPost,
    posts: &'a [BlogPost],
    limit: usize,
) -> Vec<RelatednessScore<'a>> {
    let mut scored = score_related_posts(reference, posts);
    // sort_by is stable: ties stay in collection order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
