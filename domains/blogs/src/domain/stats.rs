//! Summary statistics over blog lists
//!
//! Pure, side-effect-free reductions over an in-memory slice of blogs.
//! These never run inside the request path. An empty input is never an
//! error: sums yield their identity value and extremum lookups yield
//! `None`.

use crate::domain::entities::Blog;

/// Sum of likes across all blogs; 0 for an empty slice.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| i64::from(blog.likes)).sum()
}

/// The blog with the most likes. Ties go to the earliest blog in input
/// order; `None` for an empty slice.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs
        .iter()
        .reduce(|best, blog| if blog.likes > best.likes { blog } else { best })
}

/// The author with the most blogs. Ties go to the author whose first
/// blog appears earliest; `None` for an empty slice.
pub fn most_blogs(blogs: &[Blog]) -> Option<&str> {
    max_author(group_by_author(blogs, |_| 1))
}

/// The author with the highest summed likes, using the same tie-break
/// as [`most_blogs`]. Authors whose posts all have zero likes still
/// participate with a total of 0.
pub fn most_likes(blogs: &[Blog]) -> Option<&str> {
    max_author(group_by_author(blogs, |blog| i64::from(blog.likes)))
}

/// Group blogs by author in first-appearance order, accumulating a
/// per-blog weight. Blogs without an author group under the empty string.
fn group_by_author<'a>(
    blogs: &'a [Blog],
    weight: impl Fn(&Blog) -> i64,
) -> Vec<(&'a str, i64)> {
    let mut groups: Vec<(&str, i64)> = Vec::new();
    for blog in blogs {
        let author = blog.author.as_deref().unwrap_or("");
        match groups.iter_mut().find(|(name, _)| *name == author) {
            Some((_, total)) => *total += weight(blog),
            None => groups.push((author, weight(blog))),
        }
    }
    groups
}

fn max_author(groups: Vec<(&str, i64)>) -> Option<&str> {
    groups
        .into_iter()
        .reduce(|best, group| if group.1 > best.1 { group } else { best })
        .map(|(author, _)| author)
}
