//! Blog post loading and markdown text helpers.
//!
//! Posts live in a directory of markdown files with TOML front matter
//! fenced by `+++` lines:
//!
//! ```text
//! posts/
//! ├── 010-spring-gutter-checklist.md   # numbered = explicit order
//! ├── 020-tankless-vs-tank.md
//! └── frozen-pipes.md                  # unnumbered = after numbered, by name
//! ```
//!
//! ```markdown
//! +++
//! title = "Spring Gutter Checklist"
//! description = "Five things to check before the April rains."
//! tags = ["gutters", "maintenance"]
//! publish_date = "2024-03-01"
//! +++
//!
//! # Spring Gutter Checklist
//! ...
//! ```
//!
//! The slug is the file stem with any `NNN-` prefix stripped; `id` defaults
//! to the slug and must be unique. Only the top level of the directory is
//! read. Load order is the collection order the related-post ranker uses
//! for tie-breaks, so it is fully determined by file names.

use crate::types::BlogPost;
use pulldown_cmark::{Event, Parser, TagEnd};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

const FRONT_MATTER_FENCE: &str = "+++";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid front matter in {0}: {1}")]
    FrontMatter(PathBuf, toml::de::Error),
    #[error("Missing +++ front matter in {0}")]
    MissingFrontMatter(PathBuf),
    #[error("Duplicate post id '{id}' in {first} and {second}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    id: Option<String>,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    publish_date: String,
    modified_date: Option<String>,
    image: Option<String>,
}

/// Load every `*.md` post directly inside `dir`, in collection order.
///
/// Subdirectories are not descended into. Two posts resolving to the same
/// `id` are an error, since the ranker identifies the reference post by it.
pub fn load_posts(dir: &Path) -> Result<Vec<BlogPost>, ContentError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut keyed = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_dir() {
            log::debug!("skipping subdirectory {}", path.display());
            continue;
        }
        let is_markdown = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !entry.file_type().is_file() || !is_markdown {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let (order, slug) = split_order_prefix(&stem);
        let content = fs::read_to_string(path)?;
        let post = parse_post(path, &slug, &content)?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        keyed.push(((order, stem, file_name), path.to_path_buf(), post));
    }

    keyed.sort_by(|(a, _, _), (b, _, _)| a.cmp(b));

    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    for (_, path, post) in &keyed {
        if let Some(first) = seen.insert(post.id.clone(), path.clone()) {
            return Err(ContentError::DuplicateId {
                id: post.id.clone(),
                first,
                second: path.clone(),
            });
        }
    }

    log::debug!("loaded {} posts from {}", keyed.len(), dir.display());
    Ok(keyed.into_iter().map(|(_, _, post)| post).collect())
}

/// Split `"010-my-post"` into `(10, "my-post")`. Unnumbered stems sort last.
fn split_order_prefix(stem: &str) -> (u32, String) {
    match stem.split_once('-') {
        Some((prefix, rest)) if !rest.is_empty() => match prefix.parse::<u32>() {
            Ok(num) => (num, rest.to_string()),
            Err(_) => (u32::MAX, stem.to_string()),
        },
        _ => (u32::MAX, stem.to_string()),
    }
}

/// Parse one post file. `path` is only used for error messages.
pub fn parse_post(path: &Path, slug: &str, content: &str) -> Result<BlogPost, ContentError> {
    let (front, body) = split_front_matter(content)
        .ok_or_else(|| ContentError::MissingFrontMatter(path.to_path_buf()))?;
    let meta: FrontMatter =
        toml::from_str(front).map_err(|e| ContentError::FrontMatter(path.to_path_buf(), e))?;

    if meta.tags.is_empty() {
        log::warn!("{} has no tags; it will only surface as a filler related post", path.display());
    }

    Ok(BlogPost {
        id: meta.id.unwrap_or_else(|| slug.to_string()),
        slug: slug.to_string(),
        title: meta.title,
        description: meta.description,
        tags: meta.tags,
        publish_date: meta.publish_date,
        modified_date: meta.modified_date,
        image: meta.image,
        body: body.trim_start().to_string(),
    })
}

/// Split `+++\n<toml>\n+++\n<body>` into its two halves.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.trim_start_matches('\u{feff}');
    let rest = rest.strip_prefix(FRONT_MATTER_FENCE)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_FENCE {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Flatten markdown to plain text: markup dropped, blocks separated by
/// newlines, soft and hard breaks as spaces.
pub fn markdown_to_plain_text(markdown: &str) -> String {
    let mut text = String::with_capacity(markdown.len());
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
            ) => {
                if !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }
    text.trim().to_string()
}

/// Whitespace-separated word count of the plain text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
