use serde::Serialize;

/// Suffixes recognized as local image slides. Matching is case-sensitive,
/// against the raw first line.
const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".webp"];

/// One unit of presentation content, classified from the first line of its
/// source file.
///
/// Serializes with a lowercase `type` tag. `title` is always `null` for
/// section and image slides; the field is kept so every slide in the payload
/// has the same shape for the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    Section {
        content: String,
        title: Option<String>,
    },
    Image {
        content: String,
        title: Option<String>,
        is_remote_image: bool,
    },
    Content {
        content: String,
        title: String,
    },
}

fn is_remote(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}

/// Classify pre-trimmed slide lines into a [`Slide`], or `None` when the
/// input is empty or matches no known shape.
///
/// The first matching rule wins, checked against the first line in order:
/// 1. exactly `SECTION`: section divider, second line is the label
/// 2. URL prefix or image-extension suffix: image slide
/// 3. leading `#`: titled content slide, remaining lines are the body
pub fn parse(lines: &[String]) -> Option<Slide> {
    let first = lines.first()?;

    if first == "SECTION" {
        return Some(Slide::Section {
            content: lines.get(1).cloned().unwrap_or_default(),
            title: None,
        });
    }

    if is_remote(first) || IMAGE_EXTENSIONS.iter().any(|ext| first.ends_with(ext)) {
        return Some(Slide::Image {
            content: first.clone(),
            title: None,
            is_remote_image: is_remote(first),
        });
    }

    if first.starts_with('#') {
        return Some(Slide::Content {
            content: lines[1..].join("\n"),
            title: first
                .trim_start_matches(|c: char| c == '#' || c.is_whitespace())
                .trim_end()
                .to_string(),
        });
    }

    None
}
