use std::path::Path;

use super::ContentError;
use crate::model::{ImagePosition, StorySection};
use crate::relay::page::escape_html;

/// Standalone HTML page for the personal story, built from each section's
/// pre-rendered `html`. Sections keep their loaded order.
pub fn story_document(author: &str, sections: &[StorySection]) -> String {
    let mut body = String::new();
    for section in sections {
        let side = match section.image_position {
            ImagePosition::Left => "left",
            ImagePosition::Right => "right",
        };
        body.push_str(&format!("<section id=\"{}\">\n", escape_html(&section.id)));
        if let Some(image) = &section.image {
            body.push_str(&format!(
                "<img class=\"{side}\" src=\"{}\" alt=\"\">\n",
                escape_html(image)
            ));
        }
        body.push_str(&section.html);
        body.push_str("</section>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  section {{ overflow: hidden; margin-bottom: 2em; }}
  img {{ max-width: 40%; margin: 0 1em 1em 0; }}
  img.left {{ float: left; }}
  img.right {{ float: right; margin: 0 0 1em 1em; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}</body>
</html>
"#,
        title = escape_html(author),
        body = body,
    )
}

/// Write the story page to `path`. Returns the number of sections written.
pub fn export_story(author: &str, sections: &[StorySection], path: &Path) -> Result<usize, ContentError> {
    std::fs::write(path, story_document(author, sections)).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sections.len())
}
