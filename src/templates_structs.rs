// Template context structures for Askama templates.

use askama::Template;

/// The presentation shell page. All deck data is fetched client-side, so
/// there is nothing to interpolate.
#[derive(Template)]
#[template(path = "index.html")]
pub struct PresentationTemplate;
