//! Home page.

use super::shell::Shell;
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub shell: Shell,
}
