pub mod admin;
pub mod events;

use chrono::{NaiveDate, NaiveTime};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Events,
    Admin,
}

/// One-shot feedback shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "success",
            Notice::Info(_) => "info",
            Notice::Warning(_) => "warning",
            Notice::Error(_) => "error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Success(t) | Notice::Info(t) | Notice::Warning(t) | Notice::Error(t) => t,
        }
    }

    pub fn render(&self) -> String {
        format!(r#"<div class="notice {}">{}</div>"#, self.class(), text(self.text()))
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        if err.is_warning() {
            Notice::Warning(err.to_string())
        } else {
            Notice::Error(err.to_string())
        }
    }
}

pub fn text(raw: &str) -> String {
    encode_text(raw).into_owned()
}

pub fn attr(raw: &str) -> String {
    encode_double_quoted_attribute(raw).into_owned()
}

/// e.g. `Monday, 01 December 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

/// e.g. `07:00 PM`
pub fn format_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

pub fn render_notices(notices: &[Notice]) -> String {
    notices.iter().map(Notice::render).collect()
}

const STYLE: &str = "
body { margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }
nav { width: 12rem; padding: 1rem; background: #f0f2f6; }
nav a { display: block; padding: .4rem 0; color: #262730; }
nav a.active { font-weight: bold; }
main { flex: 1; padding: 1.5rem 2rem; }
.cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.card { border: 1px solid #ddd; border-radius: .5rem; padding: 1rem; }
.notice { padding: .6rem 1rem; border-radius: .4rem; margin-bottom: 1rem; }
.notice.success { background: #dff5e3; }
.notice.info { background: #e1ecfb; }
.notice.warning { background: #fff4d6; }
.notice.error { background: #fde2e1; }
table { border-collapse: collapse; margin-bottom: 1rem; }
th, td { border: 1px solid #ddd; padding: .3rem .6rem; text-align: left; }
form { margin-bottom: 1rem; }
label { display: block; margin-top: .4rem; }
";

/// Wraps page content in the document shell with the sidebar navigation.
pub fn layout(page: Page, title: &str, notices: &[Notice], content: &str) -> String {
    let link = |target: Page, href: &str, label: &str| {
        let class = if target == page { r#" class="active""# } else { "" };
        format!(r#"<a href="{}"{}>{}</a>"#, href, class, label)
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - EventPro</title>
<style>{style}</style>
</head>
<body>
<nav>
<h2>Navigation</h2>
{events_link}
{admin_link}
</nav>
<main>
{notices}
{content}
</main>
</body>
</html>
"#,
        title = text(title),
        style = STYLE,
        events_link = link(Page::Events, "/events", "Events"),
        admin_link = link(Page::Admin, "/admin", "Admin"),
        notices = render_notices(notices),
        content = content,
    )
}
