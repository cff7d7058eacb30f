use crate::clock::ClockTime;
use crate::dom::{Element, Page};
use crate::duration::format_duration;
use crate::handlers::query_timestamp;
use crate::units::admin_clock::{LOCAL_TIME_ID, UPTIME_ID};
use crate::units::data_items::DATA_ITEM_CLASS;
use crate::units::tickup::TICKUP_CLASS;
use crate::units::timeup::TIMEUP_CLASS;
use chrono::{DateTime, TimeZone};

/// Builds the admin dashboard page seeded at `now` with `uptime` seconds.
pub fn dashboard_page<Tz: TimeZone>(now: DateTime<Tz>, uptime: u64) -> Page
where
    Tz::Offset: std::fmt::Display,
{
    let clock = ClockTime::from_time(&now);
    let seed = clock.to_seed();

    Page::new(vec![
        Element::new("span")
            .with_id(LOCAL_TIME_ID)
            .with_attribute("data-time", seed.clone())
            .with_text(clock.to_string()),
        Element::new("span")
            .with_id(UPTIME_ID)
            .with_attribute("data-uptime", uptime.to_string())
            .with_text(format_duration(uptime)),
        Element::new("span")
            .with_id("server-uptime")
            .with_class(DATA_ITEM_CLASS)
            .with_class(TICKUP_CLASS)
            .with_attribute("data-item", "uptime")
            .with_attribute("data-seconds", uptime.to_string())
            .with_text(format_duration(uptime)),
        Element::new("span")
            .with_id("lastquery")
            .with_class(DATA_ITEM_CLASS)
            .with_attribute("data-item", "current-lastquery")
            .with_text(query_timestamp(&now)),
        Element::new("span")
            .with_id("queryago")
            .with_class(DATA_ITEM_CLASS)
            .with_class(TICKUP_CLASS)
            .with_attribute("data-item", "current-queryago")
            .with_attribute("data-seconds", "0")
            .with_text(format_duration(0)),
        Element::new("span")
            .with_id("wallclock")
            .with_class(DATA_ITEM_CLASS)
            .with_class(TIMEUP_CLASS)
            .with_attribute("data-item", LOCAL_TIME_ID)
            .with_attribute("data-time", seed)
            .with_text(clock.to_string()),
    ])
}

/// Fills each `{{id}}` placeholder in one pass over the template, so
/// rendered text is never scanned for placeholders again.
pub fn render_index(page: &Page) -> String {
    let mut html = String::with_capacity(INDEX_HTML.len());
    let mut rest = INDEX_HTML;
    while let Some(start) = rest.find("{{") {
        html.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let id = &after[..end];
        match page.by_id(id) {
            Some(el) => html.push_str(&render_element(el)),
            None => html.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    html.push_str(rest);
    html
}

pub fn render_element(el: &Element) -> String {
    let mut html = format!("<{}", el.tag);
    if let Some(id) = &el.id {
        html.push_str(&format!(" id=\"{}\"", escape(id)));
    }
    if !el.classes.is_empty() {
        html.push_str(&format!(" class=\"{}\"", escape(&el.classes.join(" "))));
    }
    for (name, value) in &el.attributes {
        html.push_str(&format!(" {}=\"{}\"", escape(name), escape(value)));
    }
    html.push_str(&format!(">{}</{}>", escape(&el.text), el.tag));
    html
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Admin Panel</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
    }

    .panel {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 28px;
      padding: 36px;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value span {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent);
    }
  </style>
</head>
<body>
  <main class="panel">
    <div class="stat"><span class="label">Local Time</span><div class="value">{{localtime}}</div></div>
    <div class="stat"><span class="label">Uptime</span><div class="value">{{uptime}}</div></div>
    <div class="stat"><span class="label">Server Uptime</span><div class="value">{{server-uptime}}</div></div>
    <div class="stat"><span class="label">Last Queried</span><div class="value">{{lastquery}} ({{queryago}} ago)</div></div>
    <div class="stat"><span class="label">Wall Clock</span><div class="value">{{wallclock}}</div></div>
  </main>
</body>
</html>
"#;
