use crate::models::Event;

use super::{attr, format_date, format_time, layout, text, Notice, Page};

pub fn render_events_page(events: &[Event], notices: &[Notice]) -> String {
    let mut content = String::from(
        "<h1>Upcoming Events</h1>\n<p>Browse our events and book your tickets now!</p>\n",
    );
    if events.is_empty() {
        content.push_str(
            &Notice::Info(
                "There are no upcoming events at the moment. Please check back later!".to_string(),
            )
            .render(),
        );
    } else {
        content.push_str(r#"<div class="cards">"#);
        for event in events {
            content.push_str(&render_card(event));
        }
        content.push_str("</div>");
    }
    layout(Page::Events, "Events", notices, &content)
}

fn render_card(event: &Event) -> String {
    let description = match &event.description {
        Some(about) => format!("<p><strong>About:</strong> {}</p>", text(about)),
        None => String::new(),
    };
    format!(
        r#"<div class="card" id="event-{id}">
<h3>{name}</h3>
<p><strong>Venue:</strong> {venue}</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>Time:</strong> {time}</p>
{description}
<details>
<summary>Book Your Ticket</summary>
<form method="post" action="/events/book">
<input type="hidden" name="event_name" value="{event_name}">
<label>Your Name <input type="text" name="user_name" required></label>
<label>Your Phone Number <input type="tel" name="user_phone" required></label>
<button type="submit">Confirm Booking</button>
</form>
</details>
</div>
"#,
        id = event.id,
        name = text(&event.name),
        venue = text(&event.venue),
        date = format_date(event.date),
        time = format_time(event.time),
        description = description,
        event_name = attr(&event.name),
    )
}
