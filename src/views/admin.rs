use crate::models::{Booking, EventSummary};

use super::{attr, layout, text, Notice, Page};

/// Everything the dashboard shows, loaded by the handler beforehand.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub username: String,
    pub summaries: Vec<EventSummary>,
    pub selected_event: Option<String>,
    pub bookings: Vec<Booking>,
}

fn mode_switch(signup: bool) -> String {
    let option = |value: &str, label: &str, selected: bool| {
        format!(
            r#"<option value="{}"{}>{}</option>"#,
            value,
            if selected { " selected" } else { "" },
            label
        )
    };
    format!(
        r#"<form method="get" action="/admin">
<label>Login / Sign Up <select name="mode" onchange="this.form.submit()">{}{}</select></label>
<noscript><button type="submit">Go</button></noscript>
</form>
"#,
        option("login", "Login", !signup),
        option("signup", "Sign Up", signup),
    )
}

pub fn render_login(notices: &[Notice]) -> String {
    let content = format!(
        r#"<h1>Admin Panel</h1>
{switch}<h2>Admin Login</h2>
<form method="post" action="/admin/login">
<label>Username <input type="text" name="username"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Login</button>
</form>
"#,
        switch = mode_switch(false),
    );
    layout(Page::Admin, "Admin Panel", notices, &content)
}

pub fn render_signup(notices: &[Notice]) -> String {
    let content = format!(
        r#"<h1>Admin Panel</h1>
{switch}<h2>Create New Admin Account</h2>
<form method="post" action="/admin/signup">
<label>Choose a Username <input type="text" name="username"></label>
<label>Choose a Password <input type="password" name="password"></label>
<button type="submit">Sign Up</button>
</form>
"#,
        switch = mode_switch(true),
    );
    layout(Page::Admin, "Admin Panel", notices, &content)
}

pub fn render_dashboard(view: &DashboardView, notices: &[Notice]) -> String {
    let mut content = String::from("<h1>Admin Panel</h1>\n");
    content.push_str(
        &Notice::Success(format!("You are logged in as an Admin ({}).", view.username)).render(),
    );
    content.push_str("<h2>Admin Dashboard</h2>\n");
    content.push_str(ADD_EVENT_FORM);
    content.push_str("<hr>\n<h2>Manage Events</h2>\n");

    if view.summaries.is_empty() {
        content.push_str(&Notice::Info("No events have been added yet.".to_string()).render());
    } else {
        content.push_str(&events_table(&view.summaries));
        content.push_str(&delete_form(&view.summaries));
        content.push_str("<hr>\n");
        content.push_str(&bookings_section(view));
    }

    content.push_str(
        r#"<form method="post" action="/admin/logout"><button type="submit">Logout</button></form>"#,
    );
    layout(Page::Admin, "Admin Dashboard", notices, &content)
}

const ADD_EVENT_FORM: &str = r#"<details>
<summary>Add New Event</summary>
<form method="post" action="/admin/events">
<label>Event Name <input type="text" name="name"></label>
<label>Event Date <input type="date" name="date"></label>
<label>Event Time <input type="time" name="time"></label>
<label>Venue <input type="text" name="venue"></label>
<label>Description <textarea name="description"></textarea></label>
<button type="submit">Add Event</button>
</form>
</details>
"#;

fn events_table(summaries: &[EventSummary]) -> String {
    let mut table = String::from(
        "<table class=\"events\">\n<tr><th>Event Name</th><th>Date</th><th>Time</th><th>Venue</th><th>Tickets Booked</th></tr>\n",
    );
    for summary in summaries {
        let event = &summary.event;
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            text(&event.name),
            event.date,
            event.time.format("%H:%M"),
            text(&event.venue),
            summary.booking_count
        ));
    }
    table.push_str("</table>\n");
    table
}

fn event_options(summaries: &[EventSummary], selected: Option<&str>) -> String {
    summaries
        .iter()
        .map(|s| {
            let is_selected = selected == Some(s.event.name.as_str());
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                attr(&s.event.name),
                if is_selected { " selected" } else { "" },
                text(&s.event.name)
            )
        })
        .collect()
}

fn delete_form(summaries: &[EventSummary]) -> String {
    format!(
        r#"<h3>Delete an Event</h3>
<form method="post" action="/admin/events/delete">
<label>Select Event to Delete <select name="name">{}</select></label>
<button type="submit">Delete Event</button>
</form>
"#,
        event_options(summaries, None)
    )
}

fn bookings_section(view: &DashboardView) -> String {
    // default to the first event, as the selector would
    let selected = view
        .selected_event
        .as_deref()
        .or_else(|| view.summaries.first().map(|s| s.event.name.as_str()));
    let mut section = format!(
        r#"<h3>View Ticket Bookings</h3>
<form method="get" action="/admin">
<label>Select an Event to see Bookings <select name="event">{}</select></label>
<button type="submit">Show</button>
</form>
"#,
        event_options(&view.summaries, selected)
    );
    let Some(event_name) = selected else {
        return section;
    };
    if view.bookings.is_empty() {
        section.push_str(
            &Notice::Info(format!("No tickets have been booked for '{}' yet.", event_name)).render(),
        );
    } else {
        section.push_str(
            "<table class=\"bookings\">\n<tr><th>Booked By (Name)</th><th>Phone Number</th></tr>\n",
        );
        for booking in &view.bookings {
            section.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                text(&booking.user_name),
                text(&booking.user_phone)
            ));
        }
        section.push_str("</table>\n");
    }
    section
}
