use crate::domain::model::{Container, Guide, Trip};

/// Shown when the guide document could not be fetched or parsed. Every
/// failure kind collapses to this one message; the detail goes to the log.
pub const LOAD_ERROR_MESSAGE: &str = "<p class=\"error\">Could not load the guide. \
Make sure the file exists at /output/hcim_guide.json and you are running a local \
server from the project root. Check the log output for more details.</p>";

/// Shown when the document parsed fine but contains no trips yet.
pub const EMPTY_GUIDE_MESSAGE: &str =
    "<p class=\"loading\">Guide generated, but it's empty. Time to build the core logic!</p>";

/// Renders the guide into the container: one block per trip, in document
/// order. Assumes `guide` is already a valid parsed value; the only shape it
/// treats specially is the empty one.
pub fn render_guide(guide: &Guide, container: &mut Container) {
    if guide.is_empty() {
        container.set_content(EMPTY_GUIDE_MESSAGE);
        return;
    }

    for (index, trip) in guide.trips().enumerate() {
        container.append(&render_trip(index, trip));
    }
}

fn render_trip(index: usize, trip: &Trip) -> String {
    let inventory: String = trip
        .inventory_setup
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();

    let steps: String = trip
        .steps
        .iter()
        .map(|step| format!("<li><input type=\"checkbox\"> {}</li>", escape(&step.text)))
        .collect();

    format!(
        "<div class=\"trip\">\
         <h2>Chapter {}: {}</h2>\
         <p><strong>Goal:</strong> {}</p>\
         <h3>Inventory Setup:</h3>\
         <ul>{}</ul>\
         <h3>Steps:</h3>\
         <ol>{}</ol>\
         </div>",
        index + 1,
        escape(&trip.title),
        escape(&trip.goal),
        inventory,
        steps,
    )
}

/// Wraps the container content in a minimal page shell so the published
/// file is viewable as-is.
pub fn wrap_page(container: &Container) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>HCIM Guide</title></head>\n\
         <body>\n<div id=\"{}\">{}</div>\n</body>\n</html>\n",
        container.id(),
        container.content(),
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
