//! Turns a [`Listing`] into the children of the cafes container.

use crate::constants::{dom, endpoints};
use crate::html::{Element, Node, safe_url};
use crate::models::{Cafe, Listing, Viewer};
use crate::page::{Container, FormMethod};

/// Clears `container` and fills it with the rendered listing.
pub fn render_into(container: &mut Container, listing: &Listing, viewer: Viewer) {
    container.replace_children(render_listing(listing, viewer));
}

#[must_use]
pub fn render_listing(listing: &Listing, viewer: Viewer) -> Vec<Node> {
    match listing {
        Listing::NotFound(message) => vec![
            Element::new("div")
                .class("no-results")
                .text(message.clone())
                .into(),
        ],
        Listing::Cafes(cafes) => cafes
            .iter()
            .map(|cafe| cafe_block(cafe, viewer).into())
            .collect(),
    }
}

#[must_use]
pub const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn labelled(label: &str, value: impl Into<String>) -> Element {
    Element::new("p")
        .child(Element::new("b").text(label))
        .text(format!(" {}", value.into()))
}

fn action_form(action: String, method: FormMethod, button_class: &str, label: &str) -> Element {
    Element::new("form")
        .attr("action", action)
        .attr("method", method.as_str())
        .child(
            Element::new("button")
                .class(format!("btn {button_class}"))
                .attr("type", "submit")
                .text(label),
        )
}

#[must_use]
pub fn cafe_block(cafe: &Cafe, viewer: Viewer) -> Element {
    let mut block = Element::new("div")
        .class("cafe-item")
        .id(dom::cafe_block(cafe.id))
        .child(Element::new("h2").text(cafe.name.clone()))
        .child(
            Element::new("p")
                .text("Location: ")
                .child(Element::new("b").text(cafe.location.clone())),
        )
        .child(
            Element::new("p").child(
                Element::new("a")
                    .attr("href", safe_url(&cafe.map_url))
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .text("View on Map"),
            ),
        )
        .child(labelled("Seating:", cafe.seats.clone()))
        .child(labelled(
            "Price:",
            cafe.coffee_price.clone().unwrap_or_default(),
        ))
        .child(labelled("Has Wi-Fi:", yes_no(cafe.has_wifi)))
        .child(labelled("Has Sockets:", yes_no(cafe.has_sockets)))
        .child(labelled("Has Toilet:", yes_no(cafe.has_toilet)))
        .child(labelled("Can Take Calls:", yes_no(cafe.can_take_calls)))
        .child(
            Element::new("img")
                .attr("src", safe_url(&cafe.img_url))
                .attr("alt", cafe.name.clone())
                .attr("style", "max-width: 100%; height: auto;"),
        )
        .child(
            Element::new("p")
                .text("Added by ")
                .child(Element::new("b").text(cafe.author_name.clone().unwrap_or_default())),
        );

    if viewer.can_delete(cafe) {
        block = block.child(action_form(
            endpoints::report_closed(cafe.id),
            FormMethod::Post,
            "btn-danger",
            "Delete",
        ));
    }

    if viewer.can_edit(cafe) {
        block = block.child(action_form(
            endpoints::edit_cafe(cafe.id),
            FormMethod::Get,
            "btn-primary",
            "Edit",
        ));
    }

    block
}
