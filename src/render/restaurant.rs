use html_escape::encode_text;

use crate::{
    models::{Restaurant, ReviewPage},
    render::{layout, review::review_list_fragment},
};

pub fn index_page(restaurants: &[Restaurant]) -> String {
    let mut body = String::from("<h1>Restaurants</h1>\n<ul class=\"restaurants\">\n");
    for restaurant in restaurants {
        body.push_str(&format!(
            "<li><a href=\"/restaurants/{}\">{}</a> <span class=\"address\">{}</span></li>\n",
            restaurant.id,
            encode_text(&restaurant.name),
            encode_text(&restaurant.address),
        ));
    }
    body.push_str("</ul>\n");
    layout::page("Restaurants", &body)
}

/// The full detail page: restaurant details, the collapsed review form with
/// its expand trigger, and the first page of reviews inside the
/// infinite-scroll container.
pub fn show_page(restaurant: &Restaurant, reviews: &ReviewPage, errors: &[String]) -> String {
    let mut body = format!(
        "<h1>{}</h1>\n\
        <p class=\"address\">{}</p>\n\
        <p class=\"review-count\">{} reviews</p>\n",
        encode_text(&restaurant.name),
        encode_text(&restaurant.address),
        reviews.total,
    );

    if !errors.is_empty() {
        body.push_str("<ul class=\"form-errors\">\n");
        for error in errors {
            body.push_str(&format!("<li>{}</li>\n", encode_text(error)));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&review_form(restaurant.id, !errors.is_empty()));

    body.push_str(&format!(
        "<ul id=\"reviews\" class=\"reviews\" data-infinite-scroll \
         data-page-url=\"/restaurants/{}\">\n{}</ul>\n",
        restaurant.id,
        review_list_fragment(&reviews.reviews),
    ));

    layout::page(&restaurant.name, &body)
}

// After a failed submission the form starts expanded so the errors and the
// rejected input are immediately visible.
fn review_form(restaurant_id: i64, expanded: bool) -> String {
    let trigger = if expanded {
        String::new()
    } else {
        "<button type=\"button\" class=\"open-review-form\" data-modal-trigger>\
         Write a review</button>\n"
            .to_string()
    };
    let modal_attr = if expanded { "" } else { " data-inline-modal" };

    format!(
        "<section class=\"new-review\"{} data-expanded-height=\"300px\">\n\
        {}\
        <form method=\"post\" action=\"/restaurants/{}/reviews\" data-modal-form>\n\
        <label for=\"rating\">Rating</label>\n\
        <select id=\"rating\" name=\"rating\">\n\
        <option value=\"\">No rating</option>\n\
        <option value=\"1\">1</option>\n\
        <option value=\"2\">2</option>\n\
        <option value=\"3\">3</option>\n\
        <option value=\"4\">4</option>\n\
        <option value=\"5\">5</option>\n\
        </select>\n\
        <label for=\"content\">Your review</label>\n\
        <textarea id=\"content\" name=\"content\" rows=\"4\"></textarea>\n\
        <button type=\"submit\">Post review</button>\n\
        </form>\n\
        </section>\n",
        modal_attr, trigger, restaurant_id,
    )
}
