//! The add-cafe form and its submit handler.

use tracing::{info, warn};

use crate::clients::CafeClient;
use crate::constants::{dom, endpoints};
use crate::error::ClientError;
use crate::page::{Form, FormField, FormMethod, InputKind};

/// Joins the price number and the currency symbol the way the backend stores
/// them. Nothing is validated; empty parts are kept as they are.
#[must_use]
pub fn compose_price(price: &str, currency: &str) -> String {
    format!("{price} {currency}")
}

/// What a user typed into the add-cafe form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CafeDraft {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub price: String,
    pub currency: String,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub can_take_calls: bool,
}

impl CafeDraft {
    /// Builds the `cafeForm` element. The price number and currency controls
    /// carry only DOM ids, so they are not submitted on their own.
    #[must_use]
    pub fn to_form(&self) -> Form {
        let mut form = Form::new(dom::CAFE_FORM, endpoints::ADD_CAFE, FormMethod::Post)
            .with_field(FormField::named("name", InputKind::Text, &self.name))
            .with_field(FormField::named("map_url", InputKind::Url, &self.map_url))
            .with_field(FormField::named("img_url", InputKind::Url, &self.img_url))
            .with_field(FormField::named("loc", InputKind::Text, &self.location))
            .with_field(FormField::named("seats", InputKind::Text, &self.seats))
            .with_field(FormField::unnamed(
                dom::PRICE_NUMBER,
                InputKind::Number,
                &self.price,
            ))
            .with_field(FormField::unnamed(
                dom::CURRENCY_SYMBOL,
                InputKind::Select,
                &self.currency,
            ));

        self.append_checkboxes(&mut form);
        form
    }

    /// Builds the edit form for `cafe_id`. The edit route names the location
    /// `location` and composes the price itself from the named
    /// `coffee_price` and `currency_symbol` fields.
    #[must_use]
    pub fn to_edit_form(&self, cafe_id: i32) -> Form {
        let mut form = Form::new(
            dom::EDIT_FORM,
            endpoints::edit_cafe(cafe_id),
            FormMethod::Post,
        )
        .with_field(FormField::named("name", InputKind::Text, &self.name))
        .with_field(FormField::named("map_url", InputKind::Url, &self.map_url))
        .with_field(FormField::named("img_url", InputKind::Url, &self.img_url))
        .with_field(FormField::named("location", InputKind::Text, &self.location))
        .with_field(FormField::named("seats", InputKind::Text, &self.seats))
        .with_field(FormField::named(
            dom::COFFEE_PRICE,
            InputKind::Number,
            &self.price,
        ))
        .with_field(FormField::named(
            dom::CURRENCY_SYMBOL,
            InputKind::Select,
            &self.currency,
        ));

        self.append_checkboxes(&mut form);
        form
    }

    /// Unchecked boxes are left out, as a browser would.
    fn append_checkboxes(&self, form: &mut Form) {
        for (name, checked) in [
            ("wifi", self.has_wifi),
            ("sockets", self.has_sockets),
            ("toilet", self.has_toilet),
            ("calls", self.can_take_calls),
        ] {
            if checked {
                form.append(FormField::named(name, InputKind::Checkbox, "on"));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Posted,
    /// The backend sent us somewhere other than home, e.g. back to the form
    /// because the name is taken.
    Bounced { landed_on: String },
}

pub struct SubmissionController {
    client: CafeClient,
}

impl SubmissionController {
    #[must_use]
    pub const fn new(client: CafeClient) -> Self {
        Self { client }
    }

    /// Submit handler: appends the combined `coffee_price` hidden field and
    /// lets submission go ahead. Runs once per submit, so resubmitting the
    /// same form appends another field.
    pub fn on_submit(form: &mut Form) -> String {
        let price = form.value_of(dom::PRICE_NUMBER).unwrap_or_default();
        let currency = form.value_of(dom::CURRENCY_SYMBOL).unwrap_or_default();
        let combined = compose_price(price, currency);

        form.append(FormField::hidden(dom::COFFEE_PRICE, combined.clone()));
        combined
    }

    pub async fn submit(&self, form: &mut Form) -> Result<SubmitOutcome, ClientError> {
        let coffee_price = Self::on_submit(form);
        let reply = self.client.submit_form(form).await?;

        if reply.landed_home() {
            info!(action = %form.action, coffee_price = %coffee_price, "Cafe submitted");
            Ok(SubmitOutcome::Posted)
        } else {
            warn!(action = %form.action, landed_on = %reply.landed_on, "Cafe submission bounced");
            Ok(SubmitOutcome::Bounced {
                landed_on: reply.landed_on,
            })
        }
    }
}
