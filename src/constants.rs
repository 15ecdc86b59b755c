pub const PRIVILEGED_USER_ID: i32 = 1;

pub mod endpoints {

    pub const ALL_CAFES: &str = "/all";

    pub const ADD_CAFE: &str = "/add";

    pub const LOGIN: &str = "/login";

    pub const HOME: &str = "/";

    pub const RANDOM_CAFE: &str = "/random";

    #[must_use]
    pub fn report_closed(cafe_id: i32) -> String {
        format!("/report-closed/{cafe_id}")
    }

    #[must_use]
    pub fn edit_cafe(cafe_id: i32) -> String {
        format!("/edit-cafe/{cafe_id}")
    }
}

pub mod dom {

    pub const CAFE_FORM: &str = "cafeForm";

    pub const EDIT_FORM: &str = "editForm";

    pub const PRICE_NUMBER: &str = "coffee_price_number";

    pub const CURRENCY_SYMBOL: &str = "currency_symbol";

    pub const COFFEE_PRICE: &str = "coffee_price";

    pub const SEARCH_INPUT: &str = "search-input";

    pub const BY_NAME_CHECKBOX: &str = "flexRadioDefault1";

    pub const CAFES_CONTAINER: &str = "cafes-container";

    #[must_use]
    pub fn cafe_block(cafe_id: i32) -> String {
        format!("cafe-{cafe_id}")
    }
}

pub mod intervals {
    use std::time::Duration;

    pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
}
