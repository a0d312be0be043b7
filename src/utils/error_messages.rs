//! Messages returned to the front-end for each rejected form field

pub const REQUIRED: &str = "Required field";

pub const INVALID_EMAIL: &str = "Invalid email address";

pub const INVALID_PHONE: &str = "Phone number must have 10 or 11 digits";

pub const INVALID_CPF: &str = "Invalid CPF";

pub const WEAK_PASSWORD: &str = "Password must be at least 6 characters long";

pub const INVALID_PRICE: &str = "Price must be zero or positive";

pub const INVALID_QUANTITY: &str = "Quantity must be a positive whole number";

pub const QUANTITY_TOO_LARGE: &str = "Quantity is too large";

pub const UNKNOWN_STATUS: &str = "Unknown order status";
