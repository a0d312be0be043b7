//! Raw forms as submitted by the self-checkout, cashier and admin views.
//!
//! Every field is optional so that a missing or `null` value in the request
//! body still deserializes. Validation checks every field and reports all
//! failures at once instead of stopping at the first one.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::models::{Customer, OrderLine, OrderStatus, StaffAccount};
use crate::utils::error_messages::*;
use crate::utils::input_validation::{sanitize_text, Cpf, Email, Password, Phone};
use crate::utils::numeric_validation::{is_valid_order_status, is_valid_price, is_valid_quantity};

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

/// Every field rejected while validating a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    /// Records the error of `result` under `field`, if any
    fn check<T>(&mut self, field: &'static str, result: Result<T, &'static str>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(reason) => {
                self.0.push(FieldError { field, reason });
                None
            }
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldError> + '_ {
        self.0.iter()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn required_text(value: Option<&str>) -> Result<String, &'static str> {
    let text = sanitize_text(value);
    if text.is_empty() {
        Err(REQUIRED)
    } else {
        Ok(text)
    }
}

/// Blank optional fields are treated as absent
fn optional_text(value: Option<&str>) -> Option<String> {
    Some(sanitize_text(value)).filter(|text| !text.is_empty())
}

fn email(value: Option<&str>) -> Result<Email, &'static str> {
    Email::try_from(required_text(value)?).map_err(|_| INVALID_EMAIL)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cpf: Option<String>,
}

impl CustomerForm {
    pub fn validate(&self) -> Result<Customer, FormErrors> {
        let mut errors = FormErrors::default();

        let name = errors.check("name", required_text(self.name.as_deref()));
        let email = errors.check("email", email(self.email.as_deref()));
        let phone = errors.check(
            "phone",
            optional_text(self.phone.as_deref())
                .map(|p| Phone::try_from(p).map_err(|_| INVALID_PHONE))
                .transpose(),
        );
        let cpf = errors.check(
            "cpf",
            optional_text(self.cpf.as_deref())
                .map(|c| Cpf::try_from(c).map_err(|_| INVALID_CPF))
                .transpose(),
        );

        match (name, email, phone, cpf) {
            (Some(name), Some(email), Some(phone), Some(cpf)) if errors.is_empty() => {
                info!("Customer form accepted for {}", name);
                Ok(Customer { name, email, phone, cpf })
            }
            _ => {
                debug!("Customer form rejected: {}", errors);
                Err(errors)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl StaffForm {
    pub fn validate(&self) -> Result<StaffAccount, FormErrors> {
        let mut errors = FormErrors::default();

        let name = errors.check("name", required_text(self.name.as_deref()));
        let email = errors.check("email", email(self.email.as_deref()));
        // Passwords are taken as typed, never trimmed
        let password = errors.check(
            "password",
            Password::try_from(self.password.as_deref().unwrap_or_default())
                .map_err(|_| WEAK_PASSWORD),
        );

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) if errors.is_empty() => {
                info!("Staff form accepted for {}", name);
                Ok(StaffAccount { name, email, password })
            }
            _ => {
                debug!("Staff form rejected: {}", errors);
                Err(errors)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLineForm {
    pub product: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    /// Defaults to `PENDING` when absent
    pub status: Option<String>,
}

impl OrderLineForm {
    pub fn validate(&self) -> Result<OrderLine, FormErrors> {
        let mut errors = FormErrors::default();

        let product = errors.check("product", required_text(self.product.as_deref()));
        let unit_price = errors.check(
            "unit_price",
            match self.unit_price {
                Some(price) if is_valid_price(price) => Ok(price),
                Some(_) => Err(INVALID_PRICE),
                None => Err(REQUIRED),
            },
        );
        let quantity = errors.check(
            "quantity",
            match self.quantity {
                Some(q) if !is_valid_quantity(q) => Err(INVALID_QUANTITY),
                Some(q) if q > f64::from(u32::MAX) => Err(QUANTITY_TOO_LARGE),
                Some(q) => Ok(q as u32),
                None => Err(REQUIRED),
            },
        );
        let status = errors.check(
            "status",
            match optional_text(self.status.as_deref()) {
                Some(code) if is_valid_order_status(&code) => {
                    OrderStatus::from_str(&code).map_err(|_| UNKNOWN_STATUS)
                }
                Some(_) => Err(UNKNOWN_STATUS),
                None => Ok(OrderStatus::default()),
            },
        );

        match (product, unit_price, quantity, status) {
            (Some(product), Some(unit_price), Some(quantity), Some(status))
                if errors.is_empty() =>
            {
                Ok(OrderLine { product, unit_price, quantity, status })
            }
            _ => {
                debug!("Order line rejected: {}", errors);
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod customer_form_tests {
        use super::*;

        fn valid_form() -> CustomerForm {
            CustomerForm {
                name: Some("  Maria Souza ".to_owned()),
                email: Some("maria@example.com".to_owned()),
                phone: Some("(11) 98765-4321".to_owned()),
                cpf: Some("529.982.247-25".to_owned()),
            }
        }

        #[test]
        fn test_valid_customer() {
            let customer = valid_form().validate().unwrap();
            assert_eq!(customer.name, "Maria Souza");
            assert_eq!(customer.email.as_ref(), "maria@example.com");
            assert_eq!(customer.phone.unwrap().as_ref(), "11987654321");
            assert_eq!(customer.cpf.unwrap().to_string(), "529.982.247-25");
        }

        #[test]
        fn test_optional_fields_may_be_blank() {
            let form = CustomerForm {
                phone: Some("   ".to_owned()),
                cpf: None,
                ..valid_form()
            };
            let customer = form.validate().unwrap();
            assert!(customer.phone.is_none());
            assert!(customer.cpf.is_none());
        }

        #[test]
        fn test_all_errors_reported() {
            let form = CustomerForm {
                name: Some("   ".to_owned()),
                email: Some("a@@b.co".to_owned()),
                phone: Some("123".to_owned()),
                cpf: Some("111.111.111-11".to_owned()),
            };
            let errors = form.validate().unwrap_err();

            for field in ["name", "email", "phone", "cpf"] {
                assert!(errors.contains(field), "Field {} was not reported", field);
            }
            assert_eq!(errors.to_string(), "4 invalid field(s)");
        }

        #[test]
        fn test_from_json_with_nulls() {
            let form: CustomerForm =
                serde_json::from_str(r#"{"name": null, "email": "a@b.co", "cpf": null}"#).unwrap();
            let errors = form.validate().unwrap_err();

            let reported: Vec<&FieldError> = errors.fields().collect();
            assert_eq!(reported, vec![&FieldError { field: "name", reason: REQUIRED }]);
        }
    }

    mod staff_form_tests {
        use super::*;

        #[test]
        fn test_password_policy() {
            let test_cases = vec![
                (None, false),
                (Some(""), false),
                (Some("12345"), false),
                (Some("123456"), true),
            ];

            for (password, expected) in test_cases {
                let form = StaffForm {
                    name: Some("Caixa 1".to_owned()),
                    email: Some("caixa1@lanchonete.com".to_owned()),
                    password: password.map(str::to_owned),
                };
                assert_eq!(form.validate().is_ok(), expected,
                           "Password {:?} validation result was unexpected", password);
            }
        }

        #[test]
        fn test_password_not_serialized() {
            let form = StaffForm {
                name: Some("Cozinha".to_owned()),
                email: Some("cozinha@lanchonete.com".to_owned()),
                password: Some("segredo123".to_owned()),
            };
            let json = serde_json::to_string(&form.validate().unwrap()).unwrap();
            assert!(!json.contains("segredo123"));
        }
    }

    mod order_line_form_tests {
        use super::*;

        fn line(unit_price: Option<f64>, quantity: Option<f64>, status: Option<&str>) -> OrderLineForm {
            OrderLineForm {
                product: Some("Pastel de queijo".to_owned()),
                unit_price,
                quantity,
                status: status.map(str::to_owned),
            }
        }

        #[test]
        fn test_valid_line_defaults_to_pending() {
            let order_line = line(Some(0.0), Some(3.0), None).validate().unwrap();
            assert_eq!(order_line.quantity, 3);
            assert_eq!(order_line.status, OrderStatus::Pending);
        }

        #[test]
        fn test_invalid_numbers() {
            let test_cases = vec![
                (line(Some(-1.0), Some(1.0), None), "unit_price"),
                (line(None, Some(1.0), None), "unit_price"),
                (line(Some(5.0), Some(0.0), None), "quantity"),
                (line(Some(5.0), Some(2.5), None), "quantity"),
                (line(Some(5.0), Some(1e12), None), "quantity"),
                (line(Some(5.0), Some(1.0), Some("LOST")), "status"),
                (line(Some(5.0), Some(1.0), Some("ready")), "status"),
            ];

            for (form, field) in test_cases {
                let errors = form.validate().unwrap_err();
                assert!(errors.contains(field), "Field {} was not reported for {:?}", field, form);
            }
        }

        #[test]
        fn test_explicit_status() {
            let order_line = line(Some(12.0), Some(1.0), Some("READY")).validate().unwrap();
            assert_eq!(order_line.status, OrderStatus::Ready);
        }
    }
}
