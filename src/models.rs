//! Modèle de données validé, prêt à être transmis à la couche de persistance

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::utils::input_validation::{Cpf, Email, Password, Phone};

/// État d'une commande, du comptoir jusqu'à la livraison.
///
/// Le code (`AsRef<str>`, serde) est celui échangé avec le backend,
/// `Display` donne le libellé affiché en cuisine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    #[display("Pending")]
    Pending,
    #[display("Preparing")]
    Preparing,
    #[display("Ready for pickup")]
    Ready,
    #[display("Delivered")]
    Delivered,
    #[display("Cancelled")]
    Cancelled,
}

/// Un client identifié au moment de l'encaissement.
/// Le téléphone et le CPF sont facultatifs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{name}")]
pub struct Customer {
    pub name: String,
    pub email: Email,
    pub phone: Option<Phone>,
    pub cpf: Option<Cpf>,
}

/// Un compte employé (caisse, cuisine, administration).
/// Le mot de passe n'est jamais sérialisé.
#[derive(Debug, Clone, Serialize, Display)]
#[display("{name}")]
pub struct StaffAccount {
    pub name: String,
    pub email: Email,
    #[serde(skip)]
    pub password: Password,
}

/// Une ligne de commande
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub status: OrderStatus,
}

impl OrderLine {
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
