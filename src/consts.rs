//! Constantes globales de la couche de validation.

pub const CPF_LENGTH: usize = 11; // Nombre de chiffres d'un CPF.
pub const PHONE_MIN_DIGITS: usize = 10; // Indicatif + numéro fixe.
pub const PHONE_MAX_DIGITS: usize = 11; // Indicatif + numéro mobile.
pub const MIN_PASSWORD_LENGTH: usize = 6; // Longueur minimale d'un mot de passe.
pub const DEFAULT_LOG_FILE: &str = "./snackpos.log"; // Fichier de log par défaut.
