use anyhow::Result;
use derive_more::Display;
use inquire::{CustomType, Password, Select, Text};
use log::info;
use snackpos::config::Config;
use snackpos::forms::{CustomerForm, FormErrors, OrderLineForm, StaffForm};
use snackpos::models::OrderStatus;
use snackpos::utils::input_validation::is_valid_cpf;
use snackpos::utils::masks::{mask_cpf, mask_phone};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// Un menu texte relancé tant qu'il renvoie `MENU_LOOP`
trait Menu {
    fn enter(&mut self) -> Result<MenuExit>;

    /// Lance le menu en boucle, en affichant les erreurs sans quitter
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Erreur: {error}");
            }
        }
    }
}

/// Optional text prompt: an empty answer becomes `None`
fn ask(message: &str) -> Result<Option<String>> {
    let answer = Text::new(message).prompt()?;
    Ok(Some(answer).filter(|a| !a.is_empty()))
}

fn report<T: serde::Serialize>(result: Result<T, FormErrors>) -> Result<()> {
    match result {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(errors) => {
            println!("[!] {errors}");
            for error in errors.fields() {
                println!("  - {error}");
            }
        }
    }
    Ok(())
}

struct FormChecker;

impl Menu for FormChecker {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Cadastrar cliente")]
            Customer,
            #[display("Cadastrar funcionário")]
            Staff,
            #[display("Adicionar item ao pedido")]
            OrderLine,
            #[display("Verificar CPF")]
            CheckCpf,
            #[display("Formatar telefone")]
            MaskPhone,
            #[display("Sair")]
            Exit,
        }

        let choice = Select::new("O que deseja fazer?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Customer => {
                let form = CustomerForm {
                    name: ask("Nome:")?,
                    email: ask("E-mail:")?,
                    phone: ask("Telefone (opcional):")?,
                    cpf: ask("CPF (opcional):")?,
                };
                report(form.validate())?;
            }
            Choice::Staff => {
                let form = StaffForm {
                    name: ask("Nome:")?,
                    email: ask("E-mail:")?,
                    password: Some(
                        Password::new("Senha:")
                            .without_confirmation()
                            .with_display_mode(inquire::PasswordDisplayMode::Masked)
                            .prompt()?,
                    ),
                };
                report(form.validate())?;
            }
            Choice::OrderLine => {
                let form = OrderLineForm {
                    product: ask("Produto:")?,
                    unit_price: CustomType::<f64>::new("Preço unitário:").prompt_skippable()?,
                    quantity: CustomType::<f64>::new("Quantidade:").prompt_skippable()?,
                    status: Some(
                        Select::new("Status:", OrderStatus::iter().collect())
                            .prompt()?
                            .as_ref()
                            .to_owned(),
                    ),
                };
                report(form.validate())?;
            }
            Choice::CheckCpf => {
                let cpf = Text::new("CPF:").prompt()?;
                let verdict = if is_valid_cpf(&cpf) { "válido" } else { "inválido" };
                println!("{} é {}", mask_cpf(&cpf), verdict);
            }
            Choice::MaskPhone => {
                let phone = Text::new("Telefone:").prompt()?;
                println!("{}", mask_phone(&phone));
            }
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    info!("Form checker started");

    FormChecker.enter_loop();
    Ok(())
}
