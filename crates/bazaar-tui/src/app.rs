use bazaar_core::{CartManager, ProductId};
use crossterm::event::KeyCode;

#[derive(Debug, PartialEq, Eq)]
pub enum AppAction {
    None,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Log,
    Catalog,
    Cart,
    Help,
}

/// Which parameter the active prompt is collecting, with the values
/// gathered by earlier stages of the same flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    ProductName,
    ProductPrice { name: String },
    ProductQuantity { name: String, price: f64 },
    CartId,
    CartQuantity { id: ProductId },
    UpdateId,
    UpdateQuantity { id: ProductId },
    RemoveId,
}

impl Prompt {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductName => "product name",
            Self::ProductPrice { .. } => "price",
            Self::ProductQuantity { .. } => "quantity",
            Self::CartId | Self::UpdateId | Self::RemoveId => "product id",
            Self::CartQuantity { .. } => "quantity",
            Self::UpdateQuantity { .. } => "new quantity",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Prompt(Prompt),
}

pub struct App {
    pub manager: CartManager,
    pub log: Vec<String>,
    /// Lines scrolled up from the bottom of the log; 0 follows new output.
    pub log_offset: usize,
    pub view: View,
    pub input_mode: InputMode,
    pub text_input: String,
    pub input_cursor: usize,
    pub status_message: String,
    /// Total awaiting payment-method selection; cart untouched until chosen.
    pub pending_checkout: Option<f64>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            manager: CartManager::new(),
            log: Vec::new(),
            log_offset: 0,
            view: View::Log,
            input_mode: InputMode::Normal,
            text_input: String::new(),
            input_cursor: 0,
            status_message: "press ? for help".to_owned(),
            pending_checkout: None,
        }
    }

    fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
        self.log_offset = 0;
    }

    fn start_prompt(&mut self, prompt: Prompt) {
        self.status_message = format!("{}: ", prompt.label());
        self.input_mode = InputMode::Prompt(prompt);
        self.text_input.clear();
        self.input_cursor = 0;
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if let InputMode::Prompt(prompt) = self.input_mode.clone() {
            return self.handle_prompt_key(&prompt, key);
        }

        if self.pending_checkout.is_some() {
            return self.handle_payment_key(key);
        }

        match self.view {
            View::Help | View::Catalog | View::Cart => match key {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.view = View::Log;
                    AppAction::None
                }
                _ => AppAction::None,
            },
            View::Log => self.handle_log_key(key),
        }
    }

    fn handle_log_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('j') | KeyCode::Down => {
                self.log_offset = self.log_offset.saturating_sub(1);
                AppAction::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.log_offset + 1 < self.log.len() {
                    self.log_offset += 1;
                }
                AppAction::None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.log_offset = self.log.len().saturating_sub(1);
                AppAction::None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.log_offset = 0;
                AppAction::None
            }
            KeyCode::Char('a') => {
                self.start_prompt(Prompt::ProductName);
                AppAction::None
            }
            KeyCode::Char('c') => {
                self.view = View::Catalog;
                AppAction::None
            }
            KeyCode::Char('t') => {
                self.start_prompt(Prompt::CartId);
                AppAction::None
            }
            KeyCode::Char('u') => {
                self.start_prompt(Prompt::UpdateId);
                AppAction::None
            }
            KeyCode::Char('v') => {
                self.view = View::Cart;
                AppAction::None
            }
            KeyCode::Char('x') => {
                self.start_prompt(Prompt::RemoveId);
                AppAction::None
            }
            KeyCode::Char('o') => {
                self.start_checkout();
                AppAction::None
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    fn handle_prompt_key(&mut self, prompt: &Prompt, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                "cancelled".clone_into(&mut self.status_message);
                AppAction::None
            }
            KeyCode::Enter => {
                let input = self.text_input.clone();
                self.advance_prompt(prompt, input.trim());
                AppAction::None
            }
            KeyCode::Char(c) => {
                self.text_input.insert(self.input_cursor, c);
                self.input_cursor += 1;
                self.status_message = format!("{}: {}", prompt.label(), self.text_input);
                AppAction::None
            }
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    self.input_cursor -= 1;
                    self.text_input.remove(self.input_cursor);
                }
                self.status_message = format!("{}: {}", prompt.label(), self.text_input);
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    /// Move to the next stage of the active flow, or execute it on the
    /// final stage. Parse failures keep the prompt open.
    fn advance_prompt(&mut self, prompt: &Prompt, input: &str) {
        match prompt {
            Prompt::ProductName => {
                self.start_prompt(Prompt::ProductPrice {
                    name: input.to_owned(),
                });
            }
            Prompt::ProductPrice { name } => match input.parse::<f64>() {
                Ok(price) => {
                    self.start_prompt(Prompt::ProductQuantity {
                        name: name.clone(),
                        price,
                    });
                }
                Err(_) => self.reject_input("invalid price"),
            },
            Prompt::ProductQuantity { name, price } => match input.parse::<u32>() {
                Ok(qty) => {
                    self.finish_prompt();
                    match self.manager.add_product(name, *price, qty) {
                        Ok(id) => {
                            let name = name.clone();
                            self.push_log(format!("Added: {id} - {name}"));
                            self.status_message = format!("added {id}");
                        }
                        Err(e) => self.status_message = format!("error: {e}"),
                    }
                }
                Err(_) => self.reject_input("invalid quantity"),
            },
            Prompt::CartId => {
                let id = ProductId::from(input);
                if self.manager.product(&id).is_none() {
                    self.finish_prompt();
                    self.status_message = format!("product not found: {id}");
                } else {
                    self.start_prompt(Prompt::CartQuantity { id });
                }
            }
            Prompt::CartQuantity { id } => match input.parse::<u32>() {
                Ok(qty) => {
                    let id = id.clone();
                    self.finish_prompt();
                    match self.manager.add_to_cart(&id, qty) {
                        Ok(()) => {
                            self.push_log(format!("Added {qty} of {id} to cart."));
                            self.status_message = format!("{qty} x {id} in cart");
                        }
                        Err(e) => self.status_message = format!("error: {e}"),
                    }
                }
                Err(_) => self.reject_input("invalid quantity"),
            },
            Prompt::UpdateId => {
                let id = ProductId::from(input);
                let in_cart = self
                    .manager
                    .cart_view()
                    .lines
                    .iter()
                    .any(|l| l.product_id == id);
                if in_cart {
                    self.start_prompt(Prompt::UpdateQuantity { id });
                } else {
                    self.finish_prompt();
                    self.status_message = format!("item not in cart: {id}");
                }
            }
            Prompt::UpdateQuantity { id } => match input.parse::<u32>() {
                Ok(qty) => {
                    let id = id.clone();
                    self.finish_prompt();
                    match self.manager.update_cart_quantity(&id, qty) {
                        Ok(()) => {
                            self.push_log(format!("Updated {id} to {qty}."));
                            self.status_message = format!("updated {id}");
                        }
                        Err(e) => self.status_message = format!("error: {e}"),
                    }
                }
                Err(_) => self.reject_input("invalid quantity"),
            },
            Prompt::RemoveId => {
                let id = ProductId::from(input);
                self.finish_prompt();
                match self.manager.remove_from_cart(&id) {
                    Ok(()) => {
                        self.push_log(format!("Removed {id} from cart."));
                        self.status_message = format!("removed {id}");
                    }
                    Err(e) => self.status_message = format!("error: {e}"),
                }
            }
        }
    }

    fn reject_input(&mut self, why: &str) {
        self.status_message = format!("{why}: '{}'", self.text_input);
        self.text_input.clear();
        self.input_cursor = 0;
    }

    fn finish_prompt(&mut self) {
        self.input_mode = InputMode::Normal;
        self.text_input.clear();
        self.input_cursor = 0;
    }

    fn start_checkout(&mut self) {
        let total = self.manager.cart_total();
        if total == 0.0 {
            "cart is empty".clone_into(&mut self.status_message);
            return;
        }
        self.pending_checkout = Some(total);
        self.status_message = format!("pay {total:.2}: [1] UPI  [2] Card  [3] COD  [Esc] cancel");
    }

    fn handle_payment_key(&mut self, key: KeyCode) -> AppAction {
        let method = match key {
            KeyCode::Char('1') => "UPI",
            KeyCode::Char('2') => "Card",
            KeyCode::Char('3') => "COD",
            _ => {
                self.pending_checkout = None;
                "checkout cancelled".clone_into(&mut self.status_message);
                return AppAction::None;
            }
        };
        self.pending_checkout = None;
        match self.manager.checkout() {
            Ok(paid) => {
                self.push_log(format!("Order placed via {method}: {paid:.2}. Cart cleared."));
                self.status_message = format!("paid {paid:.2} via {method}");
            }
            Err(e) => self.status_message = format!("error: {e}"),
        }
        AppAction::None
    }
}
