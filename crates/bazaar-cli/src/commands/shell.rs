use super::{colorize_stock, err_line, format_money, ok_line, EXIT_SUCCESS};
use bazaar_core::{CartManager, ProductId};
use dialoguer::{Input, Select};
use std::io::{stderr, stdin, IsTerminal};
use tracing::debug;

const ACTIONS: &[&str] = &[
    "Add product",
    "Show catalog",
    "Add to cart",
    "Update cart quantity",
    "View cart",
    "Remove from cart",
    "Checkout",
    "Quit",
];

/// Prompt-driven session over one in-memory `CartManager`. State lives for
/// the duration of the loop and is discarded on quit.
pub fn run(json: bool) -> Result<u8, String> {
    if json {
        return Err("JSON output is not supported for 'shell'".to_owned());
    }
    if !stdin().is_terminal() || !stderr().is_terminal() {
        return Err("shell requires an interactive terminal (try 'bazaar demo')".to_owned());
    }

    let mut manager = CartManager::new();
    debug!("starting shell session");

    loop {
        let choice = Select::new()
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact_opt()
            .map_err(|e| format!("prompt failed: {e}"))?;

        match choice {
            Some(0) => add_product(&mut manager)?,
            Some(1) => show_catalog(&manager),
            Some(2) => add_to_cart(&mut manager)?,
            Some(3) => update_quantity(&mut manager)?,
            Some(4) => view_cart(&manager),
            Some(5) => remove_item(&mut manager)?,
            Some(6) => checkout(&mut manager)?,
            _ => break,
        }
    }

    Ok(EXIT_SUCCESS)
}

fn prompt<T>(label: &str) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + Clone,
    T::Err: std::fmt::Debug + std::fmt::Display,
{
    Input::<T>::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| format!("prompt failed: {e}"))
}

fn add_product(manager: &mut CartManager) -> Result<(), String> {
    let name: String = prompt("Product name")?;
    let price: f64 = prompt("Price")?;
    let quantity: u32 = prompt("Quantity")?;
    match manager.add_product(&name, price, quantity) {
        Ok(id) => println!("{}", ok_line(&format!("Added: {id} - {name}"))),
        Err(e) => println!("{}", err_line(&e.to_string())),
    }
    Ok(())
}

fn show_catalog(manager: &CartManager) {
    if manager.catalog_len() == 0 {
        println!("catalog is empty");
        return;
    }
    println!("{:<10} {:<20} {:>10} {:>8}", "ID", "NAME", "PRICE", "STOCK");
    for product in manager.products() {
        println!(
            "{:<10} {:<20} {:>10} {:>8}",
            product.id(),
            product.name(),
            format_money(product.price()),
            colorize_stock(product.quantity_available())
        );
    }
}

fn add_to_cart(manager: &mut CartManager) -> Result<(), String> {
    let id = ProductId::from(prompt::<String>("Product ID")?.trim());
    if manager.product(&id).is_none() {
        println!("{}", err_line(&format!("product not found: {id}")));
        return Ok(());
    }
    let quantity: u32 = prompt("Quantity")?;
    match manager.add_to_cart(&id, quantity) {
        Ok(()) => println!("{}", ok_line(&format!("Added {quantity} of {id} to cart."))),
        Err(e) => println!("{}", err_line(&e.to_string())),
    }
    Ok(())
}

fn update_quantity(manager: &mut CartManager) -> Result<(), String> {
    let id = ProductId::from(prompt::<String>("Product ID in cart")?.trim());
    let quantity: u32 = prompt("New quantity")?;
    match manager.update_cart_quantity(&id, quantity) {
        Ok(()) => println!("{}", ok_line(&format!("Updated {id} to {quantity}."))),
        Err(e) => println!("{}", err_line(&e.to_string())),
    }
    Ok(())
}

fn view_cart(manager: &CartManager) {
    let view = manager.cart_view();
    if view.is_empty() {
        println!("cart is empty");
        return;
    }
    for line in &view.lines {
        println!(
            "{}: {} x {} = {}",
            line.product_id,
            line.name,
            line.quantity,
            format_money(line.subtotal)
        );
    }
    println!("Total = {}", format_money(view.total));
}

fn remove_item(manager: &mut CartManager) -> Result<(), String> {
    let id = ProductId::from(prompt::<String>("Product ID")?.trim());
    match manager.remove_from_cart(&id) {
        Ok(()) => println!("{}", ok_line(&format!("Removed {id} from cart."))),
        Err(e) => println!("{}", err_line(&e.to_string())),
    }
    Ok(())
}

fn checkout(manager: &mut CartManager) -> Result<(), String> {
    let total = manager.cart_total();
    if total == 0.0 {
        println!("{}", err_line("cart is empty"));
        return Ok(());
    }

    let methods = ["UPI: shop@upi", "Card: ****1234", "Cash on delivery"];
    let choice = Select::new()
        .with_prompt(format!("Select payment method (total {})", format_money(total)))
        .items(&methods)
        .default(0)
        .interact_opt()
        .map_err(|e| format!("prompt failed: {e}"))?;

    match choice {
        Some(method) => match manager.checkout() {
            Ok(paid) => println!(
                "{}",
                ok_line(&format!(
                    "Order placed via {}: {}. Cart cleared.",
                    methods[method],
                    format_money(paid)
                ))
            ),
            Err(e) => println!("{}", err_line(&e.to_string())),
        },
        None => println!("checkout cancelled"),
    }
    Ok(())
}
