use super::{err_line, format_money, json_pretty, ok_line, EXIT_SUCCESS};
use bazaar_core::{CartManager, ProductId};
use tracing::debug;

/// Scripted walkthrough of the cart engine: two products, a failed
/// over-reservation, a quantity update, a removal, and a checkout.
/// Non-interactive; useful for piping and for a quick smoke check.
pub fn run(json: bool) -> Result<u8, String> {
    let mut manager = CartManager::new();
    debug!("running demo script");

    let pen = step_add_product(&mut manager, "Pen", 10.0, 5)?;
    let book = step_add_product(&mut manager, "Book", 50.0, 2)?;

    step_add_to_cart(&mut manager, &pen, 3);
    // Only 2 left in stock; this one must fail and change nothing.
    step_add_to_cart(&mut manager, &pen, 5);
    report_stock(&manager, &pen);

    step_update(&mut manager, &pen, 1);
    report_stock(&manager, &pen);

    step_remove(&mut manager, &pen);
    report_stock(&manager, &pen);

    // An empty cart cannot be checked out.
    step_checkout(&mut manager);

    step_add_to_cart(&mut manager, &pen, 2);
    step_add_to_cart(&mut manager, &book, 1);
    print_cart(&manager);
    step_checkout(&mut manager);

    if json {
        let products: Vec<_> = manager.products().collect();
        let payload = serde_json::json!({
            "catalog": products,
            "cart": manager.cart_view(),
        });
        println!("{}", json_pretty(&payload)?);
    }

    Ok(EXIT_SUCCESS)
}

fn step_add_product(
    manager: &mut CartManager,
    name: &str,
    price: f64,
    quantity: u32,
) -> Result<ProductId, String> {
    let id = manager
        .add_product(name, price, quantity)
        .map_err(|e| e.to_string())?;
    println!("{}", ok_line(&format!("Added: {id} - {name}")));
    Ok(id)
}

fn step_add_to_cart(manager: &mut CartManager, id: &ProductId, quantity: u32) {
    match manager.add_to_cart(id, quantity) {
        Ok(()) => println!("{}", ok_line(&format!("Added {quantity} of {id} to cart."))),
        Err(e) => println!("{}", err_line(&format!("add {quantity} of {id}: {e}"))),
    }
}

fn step_update(manager: &mut CartManager, id: &ProductId, quantity: u32) {
    match manager.update_cart_quantity(id, quantity) {
        Ok(()) => println!("{}", ok_line(&format!("Updated {id} to {quantity}."))),
        Err(e) => println!("{}", err_line(&format!("update {id}: {e}"))),
    }
}

fn step_remove(manager: &mut CartManager, id: &ProductId) {
    match manager.remove_from_cart(id) {
        Ok(()) => println!("{}", ok_line(&format!("Removed {id} from cart."))),
        Err(e) => println!("{}", err_line(&format!("remove {id}: {e}"))),
    }
}

fn step_checkout(manager: &mut CartManager) {
    match manager.checkout() {
        Ok(total) => println!(
            "{}",
            ok_line(&format!(
                "Order placed: {}. Cart cleared.",
                format_money(total)
            ))
        ),
        Err(e) => println!("{}", err_line(&format!("checkout: {e}"))),
    }
}

fn report_stock(manager: &CartManager, id: &ProductId) {
    if let Some(product) = manager.product(id) {
        println!("  stock of {id}: {}", product.quantity_available());
    }
}

fn print_cart(manager: &CartManager) {
    let view = manager.cart_view();
    for line in &view.lines {
        println!(
            "  {}: {} x {} = {}",
            line.product_id,
            line.name,
            line.quantity,
            format_money(line.subtotal)
        );
    }
    println!("  Total = {}", format_money(view.total));
}
