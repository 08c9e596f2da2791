//! # Order Intake
//!
//! Keeps asking until it has a menu item and a positive quantity.
//!
//! ## User Workflow
//! ```text
//! Enter your order item: dosa
//! Sorry, 'Dosa' is not available. Please choose from the menu.
//! Enter your order item: Biryani
//! 'Biryani' order is received successfully.
//! How many 'Biryani' you want?: abc
//! Sorry, please enter a valid positive number for the quantity.
//! How many 'Biryani' you want?: -3
//! Quantity must be a positive number.
//! How many 'Biryani' you want?: 10
//! ```
//!
//! There is no retry limit and no way to cancel. Only a closed input
//! stream ends the loop without an order.

use std::io::{BufRead, Write};

use hotel_core::types::capitalize;
use hotel_core::validation::parse_quantity;
use hotel_core::{MenuEntry, MenuStore, Order, ValidationError};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::terminal::Terminal;

const ITEM_PROMPT: &str = "Enter your order item: ";

/// Resolves one validated order.
pub fn take_order<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    menu: &MenuStore,
) -> AppResult<Order> {
    let entry = resolve_item(terminal, menu)?;
    let quantity = resolve_quantity(terminal, entry)?;

    // quantity is already known to be positive
    let order = Order::new(entry.name.clone(), quantity).map_err(hotel_core::CoreError::from)?;
    info!(item = order.item(), quantity = order.quantity(), "order accepted");
    Ok(order)
}

/// Item loop: prompts until the answer names a menu entry.
pub fn resolve_item<'m, R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    menu: &'m MenuStore,
) -> AppResult<&'m MenuEntry> {
    loop {
        let answer = terminal.ask(ITEM_PROMPT)?;

        match menu.resolve(&answer) {
            Ok(entry) => {
                terminal.say(format_args!(
                    "'{}' order is received successfully.",
                    entry.display_name()
                ))?;
                return Ok(entry);
            }
            Err(err) => {
                debug!(%err, "item rejected");
                terminal.say(format_args!(
                    "Sorry, '{}' is not available. Please choose from the menu.",
                    capitalize(answer.trim())
                ))?;
            }
        }
    }
}

/// Quantity loop: prompts until the answer is a positive whole number.
pub fn resolve_quantity<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    entry: &MenuEntry,
) -> AppResult<u32> {
    let prompt = format!("How many '{}' you want?: ", entry.display_name());

    loop {
        let answer = terminal.ask(&prompt)?;

        match parse_quantity(&answer) {
            Ok(quantity) => return Ok(quantity),
            Err(err) => {
                debug!(%err, answer = %answer, "quantity rejected");
                terminal.say(quantity_rejection(&err))?;
            }
        }
    }
}

fn quantity_rejection(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::MustBePositive { .. } => "Quantity must be a positive number.",
        ValidationError::OutOfRange { .. } => "Quantity is too large.",
        _ => "Sorry, please enter a valid positive number for the quantity.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Cursor;

    fn run_intake(input: &str) -> (AppResult<Order>, String) {
        let menu = MenuStore::standard();
        let mut terminal = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = take_order(&mut terminal, &menu);
        let (_, output) = terminal.into_parts();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_valid_order_first_time() {
        let (order, output) = run_intake("biryani\n5\n");
        assert_eq!(order.unwrap(), Order::new("biryani", 5).unwrap());
        assert_eq!(
            output,
            "Enter your order item: 'Biryani' order is received successfully.\n\
             How many 'Biryani' you want?: "
        );
    }

    #[test]
    fn test_item_is_normalized() {
        let (order, _) = run_intake("   WhiteRice  \n2\n");
        assert_eq!(order.unwrap().item(), "whiterice");
    }

    #[test]
    fn test_rejects_unknown_items_and_keeps_asking() {
        let (order, output) = run_intake("dosa\n\nwhite rice\nparota\n1\n");
        assert_eq!(order.unwrap(), Order::new("parota", 1).unwrap());
        assert!(output.contains("Sorry, 'Dosa' is not available. Please choose from the menu.\n"));
        assert!(output.contains("Sorry, '' is not available. Please choose from the menu.\n"));
        assert!(
            output.contains("Sorry, 'White rice' is not available. Please choose from the menu.\n")
        );
        assert_eq!(output.matches("Enter your order item: ").count(), 4);
    }

    #[test]
    fn test_rejects_bad_quantities_then_accepts() {
        let (order, output) = run_intake("chapathi\n0\n-3\nabc\n5\n");
        assert_eq!(order.unwrap(), Order::new("chapathi", 5).unwrap());
        assert_eq!(output.matches("Quantity must be a positive number.\n").count(), 2);
        assert_eq!(
            output
                .matches("Sorry, please enter a valid positive number for the quantity.\n")
                .count(),
            1
        );
        assert_eq!(output.matches("How many 'Chapathi' you want?: ").count(), 4);
    }

    #[test]
    fn test_rejects_oversized_quantity() {
        let (order, output) = run_intake("parota\n99999999999\n3\n");
        assert_eq!(order.unwrap().quantity(), 3);
        assert!(output.contains("Quantity is too large.\n"));
    }

    #[test]
    fn test_closed_input_ends_intake() {
        let (order, _) = run_intake("dosa\nidli\n");
        assert!(matches!(order, Err(AppError::InputClosed { .. })));

        let (order, _) = run_intake("biryani\nabc\n");
        assert!(matches!(order, Err(AppError::InputClosed { .. })));
    }
}
