//! Main menu loop and the actions behind each option.

use std::io::{BufRead, Write};

use stocktrack_core::DomainError;
use stocktrack_inventory::Inventory;

use crate::error::{ConsoleError, ConsoleResult};
use crate::prompt::{Console, parse_int};

pub const MENU_TEXT: &str = "\n=== FASHION STORE STOCK MANAGER ===\n\
1. Add new product\n\
2. Show stock\n\
3. Check low stock warnings\n\
4. Update product stock\n\
5. Exit";

pub const FAREWELL: &str = "Thank you! Closing the application.";

/// One of the five menu entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    ListStock,
    LowStockCheck,
    UpdateStock,
    Exit,
}

impl MenuChoice {
    /// Map the user's (trimmed) answer to an entry.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddProduct),
            "2" => Some(Self::ListStock),
            "3" => Some(Self::LowStockCheck),
            "4" => Some(Self::UpdateStock),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop should keep going after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user picks "Exit" or input runs out.
///
/// Only console IO failures escape; every domain failure is reported inline.
pub fn run<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    loop {
        match step(inventory, console) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(ConsoleError::InputClosed) => {
                tracing::info!("input closed; leaving menu");
                console.say("")?;
                console.say(FAREWELL)?;
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}

/// Show the menu once, read a choice, and carry it out.
pub fn step<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> ConsoleResult<Flow> {
    console.say(MENU_TEXT)?;
    let answer = console.read_line("Choose a menu option (1-5): ")?;

    let Some(choice) = MenuChoice::parse(&answer) else {
        tracing::debug!(answer = %answer.trim(), "unknown menu choice");
        console.say("Invalid choice! Choose 1-5.")?;
        return Ok(Flow::Continue);
    };
    tracing::debug!(?choice, "menu choice");

    match choice {
        MenuChoice::AddProduct => add_product(inventory, console)?,
        MenuChoice::ListStock => list_stock(inventory, console)?,
        MenuChoice::LowStockCheck => warn_low_stock(inventory, console)?,
        MenuChoice::UpdateStock => update_stock(inventory, console)?,
        MenuChoice::Exit => {
            console.say(FAREWELL)?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

pub fn add_product<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    let name = console.read_line("Product name: ")?.trim().to_string();
    let price = console.prompt_price("Price (Rp): ")?;
    let stock = console.prompt_int("Initial stock: ")?;

    match inventory.add_product(name.as_str(), price, stock) {
        Ok(product) => {
            tracing::info!(name = product.name(), %price, stock = product.stock(), "product added");
            console.say(format!("Product '{name}' added."))
        }
        Err(err) => {
            tracing::warn!(%err, "product rejected");
            report(console, &err)
        }
    }
}

pub fn list_stock<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    if inventory.is_empty() {
        return console.say("Inventory is empty! Add a product first.");
    }

    console.say("\n=== PRODUCT STOCK LIST ===")?;
    for (i, product) in inventory.products().iter().enumerate() {
        console.say(format!("{}. {}", i + 1, inventory.describe(product)))?;
    }
    console.say(format!("\nTotal stock: {}", inventory.total_stock()))
}

/// Print a warning per low-stock product, then offer to restock one.
pub fn warn_low_stock<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    let warnings: Vec<String> = inventory
        .low_stock()
        .iter()
        .map(|entry| {
            format!(
                "WARNING: {} stock is low ({})!",
                entry.product.name(),
                entry.product.stock()
            )
        })
        .collect();

    if warnings.is_empty() {
        return console.say("No low stock.");
    }
    for line in &warnings {
        console.say(line)?;
    }

    if !console.prompt_yes_no("Add stock for low-stock products? (y/n): ")? {
        return console.say("OK, warning dismissed.");
    }

    list_stock(inventory, console)?;
    adjust_selected(inventory, console, "Choose product number (1-based): ")
}

/// Menu option 4: list, pick a product, add a quantity.
pub fn update_stock<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    if inventory.is_empty() {
        return console.say("No products yet! Add one first.");
    }

    list_stock(inventory, console)?;
    adjust_selected(
        inventory,
        console,
        "Choose product number to update (1-based): ",
    )
}

/// Read a 1-based index and a quantity, then apply the adjustment.
///
/// Unparsable answers abort this single attempt instead of re-prompting.
fn adjust_selected<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
    index_label: &str,
) -> ConsoleResult<()> {
    let answer = console.read_line(index_label)?;
    let index = match parse_position(&answer, inventory.len()) {
        Ok(index) => index,
        Err(err) => return report(console, &err),
    };

    let delta = match parse_int(&console.read_line("Additional quantity: ")?) {
        Ok(delta) => delta,
        Err(err) => return report(console, &err),
    };

    match inventory.adjust_stock(index, delta) {
        Ok(stock) => {
            let name = inventory.get(index).map(|p| p.name()).unwrap_or_default();
            tracing::info!(name, delta, stock, "stock adjusted");
            console.say(format!("Stock of {name} updated to {stock}."))
        }
        Err(err) => {
            tracing::warn!(%err, index, delta, "stock adjustment rejected");
            report(console, &err)
        }
    }
}

/// Parse a 1-based product number into a checked 0-based position.
///
/// Integers too large for `i64` are still integers, so they count as out of
/// range rather than as unparsable text.
fn parse_position(text: &str, len: usize) -> Result<usize, DomainError> {
    match parse_int(text) {
        Ok(number) => to_position(number, len),
        Err(_) if is_integer_literal(text) => Err(DomainError::out_of_range(usize::MAX, len)),
        Err(err) => Err(err),
    }
}

fn is_integer_literal(text: &str) -> bool {
    let text = text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a 1-based number as typed by the user to a checked 0-based position.
fn to_position(number: i64, len: usize) -> Result<usize, DomainError> {
    match usize::try_from(number) {
        Ok(n) if n >= 1 && n <= len => Ok(n - 1),
        _ => Err(DomainError::out_of_range(
            usize::try_from(number.saturating_sub(1)).unwrap_or(usize::MAX),
            len,
        )),
    }
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &DomainError,
) -> ConsoleResult<()> {
    match err {
        DomainError::Validation(msg) => console.say(format!("Error: {msg}!")),
        DomainError::OutOfRange { .. } => console.say("Invalid product number!"),
        DomainError::InvalidInput(_) => console.say("Invalid input!"),
    }
}
