//! Interactive terminal menu.
//!
//! Presentation glue over the store: prompts, numeric coercion, and
//! user-facing messages live here. Invalid numeric input is rejected before
//! it ever reaches the store; out-of-range item numbers surface from the
//! store as [`StoreError::IndexOutOfRange`] and are translated to a
//! user-facing message.
//!
//! The loop is generic over its input and output streams so tests can
//! drive it with scripted input.

use crate::item::Item;
use crate::store::{Store, StoreError, UpdateItemOptions};
use std::io::{self, BufRead, Write};
use tracing::info;

const CYAN: &str = "\x1b[96m";
const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const BLUE: &str = "\x1b[94m";
const MAGENTA: &str = "\x1b[95m";
const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// The six menu actions over a [`Store`], driven by line-based input.
pub struct Menu<R, W> {
    store: Store,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// The store being driven.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consume the menu, returning the store.
    #[must_use]
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Run the menu loop until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Menu started with {} items", self.store.len());
        loop {
            write!(self.output, "{CLEAR_SCREEN}")?;
            self.print_banner()?;
            writeln!(self.output, "{GREEN}1. Add Item{RESET}")?;
            writeln!(self.output, "{GREEN}2. View Items{RESET}")?;
            writeln!(self.output, "{GREEN}3. Update Item{RESET}")?;
            writeln!(self.output, "{GREEN}4. Verify Item{RESET}")?;
            writeln!(self.output, "{GREEN}5. Delete Item{RESET}")?;
            writeln!(self.output, "{RED}6. Exit{RESET}")?;
            let Some(choice) = self.read_prompt(&format!("{BLUE}Choose an option (1-6): {RESET}"))?
            else {
                break;
            };
            match choice.as_str() {
                "1" => {
                    self.add_item()?;
                    self.pause()?;
                }
                "2" => {
                    self.view_items()?;
                    self.pause()?;
                }
                "3" => {
                    self.update_item()?;
                    self.pause()?;
                }
                "4" => {
                    self.verify_item()?;
                    self.pause()?;
                }
                "5" => {
                    self.delete_item()?;
                    self.pause()?;
                }
                "6" => {
                    writeln!(self.output, "{MAGENTA}Exiting. Goodbye!{RESET}")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "{RED}Invalid choice. Please select 1-6.{RESET}")?;
                    self.pause()?;
                }
            }
        }
        info!("Menu exited with {} items", self.store.len());
        Ok(())
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{CYAN}Inventory Management System{RESET}")
    }

    fn add_item(&mut self) -> io::Result<()> {
        let Some(name) = self.read_prompt("Enter item name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Item name cannot be empty.")?;
            return Ok(());
        }
        let quantity = self.read_prompt("Enter quantity: ")?;
        let cost = self.read_prompt("Enter cost per item: ")?;
        let (Some(quantity), Some(cost)) = (quantity, cost) else {
            return Ok(());
        };
        let (Ok(quantity), Ok(cost)) = (quantity.parse::<i64>(), cost.parse::<f64>()) else {
            writeln!(
                self.output,
                "Invalid input. Quantity must be an integer and cost a number."
            )?;
            return Ok(());
        };
        self.store.add(Item::new(name.clone(), quantity, cost));
        writeln!(self.output, "Item '{name}' added.")?;
        self.print_success()
    }

    fn view_items(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "Inventory is empty.")?;
            return Ok(());
        }
        writeln!(self.output, "\nCurrent Inventory:")?;
        for (position, item) in self.store.items().iter().enumerate() {
            writeln!(
                self.output,
                "{}. Name: {}, Qty: {}, Cost: {}, Status: {}",
                position + 1,
                item.name,
                item.quantity,
                item.cost,
                item.status_label()
            )?;
        }
        Ok(())
    }

    fn update_item(&mut self) -> io::Result<()> {
        self.view_items()?;
        if self.store.is_empty() {
            return Ok(());
        }
        let Some(index) = self.prompt_item_number("update")? else {
            return Ok(());
        };
        let Some(current) = self.store.items().get(index).cloned() else {
            writeln!(self.output, "Invalid item number.")?;
            return Ok(());
        };
        writeln!(
            self.output,
            "Updating '{}' (leave blank to keep current value)",
            current.name
        )?;
        let Some(name) = self.read_prompt(&format!("New name [{}]: ", current.name))? else {
            return Ok(());
        };
        let Some(quantity) = self.read_prompt(&format!("New quantity [{}]: ", current.quantity))?
        else {
            return Ok(());
        };
        let Some(cost) = self.read_prompt(&format!("New cost [{}]: ", current.cost))? else {
            return Ok(());
        };

        let quantity = match parse_optional::<i64>(&quantity) {
            Ok(parsed) => parsed,
            Err(()) => {
                writeln!(self.output, "Invalid input.")?;
                return Ok(());
            }
        };
        let cost = match parse_optional::<f64>(&cost) {
            Ok(parsed) => parsed,
            Err(()) => {
                writeln!(self.output, "Invalid input.")?;
                return Ok(());
            }
        };

        let options = UpdateItemOptions {
            name: if name.is_empty() { None } else { Some(name) },
            quantity,
            cost,
        };
        match self.store.update(index, options) {
            Ok(()) => {
                writeln!(self.output, "Item updated.")?;
                self.print_success()
            }
            Err(StoreError::IndexOutOfRange { .. }) => {
                writeln!(self.output, "Invalid item number.")
            }
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn verify_item(&mut self) -> io::Result<()> {
        self.view_items()?;
        if self.store.is_empty() {
            return Ok(());
        }
        let Some(index) = self.prompt_item_number("verify")? else {
            return Ok(());
        };
        match self.store.verify(index) {
            Ok(()) => {
                let name = self
                    .store
                    .items()
                    .get(index)
                    .map(|item| item.name.clone())
                    .unwrap_or_default();
                writeln!(self.output, "Item '{name}' marked as checked.")?;
                self.print_success()
            }
            Err(StoreError::IndexOutOfRange { .. }) => {
                writeln!(self.output, "Invalid item number.")
            }
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn delete_item(&mut self) -> io::Result<()> {
        self.view_items()?;
        if self.store.is_empty() {
            return Ok(());
        }
        let Some(index) = self.prompt_item_number("delete")? else {
            return Ok(());
        };
        match self.store.delete(index) {
            Ok(removed) => {
                writeln!(self.output, "Item '{}' deleted.", removed.name)?;
                self.print_success()
            }
            Err(StoreError::IndexOutOfRange { .. }) => {
                writeln!(self.output, "Invalid item number.")
            }
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    /// Prompt for a 1-based item number, returning the 0-based index.
    ///
    /// `None` means the input was exhausted or rejected (a message has
    /// already been printed for rejected input). Range checking is left to
    /// the store.
    fn prompt_item_number(&mut self, action: &str) -> io::Result<Option<usize>> {
        let Some(line) = self.read_prompt(&format!("Enter item number to {action}: "))? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(number) if number >= 1 => Ok(usize::try_from(number - 1).ok()),
            Ok(_) => {
                writeln!(self.output, "Invalid item number.")?;
                Ok(None)
            }
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                Ok(None)
            }
        }
    }

    fn print_success(&mut self) -> io::Result<()> {
        writeln!(self.output, "{GREEN}Success!{RESET}")
    }

    fn pause(&mut self) -> io::Result<()> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        let _ = self.read_line()?;
        Ok(())
    }

    /// Write a prompt, flush, and read one trimmed line. `None` at EOF.
    fn read_prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parse an optional update field: blank input means "keep current value".
fn parse_optional<T: std::str::FromStr>(input: &str) -> Result<Option<T>, ()> {
    if input.is_empty() {
        return Ok(None);
    }
    input.parse::<T>().map(Some).map_err(|_| ())
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
