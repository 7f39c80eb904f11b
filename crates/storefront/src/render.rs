//! Terminal rendering adapter.
//!
//! [`Screen`] turns view models into text on a writer. It never touches the
//! network or the state store; controllers decide what gets repainted and
//! hand over ready-made view models. Tests render into a `Vec<u8>` and
//! assert on the text.

use std::io::{self, Write};

use crate::shop::ProductForm;
use crate::views::{CardActions, CartView, ProductCard, UserRow};

/// Writes the storefront UI to any `io::Write` sink.
pub struct Screen<W> {
    out: W,
}

impl<W: Write> Screen<W> {
    /// Create a screen over a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the screen and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// One line per queued notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn notices(&mut self, notices: &[String]) -> io::Result<()> {
        for notice in notices {
            writeln!(self.out, "* {notice}")?;
        }
        Ok(())
    }

    /// The product grid, with the action hints for the current mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn products(
        &mut self,
        cards: &[ProductCard],
        category: &str,
        sort: &str,
    ) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "PRODUCTS (category: {category}, sort: {sort}) - {} shown",
            cards.len()
        )?;

        if cards.is_empty() {
            writeln!(self.out, "  (nothing to show)")?;
            return Ok(());
        }

        for card in cards {
            writeln!(self.out, "  [{}] {} - {}", card.id, card.title, card.price)?;
            writeln!(self.out, "      {}", card.blurb)?;
            if !card.image.is_empty() {
                writeln!(self.out, "      image: {}", card.image)?;
            }
            let hint = match card.actions {
                CardActions::Purchase => format!("add {}", card.id),
                CardActions::Manage => format!("edit {id} | delete {id}", id = card.id),
            };
            writeln!(self.out, "      actions: {hint}")?;
        }
        Ok(())
    }

    /// The admin user table.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn users(&mut self, rows: &[UserRow]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "USERS - {} registered", rows.len())?;
        for row in rows {
            writeln!(
                self.out,
                "  [{}] {} ({}) - remove: rmuser {}",
                row.id, row.email, row.role, row.id
            )?;
        }
        Ok(())
    }

    /// The cart panel with its total.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn cart(&mut self, cart: &CartView) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "CART")?;
        if cart.lines.is_empty() {
            writeln!(self.out, "  (empty)")?;
        }
        for line in &cart.lines {
            writeln!(
                self.out,
                "  [{}] {} (x{}) - {}",
                line.id, line.title, line.quantity, line.line_total
            )?;
        }
        writeln!(self.out, "  Total: {}", cart.total)
    }

    /// The admin product form's current draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn form(&mut self, form: &ProductForm) -> io::Result<()> {
        writeln!(self.out)?;
        match form.editing() {
            Some(id) => writeln!(self.out, "PRODUCT FORM (editing #{id})")?,
            None => writeln!(self.out, "PRODUCT FORM (new product)")?,
        }
        let draft = form.draft();
        writeln!(self.out, "  title:       {}", draft.title)?;
        writeln!(self.out, "  price:       {}", draft.price)?;
        writeln!(self.out, "  category:    {}", draft.category)?;
        writeln!(self.out, "  image:       {}", draft.image)?;
        writeln!(self.out, "  description: {}", draft.description)
    }

    /// The command prompt, labeled by mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn prompt(&mut self, admin_mode: bool) -> io::Result<()> {
        let label = if admin_mode { "admin" } else { "shop" };
        write!(self.out, "{label}> ")?;
        self.out.flush()
    }

    /// A y/N confirmation question.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn confirm(&mut self, question: &str) -> io::Result<()> {
        write!(self.out, "{question} [y/N] ")?;
        self.out.flush()
    }

    /// The command reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn help(&mut self, admin_mode: bool) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  browse                  refresh and show products")?;
        writeln!(self.out, "  category <name|all>     filter by category")?;
        writeln!(self.out, "  sort <price-asc|price-desc|name|default>")?;
        writeln!(self.out, "  cart                    show the cart")?;
        writeln!(self.out, "  mode                    toggle admin mode")?;
        writeln!(self.out, "  help                    this text")?;
        writeln!(self.out, "  quit                    leave")?;
        if admin_mode {
            writeln!(self.out, "  users                   list users")?;
            writeln!(self.out, "  rmuser <id>             remove a user")?;
            writeln!(self.out, "  edit <id>               load a product into the form")?;
            writeln!(self.out, "  set <field> <value>     edit a form field")?;
            writeln!(self.out, "  submit                  create or update from the form")?;
            writeln!(self.out, "  cancel                  clear the form")?;
            writeln!(self.out, "  delete <id>             delete a product")?;
        } else {
            writeln!(self.out, "  add <id>                add a product to the cart")?;
            writeln!(self.out, "  remove <id>             drop a product from the cart")?;
            writeln!(self.out, "  checkout                place the order")?;
        }
        Ok(())
    }
}
