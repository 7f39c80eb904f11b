//! Command parsing and the interactive loop.
//!
//! One command per input line; each maps to one [`Shop`] operation, and the
//! returned [`Redraw`] intent drives the [`Screen`]. Product deletion asks
//! for y/N confirmation here, so the shop's operations stay
//! non-interactive; user removal fires immediately, like the remove action
//! on the user row.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use kiosk_core::{ProductId, UserId};

use crate::render::Screen;
use crate::shop::{FormField, Redraw, Shop};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Browse,
    Category(String),
    Sort(String),
    Cart,
    Mode,
    Help,
    Quit,
    Add(ProductId),
    Remove(ProductId),
    Checkout,
    Users,
    RemoveUser(UserId),
    Edit(ProductId),
    Set(FormField, String),
    Submit,
    Cancel,
    Delete(ProductId),
}

impl Command {
    /// Parse a non-empty input line.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown commands, missing
    /// arguments, or ids that do not parse.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or("Type a command, or 'help'.")?;
        let rest: Vec<&str> = words.collect();

        match verb {
            "browse" | "products" => Ok(Self::Browse),
            "category" => Ok(Self::Category(one_arg(&rest, "category <name|all>")?)),
            "sort" => Ok(Self::Sort(one_arg(&rest, "sort <key>")?)),
            "cart" => Ok(Self::Cart),
            "mode" => Ok(Self::Mode),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "add" => Ok(Self::Add(ProductId::new(id_arg(&rest, "add <id>")?))),
            "remove" => Ok(Self::Remove(ProductId::new(id_arg(&rest, "remove <id>")?))),
            "checkout" => Ok(Self::Checkout),
            "users" => Ok(Self::Users),
            "rmuser" => Ok(Self::RemoveUser(UserId::new(id_arg(&rest, "rmuser <id>")?))),
            "edit" => Ok(Self::Edit(ProductId::new(id_arg(&rest, "edit <id>")?))),
            "set" => parse_set(&rest),
            "submit" => Ok(Self::Submit),
            "cancel" => Ok(Self::Cancel),
            "delete" => Ok(Self::Delete(ProductId::new(id_arg(&rest, "delete <id>")?))),
            other => Err(format!("Unknown command '{other}'. Type 'help'.")),
        }
    }
}

// Category names can contain spaces ("men's clothing").
fn one_arg(rest: &[&str], usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        return Err(format!("Usage: {usage}"));
    }
    Ok(rest.join(" "))
}

fn id_arg(rest: &[&str], usage: &str) -> Result<i64, String> {
    let [value] = rest else {
        return Err(format!("Usage: {usage}"));
    };
    value.parse().map_err(|_| format!("'{value}' is not an id."))
}

fn parse_set(rest: &[&str]) -> Result<Command, String> {
    let [name, value @ ..] = rest else {
        return Err("Usage: set <field> <value>".to_owned());
    };
    if value.is_empty() {
        return Err("Usage: set <field> <value>".to_owned());
    }
    let field = FormField::parse(name).ok_or_else(|| {
        format!("Unknown field '{name}'. Fields: title, price, category, image, description.")
    })?;
    Ok(Command::Set(field, value.join(" ")))
}

/// The interactive storefront session.
pub struct Session<W> {
    shop: Shop,
    screen: Screen<W>,
}

impl<W: Write> Session<W> {
    /// Create a session over a shop and an output sink.
    pub const fn new(shop: Shop, screen: Screen<W>) -> Self {
        Self { shop, screen }
    }

    /// Take the session apart, e.g. to inspect what was rendered.
    pub fn into_parts(self) -> (Shop, Screen<W>) {
        (self.shop, self.screen)
    }

    /// Run the loop until end of input or a quit command.
    ///
    /// The session owns the shop mutably and awaits every catalog call
    /// inline, so no two operations ever overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output sink fails.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> io::Result<()> {
        // Initial stock: one refresh, then the full storefront.
        self.shop.refresh_products().await;
        self.repaint(Redraw::All)?;

        let mut lines = input.lines();
        loop {
            self.screen.prompt(self.shop.admin_mode())?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    self.screen.notices(&[message])?;
                    continue;
                }
            };

            if matches!(command, Command::Quit) {
                break;
            }
            let redraw = self.dispatch(command, &mut lines).await?;
            self.repaint(redraw)?;
        }
        Ok(())
    }

    async fn dispatch<R: AsyncBufRead + Unpin>(
        &mut self,
        command: Command,
        lines: &mut Lines<R>,
    ) -> io::Result<Redraw> {
        let redraw = match command {
            Command::Browse => self.shop.browse().await,
            Command::Category(name) => self.shop.set_category(&name).await,
            Command::Sort(key) => self.shop.set_sort(&key).await,
            Command::Cart => Redraw::Cart,
            Command::Mode => self.shop.toggle_mode().await,
            Command::Help => {
                self.screen.help(self.shop.admin_mode())?;
                Redraw::None
            }
            Command::Add(id) => self.shop.add_to_cart(id),
            Command::Remove(id) => self.shop.remove_from_cart(id),
            Command::Checkout => self.shop.checkout().await,
            Command::Users => self.shop.list_users().await,
            Command::RemoveUser(id) => self.shop.delete_user(id).await,
            Command::Edit(id) => self.shop.edit_product(id),
            Command::Set(field, value) => self.shop.set_form_field(field, &value),
            Command::Submit => self.shop.submit_form().await,
            Command::Cancel => self.shop.cancel_form(),
            Command::Delete(id) => {
                if self.confirmed(&format!("Delete product #{id}?"), lines).await? {
                    self.shop.delete_product(id).await
                } else {
                    Redraw::None
                }
            }
            // Handled by the loop before dispatch.
            Command::Quit => Redraw::None,
        };
        Ok(redraw)
    }

    async fn confirmed<R: AsyncBufRead + Unpin>(
        &mut self,
        question: &str,
        lines: &mut Lines<R>,
    ) -> io::Result<bool> {
        self.screen.confirm(question)?;
        let answer = lines.next_line().await?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }

    fn repaint(&mut self, what: Redraw) -> io::Result<()> {
        let notices = self.shop.take_notices();
        self.screen.notices(&notices)?;

        match what {
            Redraw::None => Ok(()),
            Redraw::Cart => self.screen.cart(&self.shop.cart_view()),
            Redraw::Products => self.repaint_products(),
            Redraw::Users => self.screen.users(&self.shop.user_rows()),
            Redraw::All => {
                self.repaint_products()?;
                if self.shop.admin_mode() {
                    self.screen.users(&self.shop.user_rows())?;
                }
                self.screen.cart(&self.shop.cart_view())
            }
        }
    }

    fn repaint_products(&mut self) -> io::Result<()> {
        self.screen.products(
            &self.shop.product_cards(),
            self.shop.category_label(),
            self.shop.sort_label(),
        )?;
        if self.shop.admin_mode() {
            self.screen.form(self.shop.form())?;
        }
        Ok(())
    }
}
