//! Admin workflow: the product form state machine and user management.
//!
//! The form is idle (no id, empty draft) until an edit command populates it
//! from a cached product. Submitting dispatches create or update on the
//! presence of an id, then always returns to idle and refreshes the product
//! list, whatever the remote outcome - failures surface as notices.

use rust_decimal::Decimal;

use kiosk_core::{Product, ProductId, ProductInput, UserId};

use super::{Redraw, Shop};

/// A field of the admin product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Price,
    Category,
    Image,
    Description,
}

impl FormField {
    /// Parse a field name as typed in a `set` command.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "price" => Some(Self::Price),
            "category" => Some(Self::Category),
            "image" => Some(Self::Image),
            "description" => Some(Self::Description),
            _ => None,
        }
    }
}

/// The admin product form's draft state.
///
/// `editing` holds the id of the product being replaced; `None` means a
/// submit creates a new product. An untouched form submits as a create with
/// empty fields, as the always-visible form in the admin panel does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    editing: Option<ProductId>,
    draft: ProductInput,
}

impl ProductForm {
    /// The id under edit, if the form was populated from a product.
    #[must_use]
    pub const fn editing(&self) -> Option<ProductId> {
        self.editing
    }

    /// The draft field values.
    #[must_use]
    pub const fn draft(&self) -> &ProductInput {
        &self.draft
    }

    fn load(&mut self, product: &Product) {
        self.editing = Some(product.id);
        self.draft = ProductInput::from(product);
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Shop {
    /// Populate the form from a cached product for editing.
    pub fn edit_product(&mut self, id: ProductId) -> Redraw {
        let Some(product) = self.state.product(id) else {
            self.notify("Product not found.");
            return Redraw::None;
        };
        self.form.load(product);
        Redraw::Products
    }

    /// Set one draft field from user input.
    ///
    /// Prices must parse as non-negative decimals; rejected input leaves the
    /// draft unchanged.
    pub fn set_form_field(&mut self, field: FormField, value: &str) -> Redraw {
        match field {
            FormField::Title => self.form.draft.title = value.to_owned(),
            FormField::Price => match value.parse::<Decimal>() {
                Ok(price) if price >= Decimal::ZERO => self.form.draft.price = price,
                _ => {
                    self.notify(format!("Invalid price: {value}"));
                    return Redraw::None;
                }
            },
            FormField::Category => self.form.draft.category = value.to_owned(),
            FormField::Image => self.form.draft.image = value.to_owned(),
            FormField::Description => self.form.draft.description = value.to_owned(),
        }
        Redraw::Products
    }

    /// Submit the form: update when an id is loaded, create otherwise.
    ///
    /// The form returns to idle and the product list is refreshed whatever
    /// the service answered; a failure only adds a notice.
    pub async fn submit_form(&mut self) -> Redraw {
        let draft = self.form.draft.clone();

        let outcome = match self.form.editing {
            Some(id) => self
                .client
                .update_product(id, &draft)
                .await
                .map(|p| format!("Product #{} updated.", p.id)),
            None => self
                .client
                .create_product(&draft)
                .await
                .map(|p| format!("Product #{} created.", p.id)),
        };

        match outcome {
            Ok(message) => self.notify(message),
            Err(e) => {
                tracing::warn!(error = %e, "product submit failed");
                self.notify(format!("Could not save product: {e}"));
            }
        }

        self.form.clear();
        self.refresh_products().await;
        Redraw::Products
    }

    /// Abandon the current draft without submitting.
    pub fn cancel_form(&mut self) -> Redraw {
        self.form.clear();
        Redraw::Products
    }

    /// Delete a product, then refresh the list.
    ///
    /// Confirmation happens in the session layer before this is called.
    pub async fn delete_product(&mut self, id: ProductId) -> Redraw {
        match self.client.delete_product(id).await {
            Ok(Some(product)) => self.notify(format!("Deleted \"{}\".", product.title)),
            Ok(None) => self.notify(format!("Product #{id} was not on the server.")),
            Err(e) => {
                tracing::warn!(error = %e, %id, "product delete failed");
                self.notify(format!("Could not delete product: {e}"));
            }
        }

        // The editing draft may reference the deleted id; drop it.
        if self.form.editing() == Some(id) {
            self.form.clear();
        }

        self.refresh_products().await;
        Redraw::Products
    }

    /// Show the admin user table, fetched fresh.
    pub async fn list_users(&mut self) -> Redraw {
        self.refresh_users().await;
        Redraw::Users
    }

    /// Delete a user, refreshing the table on success.
    pub async fn delete_user(&mut self, id: UserId) -> Redraw {
        match self.client.delete_user(id).await {
            Ok(Some(user)) => {
                self.notify(format!("Removed {}.", user.email));
                self.refresh_users().await;
                Redraw::Users
            }
            Ok(None) => {
                self.notify(format!("User #{id} was not on the server."));
                self.refresh_users().await;
                Redraw::Users
            }
            Err(e) => {
                tracing::warn!(error = %e, %id, "user delete failed");
                self.notify(format!("Could not remove user: {e}"));
                Redraw::None
            }
        }
    }
}
