use crate::core::notify::{ChangeNotifier, Subscription};
use crate::domain::model::{CartState, LineItem, Product, ProductId};
use tracing::debug;

/// Owns the cart state. All mutation goes through these methods; nothing
/// else may touch the items sequence, which is what keeps uniqueness-by-id
/// and observer consistency intact.
///
/// Every call that actually changes the state pushes the new snapshot to
/// subscribed observers before returning. Calls that leave the state as-is
/// (adding a product already present, removing an absent id) return the
/// current snapshot without notifying.
pub struct CartStore {
    state: CartState,
    notifier: ChangeNotifier,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            state: CartState::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&CartState) + 'static) -> Subscription {
        self.notifier.subscribe(callback)
    }

    pub fn open(&mut self) -> CartState {
        if !self.state.open {
            self.state.open = true;
            self.notify();
        }
        self.state()
    }

    pub fn close(&mut self) -> CartState {
        if self.state.open {
            self.state.open = false;
            self.notify();
        }
        self.state()
    }

    pub fn contains_product(&self, id: &ProductId) -> bool {
        self.state.items.iter().any(|item| item.product.id == *id)
    }

    /// Appends a new line item with quantity 1, unless the product is
    /// already in the cart; the duplicate add neither increments nor
    /// reorders.
    pub fn add_product(&mut self, product: Product) -> CartState {
        if self.contains_product(&product.id) {
            debug!(product = %product.id, "Product already in cart, ignoring");
        } else {
            debug!(product = %product.id, "Adding product to cart");
            self.state.items.push(LineItem::new(product));
            self.notify();
        }
        self.state()
    }

    /// Removes the line item with this id. Absent ids are a no-op, not an
    /// error.
    pub fn remove_product(&mut self, id: &ProductId) -> CartState {
        let before = self.state.items.len();
        self.state.items.retain(|item| item.product.id != *id);
        if self.state.items.len() != before {
            debug!(product = %id, "Removed product from cart");
            self.notify();
        }
        self.state()
    }

    pub fn clear_products(&mut self) -> CartState {
        if !self.state.items.is_empty() {
            self.state.items.clear();
            self.notify();
        }
        self.state()
    }

    pub fn clear_cart(&mut self) -> CartState {
        self.clear_products();
        self.close()
    }

    pub fn has_products(&self) -> bool {
        !self.state.items.is_empty()
    }

    pub fn state(&self) -> CartState {
        self.state.clone()
    }

    /// Bumps the quantity of the matching line item, returning the new
    /// value. `None` when no item has this id.
    pub fn increment(&mut self, id: &ProductId) -> Option<u32> {
        let item = self.find_item_mut(id)?;
        let quantity = item.quantity.increment();
        self.notify();
        Some(quantity)
    }

    /// Lowers the quantity of the matching line item, flooring at zero.
    /// A zero quantity does not remove the item; removal is only ever
    /// explicit via `remove_product`. `None` when no item has this id.
    pub fn decrement(&mut self, id: &ProductId) -> Option<u32> {
        let item = self.find_item_mut(id)?;
        let before = item.quantity.value();
        let quantity = item.quantity.decrement();
        if quantity != before {
            self.notify();
        }
        Some(quantity)
    }

    fn find_item_mut(&mut self, id: &ProductId) -> Option<&mut LineItem> {
        self.state.items.iter_mut().find(|item| item.product.id == *id)
    }

    fn notify(&self) {
        self.notifier.notify(&self.state);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
