//! The in-memory order collection, owned by the order actor.

use crate::domain::Order;

/// Insertion-ordered collection of orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `orders`, keeping their order.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Removes the order with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Order> {
        let index = self.orders.iter().position(|order| order.id == id)?;
        Some(self.orders.remove(index))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dish, OrderStatus};

    fn order(id: &str) -> Order {
        Order::new(id, "120 Orange St", "555-1234", OrderStatus::Pending, vec![Dish::new(1)])
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut store = OrderStore::new();
        store.push(order("b"));
        store.push(order("a"));
        store.push(order("c"));

        let ids: Vec<&str> = store.list().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = OrderStore::from_orders(vec![order("a"), order("b"), order("c")]);

        let removed = store.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(store.len(), 2);
        assert!(!store.contains("b"));
        assert_eq!(store.list()[1].id, "c");
        assert!(store.remove("b").is_none());
    }

    #[test]
    fn test_find_mut_mutates_in_place() {
        let mut store = OrderStore::from_orders(vec![order("a")]);
        store.find_mut("a").unwrap().status = OrderStatus::Delivered;
        assert_eq!(store.find("a").unwrap().status, OrderStatus::Delivered);
        assert!(store.find("missing").is_none());
    }
}
