//! Dual-indexed order storage.

use std::collections::HashMap;

use common::{Page, PageRequest, Timestamp};

use super::{Order, OrderId, OrderItem, OrderStatus};
use crate::UserId;

/// Orders keyed by identifier, plus each user's orders in insertion order.
///
/// Both indexes and the sequence counter only change through `&mut self`
/// methods, so holding the store behind one lock keeps them consistent.
#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: HashMap<OrderId, Order>,
    by_user: HashMap<UserId, Vec<OrderId>>,
    next_seq: u64,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self {
            orders: HashMap::new(),
            by_user: HashMap::new(),
            next_seq: 1,
        }
    }
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing orders, continuing the sequence at `next_seq`.
    pub fn with_orders(orders: impl IntoIterator<Item = Order>, next_seq: u64) -> Self {
        let mut store = Self {
            next_seq,
            ..Self::default()
        };
        for order in orders {
            store.insert(order);
        }
        store
    }

    /// Inserts an order into both indexes, replacing one with the same id.
    pub fn insert(&mut self, order: Order) {
        if let Some(previous) = self.orders.remove(&order.id) {
            if let Some(ids) = self.by_user.get_mut(&previous.user_id) {
                ids.retain(|id| id != &previous.id);
            }
        }

        self.by_user
            .entry(order.user_id.clone())
            .or_default()
            .push(order.id.clone());
        self.orders.insert(order.id.clone(), order);
    }

    /// Creates a pending order with a fresh identifier and a computed total.
    pub fn create(&mut self, user_id: UserId, items: Vec<OrderItem>, now: Timestamp) -> Order {
        let order = Order {
            id: self.next_id(),
            user_id,
            total_amount: Order::total_of(&items),
            items,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.insert(order.clone());
        order
    }

    /// Takes the next unused sequence identifier.
    fn next_id(&mut self) -> OrderId {
        loop {
            let id = OrderId::from_sequence(self.next_seq);
            self.next_seq += 1;
            if !self.orders.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// Returns one page of a user's orders in insertion order.
    ///
    /// A user without orders yields an empty page.
    pub fn list_by_user(&self, user_id: &str, page: PageRequest) -> Page<Order> {
        let ids = self.by_user.get(user_id).map(Vec::as_slice).unwrap_or(&[]);

        Page {
            items: ids[page.window(ids.len())]
                .iter()
                .filter_map(|id| self.orders.get(id).cloned())
                .collect(),
            total: ids.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns true if every indexed id resolves to an order owned by that
    /// user, and every order is indexed exactly once.
    pub fn is_consistent(&self) -> bool {
        let indexed: usize = self.by_user.values().map(Vec::len).sum();

        indexed == self.orders.len()
            && self.by_user.iter().all(|(user_id, ids)| {
                ids.iter().all(|id| {
                    self.orders
                        .get(id)
                        .is_some_and(|order| &order.user_id == user_id)
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;
    use chrono::Utc;

    fn items() -> Vec<OrderItem> {
        vec![OrderItem::new("prod-002", 3, Money::from_cents(2999))]
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = OrderStore::new();
        let now = Utc::now();

        let first = store.create(UserId::new("user-1"), items(), now);
        let second = store.create(UserId::new("user-1"), items(), now);

        assert_eq!(first.id.as_str(), "order-001");
        assert_eq!(second.id.as_str(), "order-002");
        assert_eq!(first.total_amount.cents(), 8997);
        assert_eq!(first.status, OrderStatus::Pending);
        assert_eq!(first.created_at, first.updated_at);
        assert!(store.is_consistent());
    }

    #[test]
    fn test_create_skips_existing_ids() {
        let mut store = OrderStore::new();
        let now = Utc::now();
        let taken = store.create(UserId::new("user-1"), items(), now);

        let mut store = OrderStore::with_orders([taken], 1);
        let created = store.create(UserId::new("user-2"), items(), now);

        assert_eq!(created.id.as_str(), "order-002");
        assert_eq!(store.len(), 2);

        let next = store.create(UserId::new("user-2"), items(), now);
        assert_eq!(next.id.as_str(), "order-003");
    }

    #[test]
    fn test_list_by_user_in_insertion_order() {
        let mut store = OrderStore::new();
        let now = Utc::now();
        let a = store.create(UserId::new("user-1"), items(), now);
        store.create(UserId::new("user-2"), items(), now);
        let c = store.create(UserId::new("user-1"), vec![], now);

        let page = store.list_by_user("user-1", PageRequest::new(10, 0));
        let ids: Vec<&OrderId> = page.items.iter().map(|o| &o.id).collect();

        assert_eq!(ids, vec![&a.id, &c.id]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_list_for_unknown_user_is_empty() {
        let store = OrderStore::new();
        let page = store.list_by_user("nobody", PageRequest::new(10, 0));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_replacing_an_order_keeps_indexes_consistent() {
        let mut store = OrderStore::new();
        let mut order = store.create(UserId::new("user-1"), items(), Utc::now());

        order.user_id = UserId::new("user-2");
        store.insert(order);

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.list_by_user("user-1", PageRequest::new(10, 0)).total,
            0
        );
        assert_eq!(
            store.list_by_user("user-2", PageRequest::new(10, 0)).total,
            1
        );
        assert!(store.is_consistent());
    }
}
