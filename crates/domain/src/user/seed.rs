//! Users present at process start.

use common::Timestamp;

use super::User;

/// Returns the seeded users, `user-999` being suspended.
pub fn users(now: Timestamp) -> Vec<User> {
    vec![
        User::new("user-001", "Alice Johnson", "alice@example.com", 28, now),
        User::new("user-002", "Bob Smith", "bob@example.com", 35, now),
        User::new("user-003", "Charlie Brown", "charlie@example.com", 42, now),
        User::new(
            "user-999",
            "Suspended User",
            "suspended@suspended.example.com",
            30,
            now,
        ),
    ]
}
